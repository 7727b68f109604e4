//! Sequences over Rust iterators and in-memory containers.

use crate::Sequence;
use alloc::vec::Vec;
use core::iter::{Cloned, Enumerate};
use once_cell::unsync::Lazy;

/// Replayable sequence over a cloneable iterator of `(key, value)` pairs.
///
/// Every rewind restarts from a fresh clone of the original iterator.
pub struct Source<I: Iterator> {
    init: I,
    iter: Option<I>,
    item: Option<I::Item>,
}

impl<I: Iterator> Source<Enumerate<I>> {
    /// Sequence of values keyed by their position.
    pub fn values(iter: I) -> Self {
        Self::pairs(iter.enumerate())
    }
}

impl<I: Iterator> Source<I> {
    /// Sequence of `(key, value)` pairs with the given keys.
    ///
    /// Keys may repeat.
    pub fn pairs(iter: I) -> Self {
        Self {
            init: iter,
            iter: None,
            item: None,
        }
    }
}

impl<I: Iterator + Clone> Clone for Source<I>
where
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            init: self.init.clone(),
            iter: self.iter.clone(),
            item: self.item.clone(),
        }
    }
}

impl<K: Clone, V: Clone, I: Iterator<Item = (K, V)> + Clone> Sequence for Source<I> {
    type Key = K;
    type Value = V;

    fn rewind(&mut self) {
        let mut iter = self.init.clone();
        self.item = iter.next();
        self.iter = Some(iter);
    }

    fn valid(&mut self) -> bool {
        self.item.is_some()
    }

    fn current(&self) -> Option<V> {
        self.item.as_ref().map(|(_k, v)| v.clone())
    }

    fn key(&self) -> Option<K> {
        self.item.as_ref().map(|(k, _v)| k.clone())
    }

    fn next(&mut self) {
        self.item = self.iter.as_mut().and_then(|iter| iter.next());
    }
}

/// Sequence that can be traversed only once.
///
/// The iterator is created by a function on the first rewind.
/// Later rewinds leave the iterator where it is,
/// which makes this a good candidate to be [`buffered`](Sequence::buffered).
pub struct OneShot<I: Iterator, F> {
    iter: Lazy<I, F>,
    item: Option<I::Item>,
    started: bool,
}

impl<I: Iterator, F: FnOnce() -> I> OneShot<I, F> {
    /// Create a sequence from a function that yields `(key, value)` pairs.
    pub fn new(f: F) -> Self {
        Self {
            iter: Lazy::new(f),
            item: None,
            started: false,
        }
    }
}

impl<K: Clone, V: Clone, I, F> Sequence for OneShot<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnOnce() -> I,
{
    type Key = K;
    type Value = V;

    fn rewind(&mut self) {
        if !self.started {
            self.started = true;
            self.item = self.iter.next();
        }
    }

    fn valid(&mut self) -> bool {
        self.item.is_some()
    }

    fn current(&self) -> Option<V> {
        self.item.as_ref().map(|(_k, v)| v.clone())
    }

    fn key(&self) -> Option<K> {
        self.item.as_ref().map(|(k, _v)| k.clone())
    }

    fn next(&mut self) {
        if self.started {
            self.item = self.iter.next();
        }
    }
}

/// Conversion into a sequence.
///
/// Containers yield their values keyed by position.
pub trait IntoSequence {
    /// Key type of the sequence.
    type Key;
    /// Value type of the sequence.
    type Value;
    /// Sequence obtained from the conversion.
    type Seq: Sequence<Key = Self::Key, Value = Self::Value>;

    /// Perform the conversion.
    fn into_seq(self) -> Self::Seq;
}

impl<S: Sequence> IntoSequence for S {
    type Key = S::Key;
    type Value = S::Value;
    type Seq = S;

    fn into_seq(self) -> S {
        self
    }
}

impl<T: Clone> IntoSequence for Vec<T> {
    type Key = usize;
    type Value = T;
    type Seq = Source<Enumerate<alloc::vec::IntoIter<T>>>;

    fn into_seq(self) -> Self::Seq {
        Source::values(self.into_iter())
    }
}

impl<T: Clone, const N: usize> IntoSequence for [T; N] {
    type Key = usize;
    type Value = T;
    type Seq = Source<Enumerate<core::array::IntoIter<T, N>>>;

    fn into_seq(self) -> Self::Seq {
        Source::values(IntoIterator::into_iter(self))
    }
}

impl<'a, T: Clone> IntoSequence for &'a [T] {
    type Key = usize;
    type Value = T;
    type Seq = Source<Enumerate<Cloned<core::slice::Iter<'a, T>>>>;

    fn into_seq(self) -> Self::Seq {
        Source::values(self.iter().cloned())
    }
}

#[test]
fn one_shot() {
    use alloc::vec;
    let mut calls = 0;
    let mut seq = OneShot::new(|| {
        calls += 1;
        vec![(0, 'a'), (1, 'b')].into_iter()
    });
    assert_eq!(seq.to_list(), vec!['a', 'b']);
    // the iterator is not restarted
    assert_eq!(seq.to_list(), Vec::<char>::new());
    drop(seq);
    assert_eq!(calls, 1);
}

#[test]
fn source_replays() {
    use alloc::vec;
    let mut seq = Source::pairs(vec![("x", 1), ("y", 2), ("x", 3)].into_iter());
    assert_eq!(seq.to_pairs(), seq.to_pairs());
    assert_eq!(seq.to_list(), vec![1, 2, 3]);
}
