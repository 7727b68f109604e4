//! The cursor protocol shared by all sequences.

use crate::{Buffered, Iter, Map, With, Zip};
use alloc::{boxed::Box, vec::Vec};

/// Cursor-based traversal: rewind, check, read, advance.
///
/// A traversal looks as follows:
///
/// ~~~
/// # use lazyseq_core::{Sequence, Source};
/// let mut seq = Source::values(["a", "b"].into_iter());
/// seq.rewind();
/// while seq.valid() {
///     let (k, v) = (seq.key().unwrap(), seq.current().unwrap());
///     # assert_eq!(["a", "b"][k], v);
///     seq.next();
/// }
/// ~~~
///
/// `key` and `current` are only meaningful right after `valid` returned `true`.
/// Implementations may return stale values (or `None`) otherwise.
pub trait Sequence {
    /// Key type, such as a position or a map key.
    type Key;
    /// Value type.
    type Value;

    /// Reset the traversal to its start.
    ///
    /// This may perform one-time initialization of the underlying source.
    fn rewind(&mut self);

    /// Return whether there is an element at the cursor.
    fn valid(&mut self) -> bool;

    /// Value of the element at the cursor.
    fn current(&self) -> Option<Self::Value>;

    /// Key of the element at the cursor.
    fn key(&self) -> Option<Self::Key>;

    /// Advance the cursor by one element.
    fn next(&mut self);

    /// Rewind and return an iterator over all `(key, value)` pairs.
    ///
    /// The iterator borrows the sequence, so this can be called several times.
    fn iter(&mut self) -> Iter<&mut Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Traverse from the start and return all values.
    fn to_list(&mut self) -> Vec<Self::Value>
    where
        Self: Sized,
    {
        self.iter().map(|(_k, v)| v).collect()
    }

    /// Traverse from the start and return all `(key, value)` pairs.
    fn to_pairs(&mut self) -> Vec<(Self::Key, Self::Value)>
    where
        Self: Sized,
    {
        self.iter().collect()
    }

    /// Traverse from the start and return a map from keys to values.
    ///
    /// Keys keep the position of their first occurrence,
    /// but a later occurrence of the same key overwrites the value.
    fn to_map(&mut self) -> Map<Self::Key, Self::Value>
    where
        Self: Sized,
        Self::Key: core::hash::Hash + Eq,
    {
        self.iter().collect()
    }

    /// Remember all elements, so that later traversals do not recompute them.
    fn buffered(self) -> Buffered<Self>
    where
        Self: Sized,
    {
        Buffered::from_seq(self)
    }

    /// Zip this sequence with others, yielding vectors of their values.
    fn zip<I>(self, others: I) -> Zip<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        Zip::new(core::iter::once(self).chain(others))
    }

    /// Zip this sequence with others, combining their values with `f`.
    fn zip_with<I, F, U>(self, others: I, f: F) -> Zip<Self, With<F>>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
        F: Fn(Vec<Self::Value>) -> U,
    {
        Zip::with(core::iter::once(self).chain(others), f)
    }

    /// Erase the type of the sequence.
    fn boxed<'a>(self) -> crate::BoxSeq<'a, Self::Key, Self::Value>
    where
        Self: Clone + Sized + 'a,
    {
        Box::new(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Key = S::Key;
    type Value = S::Value;

    fn rewind(&mut self) {
        (**self).rewind()
    }

    fn valid(&mut self) -> bool {
        (**self).valid()
    }

    fn current(&self) -> Option<S::Value> {
        (**self).current()
    }

    fn key(&self) -> Option<S::Key> {
        (**self).key()
    }

    fn next(&mut self) {
        (**self).next()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn rewind(&mut self) {
        (**self).rewind()
    }

    fn valid(&mut self) -> bool {
        (**self).valid()
    }

    fn current(&self) -> Option<S::Value> {
        (**self).current()
    }

    fn key(&self) -> Option<S::Key> {
        (**self).key()
    }

    fn next(&mut self) {
        (**self).next()
    }
}
