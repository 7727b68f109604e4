//! Sequences that remember their elements.

use crate::{IntoSequence, Sequence};
use alloc::vec::Vec;

/// Sequence that stores all elements obtained from an inner sequence,
/// so that later traversals replay them instead of recomputing them.
///
/// The inner sequence is rewound only once, namely on the first rewind.
/// It is advanced at most once per position, no matter how often
/// the buffered sequence is traversed.
/// Traversals that stop early can be resumed:
/// positions that were not reached before are pulled from the inner sequence
/// when they are visited for the first time.
///
/// Before the first rewind, `valid` returns `false` without consulting
/// the inner sequence, and `next` only moves the position.
/// The inner sequence is thus never read before it was rewound.
///
/// ~~~
/// # use lazyseq_core::{Buffered, OneShot, Sequence};
/// let stream = OneShot::new(|| "abc".chars().enumerate());
/// let mut buf = Buffered::new(stream);
/// assert_eq!(buf.to_list(), ['a', 'b', 'c']);
/// // a one-shot stream could not be traversed again without buffering
/// assert_eq!(buf.to_list(), ['a', 'b', 'c']);
/// ~~~
pub struct Buffered<S: Sequence> {
    inner: S,
    buffer: Vec<(S::Key, S::Value)>,
    /// position of the logical traversal
    position: usize,
    /// position at which the inner sequence stands
    cursor: usize,
    /// index of the element returned by `key` and `current`
    snapshot: Option<usize>,
    started: bool,
    finished: bool,
}

impl<S: Sequence + Clone> Clone for Buffered<S>
where
    S::Key: Clone,
    S::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            buffer: self.buffer.clone(),
            ..*self
        }
    }
}

impl<S: Sequence> Buffered<S> {
    /// Buffer anything that can be converted into a sequence.
    pub fn new<T: IntoSequence<Seq = S>>(items: T) -> Self {
        Self::from_seq(items.into_seq())
    }

    pub(crate) fn from_seq(inner: S) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            position: 0,
            cursor: 0,
            snapshot: None,
            started: false,
            finished: false,
        }
    }

    /// Number of elements that have been obtained from the inner sequence.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Return true if the inner sequence was seen to be exhausted.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Position of the current traversal.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the inner sequence, dropping the buffer.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Record the element at the cursor of the inner sequence.
    fn pull(&mut self) -> bool {
        debug_assert_eq!(self.cursor, self.buffer.len());
        let kv = if self.inner.valid() {
            self.inner.key().zip(self.inner.current())
        } else {
            None
        };
        match kv {
            Some(kv) => {
                self.buffer.push(kv);
                log::trace!("buffered element {}", self.cursor);
                true
            }
            None => {
                log::trace!("inner sequence finished after {} elements", self.cursor);
                self.finished = true;
                false
            }
        }
    }
}

impl<S: Sequence> Sequence for Buffered<S>
where
    S::Key: Clone,
    S::Value: Clone,
{
    type Key = S::Key;
    type Value = S::Value;

    fn rewind(&mut self) {
        if !self.started {
            self.started = true;
            self.inner.rewind();
        }
        self.position = 0;
    }

    fn valid(&mut self) -> bool {
        if self.position < self.buffer.len() {
            self.snapshot = Some(self.position);
            return true;
        }
        if !self.started || self.finished || self.position > self.buffer.len() || !self.pull() {
            return false;
        }
        self.snapshot = Some(self.position);
        true
    }

    fn current(&self) -> Option<S::Value> {
        let (_k, v) = self.buffer.get(self.snapshot?)?;
        Some(v.clone())
    }

    fn key(&self) -> Option<S::Key> {
        let (k, _v) = self.buffer.get(self.snapshot?)?;
        Some(k.clone())
    }

    fn next(&mut self) {
        if !self.finished && self.started && self.position == self.buffer.len() {
            // `valid` was not called for this position,
            // but we have to record it to keep the buffer indexed by position
            self.pull();
        }
        self.position += 1;
        if !self.finished && self.cursor < self.position && self.cursor < self.buffer.len() {
            self.inner.next();
            self.cursor += 1;
        }
    }
}

#[test]
fn snapshot() {
    let mut buf = Buffered::new([1, 2]);
    assert_eq!(buf.current(), None);
    buf.rewind();
    assert!(buf.valid());
    buf.next();
    // without `valid`, we still see the previous element
    assert_eq!(buf.current(), Some(1));
    assert!(buf.valid());
    assert_eq!((buf.key(), buf.current()), (Some(1), Some(2)));
    buf.next();
    assert!(!buf.valid());
    assert!(buf.is_finished());
    assert_eq!(buf.buffered_len(), 2);
}

#[test]
fn valid_before_rewind() {
    let mut buf = Buffered::new([1, 2]);
    assert!(!buf.valid());
    assert_eq!((buf.key(), buf.current()), (None, None));
    assert_eq!(buf.buffered_len(), 0);
    assert!(!buf.is_finished());
    assert_eq!(buf.to_list(), [1, 2]);
}

#[test]
fn skip_without_valid() {
    use alloc::vec;
    let mut buf = Buffered::new(vec!['a', 'b', 'c']);
    buf.rewind();
    buf.next();
    assert!(buf.valid());
    assert_eq!(buf.current(), Some('b'));
    assert_eq!(buf.to_pairs(), vec![(0, 'a'), (1, 'b'), (2, 'c')]);
}
