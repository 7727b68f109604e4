//! Traversing sequences with Rust iterators.

use crate::Sequence;

/// Iterator over the `(key, value)` pairs of a sequence.
///
/// The sequence is rewound on the first call to `next`.
pub struct Iter<S> {
    seq: S,
    started: bool,
}

impl<S> Iter<S> {
    /// Prepare a traversal of the given sequence.
    pub fn new(seq: S) -> Self {
        Self {
            seq,
            started: false,
        }
    }

    /// Return the underlying sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = (S::Key, S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.seq.rewind();
        }
        if !self.seq.valid() {
            return None;
        }
        let kv = self.seq.key().zip(self.seq.current());
        Sequence::next(&mut self.seq);
        kv
    }
}
