//! Boxed sequences.

use crate::{Sequence, Source};
use alloc::boxed::Box;
use dyn_clone::DynClone;

/// A sequence that can be cloned behind a pointer.
pub trait CloneSequence: Sequence + DynClone {}

impl<S: Sequence + Clone> CloneSequence for S {}

/// A boxed sequence.
///
/// This allows sequences of different types (but with the same keys and values)
/// to be stored together, for example to [`Zip`](crate::Zip) them.
pub type BoxSeq<'a, K, V> = Box<dyn CloneSequence<Key = K, Value = V> + 'a>;

impl<'a, K, V> Clone for BoxSeq<'a, K, V> {
    fn clone(&self) -> Self {
        dyn_clone::clone_box(&**self)
    }
}

/// Return a boxed sequence of values keyed by their position.
pub fn box_values<'a, I>(iter: I) -> BoxSeq<'a, usize, I::Item>
where
    I: Iterator + Clone + 'a,
    I::Item: Clone,
{
    Box::new(Source::values(iter))
}

#[test]
fn clone_box() {
    use alloc::vec;
    let mut seq = box_values(vec![1, 2, 3].into_iter());
    seq.rewind();
    seq.next();
    // a clone continues from the same position
    let mut seq2 = seq.clone();
    assert!(seq2.valid());
    assert_eq!(seq2.current(), Some(2));
    assert_eq!(seq2.to_list(), vec![1, 2, 3]);
    assert_eq!(seq.current(), Some(2));
}
