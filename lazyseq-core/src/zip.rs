//! Sequences that advance several sequences in lockstep.

use crate::{Error, IntoSequence, Sequence};
use alloc::vec::Vec;

/// Merge the current values of all zipped sequences into one value.
///
/// Values are given in the order of the sequences, without their keys.
pub trait Combine<V> {
    /// Merged value.
    type Output;

    /// Merge the values, one per sequence.
    fn combine(&self, values: Vec<V>) -> Self::Output;
}

/// Return the values of all sequences as a vector.
///
/// This is the combiner used when no function is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tuple;

/// Combine values with a function that takes a vector of them.
#[derive(Clone, Copy, Debug)]
pub struct With<F>(pub F);

/// Combine values with a function that takes exactly `N` of them.
///
/// This is created by [`Zip::spread`], which ensures that there are `N` sequences.
#[derive(Clone, Copy, Debug)]
pub struct Spread<F, const N: usize>(F);

impl<V> Combine<V> for Tuple {
    type Output = Vec<V>;

    fn combine(&self, values: Vec<V>) -> Vec<V> {
        values
    }
}

impl<V, U, F: Fn(Vec<V>) -> U> Combine<V> for With<F> {
    type Output = U;

    fn combine(&self, values: Vec<V>) -> U {
        (self.0)(values)
    }
}

impl<V, U, F: Fn([V; N]) -> U, const N: usize> Combine<V> for Spread<F, N> {
    type Output = U;

    fn combine(&self, values: Vec<V>) -> U {
        match <[V; N]>::try_from(values) {
            Ok(values) => (self.0)(values),
            Err(values) => unreachable!("expected {} values, got {}", N, values.len()),
        }
    }
}

/// Sequence that traverses several sequences in lockstep.
///
/// The zipped sequence has an element only if *all* sequences have one,
/// so it stops at the end of the shortest sequence.
/// Its keys are the positions of the elements,
/// regardless of the keys of the zipped sequences.
/// `key` and `current` yield `None` unless the last call to `valid` returned `true`
/// and the sequence was not advanced since.
///
/// ~~~
/// # use lazyseq_core::{Sequence, Zip};
/// let mut zip = Zip::new([[1, 2], [3, 4]]);
/// assert_eq!(zip.to_list(), [[1, 3], [2, 4]]);
///
/// let mut sum = Zip::with([[1, 2], [3, 4]], |xs: Vec<i32>| xs.iter().sum::<i32>());
/// assert_eq!(sum.to_list(), [4, 6]);
/// ~~~
#[derive(Clone)]
pub struct Zip<S, C = Tuple> {
    sources: Vec<S>,
    combiner: C,
    position: usize,
    /// whether all sequences had an element at the last `valid`
    aligned: bool,
}

impl<S, C> Zip<S, C> {
    fn attach<I, T>(sets: I, combiner: C) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoSequence<Seq = S>,
    {
        Self {
            sources: sets.into_iter().map(IntoSequence::into_seq).collect(),
            combiner,
            position: 0,
            aligned: false,
        }
    }

    /// Number of zipped sequences.
    pub fn arity(&self) -> usize {
        self.sources.len()
    }

    /// Return the zipped sequences.
    pub fn into_sources(self) -> Vec<S> {
        self.sources
    }
}

impl<S: Sequence> Zip<S> {
    /// Zip sequences, yielding the vector of their current values.
    pub fn new<I, T>(sets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoSequence<Seq = S>,
    {
        Self::attach(sets, Tuple)
    }
}

impl<S: Sequence, F> Zip<S, With<F>> {
    /// Zip sequences, yielding `f` applied to the vector of their current values.
    pub fn with<I, T, U>(sets: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoSequence<Seq = S>,
        F: Fn(Vec<S::Value>) -> U,
    {
        Self::attach(sets, With(f))
    }
}

impl<S: Sequence, F, const N: usize> Zip<S, Spread<F, N>> {
    /// Zip sequences, yielding `f` applied to their current values.
    ///
    /// This fails if the number of sequences is not `N`.
    ///
    /// ~~~
    /// # use lazyseq_core::{Error, Sequence, Zip};
    /// let mut zip = Zip::spread([[1, 2], [3, 4]], |[a, b]: [i32; 2]| a * b).unwrap();
    /// assert_eq!(zip.to_list(), [3, 8]);
    ///
    /// let err = Zip::spread([[1], [2], [3]], |[a, b]: [i32; 2]| a + b).err();
    /// assert_eq!(err, Some(Error::Arity { expected: 2, found: 3 }));
    /// ~~~
    pub fn spread<I, T, U>(sets: I, f: F) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: IntoSequence<Seq = S>,
        F: Fn([S::Value; N]) -> U,
    {
        let zip = Self::attach(sets, Spread(f));
        if zip.arity() != N {
            return Err(Error::Arity {
                expected: N,
                found: zip.arity(),
            });
        }
        Ok(zip)
    }
}

impl<S: Sequence, C: Combine<S::Value>> Sequence for Zip<S, C> {
    type Key = usize;
    type Value = C::Output;

    fn rewind(&mut self) {
        self.sources.iter_mut().for_each(|s| s.rewind());
        self.position = 0;
        self.aligned = false;
    }

    fn valid(&mut self) -> bool {
        self.aligned = !self.sources.is_empty() && self.sources.iter_mut().all(|s| s.valid());
        self.aligned
    }

    fn current(&self) -> Option<C::Output> {
        if !self.aligned {
            return None;
        }
        let values = self.sources.iter().map(|s| s.current());
        let values = values.collect::<Option<Vec<_>>>()?;
        Some(self.combiner.combine(values))
    }

    fn key(&self) -> Option<usize> {
        self.aligned.then_some(self.position)
    }

    fn next(&mut self) {
        self.sources.iter_mut().for_each(|s| s.next());
        self.position += 1;
        self.aligned = false;
    }
}

#[test]
fn empty() {
    let mut zip = Zip::new(Vec::<Vec<u8>>::new());
    assert_eq!(zip.arity(), 0);
    assert_eq!(zip.to_list(), Vec::<Vec<u8>>::new());
}

#[test]
fn single() {
    use alloc::vec;
    let mut zip = Zip::new([vec![1, 2, 3]]);
    assert_eq!(zip.to_list(), vec![vec![1], vec![2], vec![3]]);

    let mut zip = Zip::spread([vec![1, 2, 3]], |[x]: [i32; 1]| x * 10).unwrap();
    assert_eq!(zip.to_pairs(), vec![(0, 10), (1, 20), (2, 30)]);
}
