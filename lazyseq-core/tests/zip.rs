//! Tests for zipped sequences.

pub mod common;

use common::Counted;
use lazyseq_core::{box_values, BoxSeq, Buffered, Error, Sequence, Source, Zip};

#[test]
fn pairs() {
    let mut zip = Zip::new([[1, 2], [3, 4]]);
    assert_eq!(zip.to_list(), [[1, 3], [2, 4]]);
}

#[test]
fn sum() {
    let mut zip = Zip::with([[1, 2], [3, 4]], |xs: Vec<i32>| xs.into_iter().sum::<i32>());
    assert_eq!(zip.to_list(), [4, 6]);

    let mut zip = Zip::spread([[1, 2], [3, 4]], |[a, b]: [i32; 2]| a + b).unwrap();
    assert_eq!(zip.to_list(), [4, 6]);
}

#[test]
fn need_all() {
    let mut zip = Zip::new([vec![1, 2], vec![1, 2, 3], vec![1, 2, 3, 4, 5]]);
    assert_eq!(zip.to_list().len(), 2);

    let mut zip = Zip::new([vec![1, 2, 3], vec![]]);
    assert_eq!(zip.to_list(), Vec::<Vec<i32>>::new());
}

#[test]
fn positional_keys() {
    let a = Source::pairs([("x", 1), ("y", 2)].into_iter());
    let b = Source::pairs([("z", 3), ("x", 4)].into_iter());
    let mut zip = a.zip([b]);
    assert_eq!(zip.to_pairs(), [(0, vec![1, 3]), (1, vec![2, 4])]);
}

#[test]
fn arity() {
    let f = |[a, b, c]: [u8; 3]| a + b + c;
    let err = Zip::spread([vec![1], vec![2]], f).err();
    assert_eq!(err, Some(Error::Arity { expected: 3, found: 2 }));
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("combiner takes 3 values, but 2 sources were given")
    );

    let mut zip = Zip::spread([vec![1], vec![2], vec![3]], f).unwrap();
    assert_eq!(zip.to_list(), [6]);
}

#[test]
fn lockstep() {
    let (a, calls_a) = Counted::new(vec![1, 2, 3]);
    let (b, calls_b) = Counted::new(vec![4, 5]);
    let mut zip = a.zip_with([b], |xs| xs[0] * xs[1]);
    assert_eq!(zip.to_list(), [4, 10]);
    assert_eq!(zip.to_list(), [4, 10]);
    for calls in [calls_a, calls_b] {
        assert_eq!((calls.rewinds(), calls.nexts()), (2, 4));
    }
}

#[test]
fn heterogeneous() {
    let squares: BoxSeq<usize, u32> = Source::values((1..).map(|x: u32| x * x)).boxed();
    let buffered = Buffered::new(vec![10, 20, 30]).boxed();
    let mut zip = Zip::new([squares, buffered, box_values([7, 7].into_iter())]);
    assert_eq!(zip.to_list(), [[1, 10, 7], [4, 20, 7]]);
    // zipped sequences can be cloned and traversed independently
    let mut zip2 = zip.clone();
    assert_eq!(zip2.to_list(), zip.to_list());
}

#[test]
fn buffered_sources() {
    let (a, calls) = Counted::new(vec!['a', 'b', 'c']);
    let mut zip = Zip::new([a.buffered(), Buffered::new(Counted::new(vec!['x', 'y', 'z']).0)]);
    assert_eq!(zip.to_list(), [['a', 'x'], ['b', 'y'], ['c', 'z']]);
    assert_eq!(zip.to_list(), [['a', 'x'], ['b', 'y'], ['c', 'z']]);
    assert_eq!((calls.rewinds(), calls.nexts()), (1, 3));
}

#[test]
fn stale_current() {
    let mut zip = Zip::new([[1], [2]]);
    assert_eq!((zip.key(), zip.current()), (None, None));
    zip.rewind();
    assert_eq!(zip.key(), None);
    assert!(zip.valid());
    assert_eq!((zip.key(), zip.current()), (Some(0), Some(vec![1, 2])));
    zip.next();
    // advancing discards the element until it is checked again
    assert_eq!((zip.key(), zip.current()), (None, None));
    assert!(!zip.valid());
    assert_eq!((zip.key(), zip.current()), (None, None));
}
