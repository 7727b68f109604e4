//! Replayable and zipped lazy sequences.
//!
//! This crate provides two adapters over the [`Sequence`] cursor protocol:
//!
//! * [`Buffered`] remembers the elements of a sequence,
//!   so that it can be traversed many times while its source is consumed only once.
//! * [`Zip`] traverses several sequences in lockstep,
//!   yielding their current values together or merged by a function.
//!
//! The example below buffers an expensive source and zips its values with others.
//!
//! ~~~
//! use lazyseq_core::{Buffered, OneShot, Sequence, Zip};
//! use std::cell::Cell;
//!
//! let computed = Cell::new(0);
//! let count = &computed;
//! let squares = OneShot::new(move || {
//!     (1..=3).map(move |x| {
//!         count.set(count.get() + 1);
//!         x * x
//!     }).enumerate()
//! });
//! let mut squares = Buffered::new(squares);
//!
//! assert_eq!(squares.to_list(), [1, 4, 9]);
//! assert_eq!(squares.to_list(), [1, 4, 9]);
//! // every square was computed only once
//! assert_eq!(computed.get(), 3);
//!
//! // add the squares to their roots
//! let mut sums = Zip::with([vec![1, 2, 3], squares.to_list()], |xs: Vec<i32>| {
//!     xs.iter().sum::<i32>()
//! });
//! assert_eq!(sums.to_list(), [2, 6, 12]);
//! ~~~
#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod box_seq;
mod buffered;
pub mod error;
mod iter;
mod seq;
mod source;
mod zip;

pub use box_seq::{box_values, BoxSeq, CloneSequence};
pub use buffered::Buffered;
pub use error::Error;
pub use iter::Iter;
pub use seq::Sequence;
pub use source::{IntoSequence, OneShot, Source};
pub use zip::{Combine, Spread, Tuple, With, Zip};

/// Map from keys to values that preserves insertion order.
pub type Map<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;
