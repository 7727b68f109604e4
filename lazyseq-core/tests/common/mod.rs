use lazyseq_core::Sequence;
use std::cell::Cell;
use std::rc::Rc;

/// How often the methods of a [`Counted`] sequence were called.
#[derive(Clone, Default)]
pub struct Calls {
    rewind: Rc<Cell<usize>>,
    next: Rc<Cell<usize>>,
}

impl Calls {
    pub fn rewinds(&self) -> usize {
        self.rewind.get()
    }

    pub fn nexts(&self) -> usize {
        self.next.get()
    }
}

/// Sequence over a vector that records how often it is rewound and advanced.
///
/// Values are passed through `f` whenever they are read,
/// so that a test can make the sequence yield different values over time.
pub struct Counted<T, F> {
    xs: Vec<T>,
    f: F,
    pos: usize,
    calls: Calls,
}

impl<T: Clone> Counted<T, fn(T) -> T> {
    pub fn new(xs: Vec<T>) -> (Self, Calls) {
        Self::with(xs, |x| x)
    }
}

impl<T, F> Counted<T, F> {
    pub fn with(xs: Vec<T>, f: F) -> (Self, Calls) {
        let calls = Calls::default();
        let seq = Self {
            xs,
            f,
            pos: 0,
            calls: calls.clone(),
        };
        (seq, calls)
    }
}

impl<T: Clone, F: Fn(T) -> T> Sequence for Counted<T, F> {
    type Key = usize;
    type Value = T;

    fn rewind(&mut self) {
        self.calls.rewind.set(self.calls.rewinds() + 1);
        self.pos = 0;
    }

    fn valid(&mut self) -> bool {
        self.pos < self.xs.len()
    }

    fn current(&self) -> Option<T> {
        self.xs.get(self.pos).cloned().map(&self.f)
    }

    fn key(&self) -> Option<usize> {
        (self.pos < self.xs.len()).then_some(self.pos)
    }

    fn next(&mut self) {
        self.calls.next.set(self.calls.nexts() + 1);
        self.pos += 1;
    }
}

/// Traverse `n` elements from the start, returning their keys and values.
pub fn take<S: Sequence>(seq: &mut S, n: usize) -> Vec<(S::Key, S::Value)> {
    seq.iter().take(n).collect()
}
