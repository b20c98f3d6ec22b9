use std::ops;

use crate::num::{distance, offset, PrimInt};
use crate::position::{
    jump_by_steps, BidirectionalPosition, Position, RandomAccessPosition, Unreachable,
};
use crate::range::{Range, SizedRange, View};

/// Position of a counting range: the current value itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Counter<Idx: PrimInt> {
    value: Idx,
}

impl<Idx: PrimInt> Counter<Idx> {
    pub fn new(value: Idx) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Idx {
        self.value
    }
}

impl<Idx: PrimInt> Position for Counter<Idx> {
    type Item = Idx;

    #[inline(always)]
    fn read(&self) -> Idx {
        self.value
    }

    #[inline(always)]
    fn step(&mut self) {
        self.value = self.value + Idx::one();
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        self.value = offset(self.value, n as i128);
    }
}

impl<Idx: PrimInt> BidirectionalPosition for Counter<Idx> {
    #[inline(always)]
    fn step_back(&mut self) {
        self.value = self.value - Idx::one();
    }

    #[inline(always)]
    fn retreat(&mut self, n: usize) {
        self.value = offset(self.value, -(n as i128));
    }
}

impl<Idx: PrimInt> RandomAccessPosition for Counter<Idx> {
    fn jump(&mut self, offset: isize) {
        jump_by_steps(self, offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        distance(self.value, other.value)
    }
}

/// `start..end` counts from `start` up to, but excluding, `end`.
impl<Idx: PrimInt> Range for ops::Range<Idx> {
    type Position = Counter<Idx>;
    type Sentinel = Counter<Idx>;

    fn begin(&self) -> Self::Position {
        Counter::new(self.start)
    }

    fn end(&self) -> Self::Sentinel {
        Counter::new(self.end.max(self.start))
    }
}

impl<Idx: PrimInt> SizedRange for ops::Range<Idx> {
    fn size(&self) -> usize {
        distance(self.start, self.end.max(self.start)).unsigned_abs()
    }
}

impl<Idx: PrimInt> View for ops::Range<Idx> {}

/// `start..` counts upwards without bound.
impl<Idx: PrimInt> Range for ops::RangeFrom<Idx> {
    type Position = Counter<Idx>;
    type Sentinel = Unreachable;

    fn begin(&self) -> Self::Position {
        Counter::new(self.start)
    }

    fn end(&self) -> Self::Sentinel {
        Unreachable
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl<Idx: PrimInt> View for ops::RangeFrom<Idx> {}
