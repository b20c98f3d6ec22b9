use std::cmp::Ordering;
use std::ops;

use derive_getters::Getters;
use derive_more::Constructor;

use seqview_core_rs::num::PrimInt;
use seqview_core_rs::{
    BidirectionalPosition, Iter, Position, RandomAccessPosition, Range, Sentinel, SizedRange, View,
};

/// A position walking its base position backwards.
///
/// The reversed position sits one past the element it reads: `ReversePosition(p)` reads the
/// element just before `p`. This lets the reversed end be the base begin, so no position before
/// the first element is ever formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Getters, Constructor)]
pub struct ReversePosition<P> {
    base: P,
}

impl<P> ReversePosition<P> {
    pub fn into_base(self) -> P {
        self.base
    }
}

impl<P: BidirectionalPosition> Position for ReversePosition<P> {
    type Item = P::Item;

    fn read(&self) -> P::Item {
        let mut previous = self.base.clone();
        previous.step_back();
        previous.read()
    }

    #[inline(always)]
    fn step(&mut self) {
        self.base.step_back();
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        self.base.retreat(n);
    }
}

impl<P: BidirectionalPosition> BidirectionalPosition for ReversePosition<P> {
    #[inline(always)]
    fn step_back(&mut self) {
        self.base.step();
    }

    #[inline(always)]
    fn retreat(&mut self, n: usize) {
        self.base.advance(n);
    }
}

impl<P: PartialOrd> PartialOrd for ReversePosition<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<P: RandomAccessPosition> RandomAccessPosition for ReversePosition<P> {
    fn jump(&mut self, offset: isize) {
        match offset >= 0 {
            true => self.base.retreat(offset.unsigned_abs()),
            false => self.base.advance(offset.unsigned_abs()),
        }
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.base.distance_to(&self.base)
    }
}

/// The elements of a bidirectional view in reverse order.
///
/// Always common: its end is the reversed begin of the base. When the base is not common, every
/// call to `begin` walks the base once to find its last position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReverseView<V> {
    base: V,
}

impl<V> ReverseView<V>
where
    V: View<Position: BidirectionalPosition>,
{
    pub fn new(base: V) -> Self {
        Self { base }
    }
}

impl<V> ReverseView<V> {
    pub fn base(&self) -> &V {
        &self.base
    }

    pub fn into_base(self) -> V {
        self.base
    }
}

impl<V> Range for ReverseView<V>
where
    V: View<Position: BidirectionalPosition>,
{
    type Position = ReversePosition<V::Position>;
    type Sentinel = ReversePosition<V::Position>;

    fn begin(&self) -> Self::Position {
        ReversePosition::new(self.base.end().locate(self.base.begin()))
    }

    fn end(&self) -> Self::Sentinel {
        ReversePosition::new(self.base.begin())
    }

    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

impl<V> SizedRange for ReverseView<V>
where
    V: View<Position: BidirectionalPosition> + SizedRange,
{
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<V> View for ReverseView<V> where V: View<Position: BidirectionalPosition> {}

impl<V> IntoIterator for ReverseView<V>
where
    V: View<Position: BidirectionalPosition>,
{
    type Item = <V::Position as Position>::Item;
    type IntoIter = Iter<ReversePosition<V::Position>, ReversePosition<V::Position>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.begin(), self.end())
    }
}

/// Views that can be traversed backwards, and the view type doing so.
///
/// Reversing a [`ReverseView`] yields its base view back instead of nesting a second wrapper.
pub trait Reversible: View {
    type Reversed: View;

    fn reversed(self) -> Self::Reversed;
}

impl<V> Reversible for ReverseView<V>
where
    V: View<Position: BidirectionalPosition>,
{
    type Reversed = V;

    fn reversed(self) -> V {
        self.base
    }
}

impl<Idx: PrimInt> Reversible for ops::Range<Idx> {
    type Reversed = ReverseView<Self>;

    fn reversed(self) -> Self::Reversed {
        ReverseView::new(self)
    }
}

pub fn reverse<V: Reversible>(view: V) -> V::Reversed {
    view.reversed()
}
