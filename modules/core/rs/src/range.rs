//! Capability predicates.
//!
//! Each trait here is a compile-time query over a candidate type. Apart from [`View`], which is an
//! explicit opt-in, the predicates are structural: they hold for anything with the right shape,
//! whether or not the shape is semantically meaningful for that type.

use super::position::{
    BidirectionalPosition, ContiguousPosition, Position, RandomAccessPosition, Sentinel,
};

/// Anything exposing a begin position and an end sentinel.
///
/// Borrowed containers take part through their references (`&[T]`, `&Vec<T>`, ...), the same way
/// they take part in `IntoIterator`.
pub trait Range {
    type Position: Position;
    type Sentinel: Sentinel<Self::Position>;

    fn begin(&self) -> Self::Position;

    fn end(&self) -> Self::Sentinel;

    /// Whether the range has no elements. Falls back to comparing begin against end.
    fn is_empty(&self) -> bool {
        self.end().reached(&self.begin())
    }
}

/// A range usable as a pipeline stage: cloning it is O(1) and never copies elements.
///
/// The cost of `Clone` cannot be observed by the type system, so views opt in explicitly.
pub trait View: Range + Clone {}

/// A range that knows its length in O(1).
pub trait SizedRange: Range {
    fn size(&self) -> usize;
}

/// A range whose begin and end have the same type.
pub trait CommonRange: Range {
    /// The end of the range as a dereferenceable-by-decrement position.
    fn end_position(&self) -> Self::Position;
}

impl<R, P> CommonRange for R
where
    R: Range<Position = P, Sentinel = P> + ?Sized,
    P: Position,
{
    #[inline(always)]
    fn end_position(&self) -> P {
        self.end()
    }
}

/// A range whose positions can move backwards.
pub trait BidirectionalRange: Range<Position: BidirectionalPosition> {}

impl<R> BidirectionalRange for R where R: Range<Position: BidirectionalPosition> + ?Sized {}

/// A range whose positions support O(1) offsets and distances.
pub trait RandomAccessRange: BidirectionalRange + Range<Position: RandomAccessPosition> {}

impl<R> RandomAccessRange for R where R: Range<Position: RandomAccessPosition> + ?Sized {}

/// A range laid out in contiguous memory.
pub trait ContiguousRange: RandomAccessRange + Range<Position: ContiguousPosition> {}

impl<R> ContiguousRange for R where R: Range<Position: ContiguousPosition> + ?Sized {}
