//! Uniform access to ranges.
//!
//! Each function resolves statically, in this order: the implementation written for the type
//! itself, an implementation provided by the type's own crate (orphan rules let any crate opt its
//! types into [`Range`] and [`SizedRange`]), and finally the provided trait method acting as a
//! generic fallback. Types without any of these are rejected at compile time.

use crate::iter::Iter;
use crate::position::{ContiguousPosition, Position};
use crate::range::{ContiguousRange, Range, SizedRange};

#[inline(always)]
pub fn begin<R: Range + ?Sized>(range: &R) -> R::Position {
    range.begin()
}

#[inline(always)]
pub fn end<R: Range + ?Sized>(range: &R) -> R::Sentinel {
    range.end()
}

#[inline(always)]
pub fn size<R: SizedRange + ?Sized>(range: &R) -> usize {
    range.size()
}

#[inline(always)]
pub fn empty<R: Range + ?Sized>(range: &R) -> bool {
    range.is_empty()
}

/// Pointer to the first element of a contiguous range. Dangling (but non-null) for empty ranges.
#[inline(always)]
pub fn data<R>(range: &R) -> *const <R::Position as ContiguousPosition>::Element
where
    R: ContiguousRange + ?Sized,
{
    range.begin().as_ptr()
}

/// Iterate over the elements of a range.
#[inline(always)]
pub fn iter<R: Range + ?Sized>(range: &R) -> Iter<R::Position, R::Sentinel> {
    Iter::new(range.begin(), range.end())
}

/// Read the element at `position`. Alias of [`Position::read`] for call sites that only deal with
/// free functions.
#[inline(always)]
pub fn read<P: Position>(position: &P) -> P::Item {
    position.read()
}
