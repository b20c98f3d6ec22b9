use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use crate::position::{BidirectionalPosition, ContiguousPosition, Position, RandomAccessPosition};
use crate::range::{Range, SizedRange};

/// Position inside a borrowed slice.
///
/// Stores the slice together with an index, so positions stay valid (and comparable) at the end of
/// the slice and reading never touches memory outside of it.
pub struct SlicePosition<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SlicePosition<'a, T> {
    pub fn new(slice: &'a [T], index: usize) -> Self {
        debug_assert!(index <= slice.len());
        Self { slice, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slice(&self) -> &'a [T] {
        self.slice
    }

    #[inline(always)]
    fn same_slice(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice)
    }
}

impl<T> Clone for SlicePosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

impl<T> Debug for SlicePosition<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlicePosition")
            .field("slice", &self.slice.as_ptr())
            .field("index", &self.index)
            .finish()
    }
}

impl<T> PartialEq for SlicePosition<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.same_slice(other)
    }
}

impl<T> Eq for SlicePosition<'_, T> {}

impl<T> PartialOrd for SlicePosition<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.same_slice(other) {
            true => Some(self.index.cmp(&other.index)),
            false => None,
        }
    }
}

impl<'a, T> Position for SlicePosition<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn read(&self) -> &'a T {
        &self.slice[self.index]
    }

    #[inline(always)]
    fn step(&mut self) {
        self.index += 1;
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        self.index += n;
    }
}

impl<T> BidirectionalPosition for SlicePosition<'_, T> {
    #[inline(always)]
    fn step_back(&mut self) {
        self.index -= 1;
    }

    #[inline(always)]
    fn retreat(&mut self, n: usize) {
        self.index -= n;
    }
}

impl<T> RandomAccessPosition for SlicePosition<'_, T> {
    #[inline(always)]
    fn jump(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset);
        debug_assert!(self.index <= self.slice.len());
    }

    #[inline(always)]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(self.same_slice(other));
        other.index as isize - self.index as isize
    }
}

impl<T> ContiguousPosition for SlicePosition<'_, T> {
    type Element = T;

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.index)
    }
}

impl<'a, T> Range for &'a [T] {
    type Position = SlicePosition<'a, T>;
    type Sentinel = SlicePosition<'a, T>;

    fn begin(&self) -> Self::Position {
        SlicePosition::new(*self, 0)
    }

    fn end(&self) -> Self::Sentinel {
        SlicePosition::new(*self, self.len())
    }

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T> SizedRange for &[T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'a, T, const N: usize> Range for &'a [T; N] {
    type Position = SlicePosition<'a, T>;
    type Sentinel = SlicePosition<'a, T>;

    fn begin(&self) -> Self::Position {
        SlicePosition::new(*self, 0)
    }

    fn end(&self) -> Self::Sentinel {
        SlicePosition::new(*self, N)
    }

    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T, const N: usize> SizedRange for &[T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<'a, T> Range for &'a Vec<T> {
    type Position = SlicePosition<'a, T>;
    type Sentinel = SlicePosition<'a, T>;

    fn begin(&self) -> Self::Position {
        SlicePosition::new(*self, 0)
    }

    fn end(&self) -> Self::Sentinel {
        SlicePosition::new(*self, self.len())
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> SizedRange for &Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}
