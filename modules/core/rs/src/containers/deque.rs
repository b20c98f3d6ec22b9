use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};

use crate::position::{BidirectionalPosition, Position, RandomAccessPosition};
use crate::range::{Range, SizedRange};

/// Position inside a borrowed ring buffer. Random-access, but not contiguous: the deque may wrap
/// around its allocation.
pub struct DequePosition<'a, T> {
    deque: &'a VecDeque<T>,
    index: usize,
}

impl<'a, T> DequePosition<'a, T> {
    pub fn new(deque: &'a VecDeque<T>, index: usize) -> Self {
        debug_assert!(index <= deque.len());
        Self { deque, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for DequePosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DequePosition<'_, T> {}

impl<T> Debug for DequePosition<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DequePosition")
            .field("deque", &(self.deque as *const VecDeque<T>))
            .field("index", &self.index)
            .finish()
    }
}

impl<T> PartialEq for DequePosition<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.deque, other.deque)
    }
}

impl<T> PartialOrd for DequePosition<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match std::ptr::eq(self.deque, other.deque) {
            true => Some(self.index.cmp(&other.index)),
            false => None,
        }
    }
}

impl<'a, T> Position for DequePosition<'a, T> {
    type Item = &'a T;

    fn read(&self) -> &'a T {
        &self.deque[self.index]
    }

    fn step(&mut self) {
        self.index += 1;
    }

    fn advance(&mut self, n: usize) {
        self.index += n;
    }
}

impl<T> BidirectionalPosition for DequePosition<'_, T> {
    fn step_back(&mut self) {
        self.index -= 1;
    }

    fn retreat(&mut self, n: usize) {
        self.index -= n;
    }
}

impl<T> RandomAccessPosition for DequePosition<'_, T> {
    fn jump(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset);
        debug_assert!(self.index <= self.deque.len());
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }
}

impl<'a, T> Range for &'a VecDeque<T> {
    type Position = DequePosition<'a, T>;
    type Sentinel = DequePosition<'a, T>;

    fn begin(&self) -> Self::Position {
        DequePosition::new(*self, 0)
    }

    fn end(&self) -> Self::Sentinel {
        DequePosition::new(*self, self.len())
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> SizedRange for &VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{ContiguousRange, RandomAccessRange};
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(&'static VecDeque<u8>: RandomAccessRange, SizedRange);
    assert_not_impl_any!(&'static VecDeque<u8>: ContiguousRange);

    #[test]
    fn test_wrapped_deque() {
        let mut deque = VecDeque::with_capacity(4);
        deque.extend([3, 4]);
        deque.push_front(2);
        deque.push_front(1);

        let rng = &deque;
        let mut pos = rng.begin();
        pos.jump(2);
        assert_eq!(*pos.read(), 3);
        pos.step_back();
        assert_eq!(*pos.read(), 2);
        assert_eq!(pos.distance_to(&rng.end()), 3);
        assert_eq!(rng.size(), 4);
    }
}
