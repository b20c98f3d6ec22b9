use std::iter::FusedIterator;

use derive_getters::Dissolve;
use derive_more::Constructor;

use crate::position::{BidirectionalPosition, Position, Sentinel};

/// Bridge from a position/sentinel pair to [`Iterator`].
///
/// Double-ended when the range is common (`S == P`) and bidirectional: `next_back` walks the end
/// position backwards until it meets the front.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Dissolve, Constructor)]
pub struct Iter<P, S> {
    front: P,
    back: S,
}

impl<P: Position, S: Sentinel<P>> Iterator for Iter<P, S> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.back.reached(&self.front) {
            return None;
        }
        let item = self.front.read();
        self.front.step();
        Some(item)
    }
}

impl<P: BidirectionalPosition> DoubleEndedIterator for Iter<P, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_back();
        Some(self.back.read())
    }
}

impl<P: Position, S: Sentinel<P>> FusedIterator for Iter<P, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Range;

    #[test]
    fn test_forward() {
        let data = vec![1, 2, 3];
        let rng = &data;
        let iter = Iter::new(rng.begin(), rng.end());
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_double_ended() {
        let rng = 0u32..5;
        let mut iter = Iter::new(rng.begin(), rng.end());
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2]);

        let reversed = Iter::new(rng.begin(), rng.end()).rev().collect::<Vec<_>>();
        assert_eq!(reversed, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_unbounded() {
        let rng = 10u64..;
        let taken = Iter::new(rng.begin(), rng.end())
            .take(3)
            .collect::<Vec<_>>();
        assert_eq!(taken, vec![10, 11, 12]);
    }
}
