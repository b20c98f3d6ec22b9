use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use seqview_core_rs::{BidirectionalPosition, Iter, Position, Range, SizedRange, View};

use crate::reverse::{ReverseView, Reversible};

/// The `length` elements starting at `start`.
///
/// The view trusts its length: fewer than `length` elements reachable from `start` is a caller
/// error and is not detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Getters, Dissolve, Constructor)]
pub struct CountedView<P> {
    start: P,
    length: usize,
}

pub fn counted<P: Position>(start: P, length: usize) -> CountedView<P> {
    CountedView::new(start, length)
}

impl<P: Position> Range for CountedView<P> {
    type Position = P;
    type Sentinel = P;

    fn begin(&self) -> P {
        self.start.clone()
    }

    fn end(&self) -> P {
        let mut end = self.start.clone();
        end.advance(self.length);
        end
    }

    fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<P: Position> SizedRange for CountedView<P> {
    fn size(&self) -> usize {
        self.length
    }
}

impl<P: Position> View for CountedView<P> {}

impl<P: BidirectionalPosition> Reversible for CountedView<P> {
    type Reversed = ReverseView<Self>;

    fn reversed(self) -> Self::Reversed {
        ReverseView::new(self)
    }
}

impl<P: Position> IntoIterator for CountedView<P> {
    type Item = P::Item;
    type IntoIter = Iter<P, P>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.begin(), self.end())
    }
}
