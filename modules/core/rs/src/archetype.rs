//! Category-narrowing position wrappers.
//!
//! Each wrapper exposes exactly one traversal category of the position it wraps, hiding any
//! stronger capabilities. They exist to exercise capability propagation: a view over
//! `Forward<SlicePosition<T>>` must behave like a view over a singly linked list.

use crate::position::{BidirectionalPosition, Position};

/// Exposes only forward traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Forward<P>(pub P);

/// Exposes forward and backward traversal, but no random access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional<P>(pub P);

impl<P> Forward<P> {
    pub fn base(&self) -> &P {
        &self.0
    }
}

impl<P> Bidirectional<P> {
    pub fn base(&self) -> &P {
        &self.0
    }
}

impl<P: Position> Position for Forward<P> {
    type Item = P::Item;

    fn read(&self) -> P::Item {
        self.0.read()
    }

    fn step(&mut self) {
        self.0.step();
    }
}

impl<P: BidirectionalPosition> Position for Bidirectional<P> {
    type Item = P::Item;

    fn read(&self) -> P::Item {
        self.0.read()
    }

    fn step(&mut self) {
        self.0.step();
    }
}

impl<P: BidirectionalPosition> BidirectionalPosition for Bidirectional<P> {
    fn step_back(&mut self) {
        self.0.step_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::SlicePosition;
    use crate::position::RandomAccessPosition;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Forward<SlicePosition<'static, u8>>: Position);
    assert_not_impl_any!(Forward<SlicePosition<'static, u8>>: BidirectionalPosition);
    assert_impl_all!(Bidirectional<SlicePosition<'static, u8>>: BidirectionalPosition);
    assert_not_impl_any!(Bidirectional<SlicePosition<'static, u8>>: RandomAccessPosition);

    #[test]
    fn test_forwarding() {
        let data = [5, 6, 7];
        let mut pos = Bidirectional(SlicePosition::new(&data, 0));
        pos.advance(2);
        assert_eq!(*pos.read(), 7);
        pos.step_back();
        assert_eq!(*pos.read(), 6);
        assert_eq!(pos.base().index(), 1);

        let mut fwd = Forward(SlicePosition::new(&data, 0));
        fwd.step();
        assert_eq!(*fwd.read(), 6);
    }
}
