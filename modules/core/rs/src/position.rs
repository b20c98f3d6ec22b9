use ::impl_tools::autoimpl;

/// A position marker (iterator) identifying a location within a sequence.
///
/// Positions are multipass: cloning one and advancing the clone never invalidates the original,
/// and two positions into the same sequence compare equal iff they denote the same location.
/// Comparing positions taken from different sequences is meaningless but not unsafe.
///
/// The traversal category is a static property expressed by the sub-traits
/// [`BidirectionalPosition`], [`RandomAccessPosition`] and [`ContiguousPosition`].
#[autoimpl(for<P: trait> Box<P>)]
pub trait Position: Clone + PartialEq {
    /// Value produced on dereference, usually a shared reference into the sequence.
    type Item;

    /// Dereference the position. Reading the end position is a precondition violation.
    fn read(&self) -> Self::Item;

    /// Move to the next location.
    fn step(&mut self);

    /// Move `n` locations forward. Random-access positions answer this in O(1).
    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}

/// A position that can also move backwards.
#[autoimpl(for<P: trait> Box<P>)]
pub trait BidirectionalPosition: Position {
    /// Move to the previous location.
    fn step_back(&mut self);

    /// Move `n` locations backward. Random-access positions answer this in O(1).
    fn retreat(&mut self, n: usize) {
        for _ in 0..n {
            self.step_back();
        }
    }
}

/// A position supporting O(1) arbitrary offsets and distances.
///
/// Implementors are expected to override [`Position::advance`] and
/// [`BidirectionalPosition::retreat`] in terms of [`RandomAccessPosition::jump`].
pub trait RandomAccessPosition: BidirectionalPosition + PartialOrd {
    /// Move by `offset` locations, backwards when negative.
    fn jump(&mut self, offset: isize);

    /// Signed number of steps from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;
}

/// A random-access position backed by contiguous storage.
pub trait ContiguousPosition: RandomAccessPosition {
    type Element;

    /// Raw pointer to the element at this position. The pointer may be one past the end of the
    /// storage and must not be dereferenced in that case.
    fn as_ptr(&self) -> *const Self::Element;
}

/// The end marker of a range.
///
/// Every position is a sentinel for positions of its own type; ranges whose sentinel is their
/// position type are called common.
pub trait Sentinel<P: Position> {
    /// Whether the traversal reached the end at `position`.
    fn reached(&self, position: &P) -> bool;

    /// Materialise the position at which the sentinel is reached, walking forward from `from`.
    fn locate(&self, from: P) -> P {
        let mut position = from;
        while !self.reached(&position) {
            position.step();
        }
        position
    }
}

impl<P: Position> Sentinel<P> for P {
    #[inline(always)]
    fn reached(&self, position: &P) -> bool {
        self == position
    }

    #[inline(always)]
    fn locate(&self, _from: P) -> P {
        self.clone()
    }
}

/// Sentinel of unbounded ranges; never reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unreachable;

impl<P: Position> Sentinel<P> for Unreachable {
    #[inline(always)]
    fn reached(&self, _position: &P) -> bool {
        false
    }
}

/// Step forward or backward depending on the sign of `offset`.
pub(crate) fn jump_by_steps<P: BidirectionalPosition>(position: &mut P, offset: isize) {
    if offset >= 0 {
        position.advance(offset.unsigned_abs());
    } else {
        position.retreat(offset.unsigned_abs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tick(i32);

    impl Position for Tick {
        type Item = i32;

        fn read(&self) -> i32 {
            self.0
        }

        fn step(&mut self) {
            self.0 += 1;
        }
    }

    impl BidirectionalPosition for Tick {
        fn step_back(&mut self) {
            self.0 -= 1;
        }
    }

    #[test]
    fn test_default_advance_and_retreat() {
        let mut tick = Tick(0);
        tick.advance(5);
        assert_eq!(tick.read(), 5);
        tick.retreat(3);
        assert_eq!(tick.read(), 2);

        jump_by_steps(&mut tick, -2);
        assert_eq!(tick, Tick(0));
        jump_by_steps(&mut tick, 7);
        assert_eq!(tick, Tick(7));
    }

    #[test]
    fn test_position_is_its_own_sentinel() {
        let end = Tick(4);
        assert!(!end.reached(&Tick(3)));
        assert!(end.reached(&Tick(4)));
        assert_eq!(end.locate(Tick(0)), Tick(4));
    }

    #[test]
    fn test_unreachable() {
        assert!(!Unreachable.reached(&Tick(i32::MAX)));
    }

    #[test]
    fn test_boxed_position() {
        let mut boxed = Box::new(Tick(1));
        boxed.step();
        boxed.advance(2);
        boxed.step_back();
        assert_eq!(boxed.read(), 3);
    }
}
