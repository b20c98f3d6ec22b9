use seqview_core_rs::{
    BidirectionalPosition, CommonRange, ContiguousPosition, Iter, Position, RandomAccessPosition,
    Sentinel, View,
};

/// Operations derived from `begin`/`end` for every view.
///
/// Each method is gated by the capability it needs; when a view lacks it the method is simply not
/// callable. Emptiness comes from [`seqview_core_rs::Range::is_empty`], which every range already
/// has. A view that is random-access and common can opt into
/// [`seqview_core_rs::SizedRange`] by returning [`ViewInterface::len`].
pub trait ViewInterface: View {
    /// Number of elements, by subtracting the begin position from the end position. O(1).
    fn len(&self) -> usize
    where
        Self: CommonRange,
        Self::Position: RandomAccessPosition,
    {
        let distance = self.begin().distance_to(&self.end_position());
        debug_assert!(distance >= 0);
        distance.unsigned_abs()
    }

    /// Number of elements, by walking from begin to end. O(n), always available.
    fn count(&self) -> usize {
        let end = self.end();
        let mut position = self.begin();
        let mut count = 0;
        while !end.reached(&position) {
            position.step();
            count += 1;
        }
        count
    }

    fn front(&self) -> Option<<Self::Position as Position>::Item> {
        let begin = self.begin();
        match self.end().reached(&begin) {
            true => None,
            false => Some(begin.read()),
        }
    }

    fn back(&self) -> Option<<Self::Position as Position>::Item>
    where
        Self: CommonRange,
        Self::Position: BidirectionalPosition,
    {
        let mut last = self.end_position();
        match last == self.begin() {
            true => None,
            false => {
                last.step_back();
                Some(last.read())
            }
        }
    }

    /// The `n`-th element. `n` must be smaller than the length of the view.
    fn at(&self, n: usize) -> <Self::Position as Position>::Item
    where
        Self::Position: RandomAccessPosition,
    {
        let mut position = self.begin();
        position.advance(n);
        position.read()
    }

    /// Pointer to the first element of the contiguous storage.
    fn data(&self) -> *const <Self::Position as ContiguousPosition>::Element
    where
        Self::Position: ContiguousPosition,
    {
        self.begin().as_ptr()
    }

    fn iter(&self) -> Iter<Self::Position, Self::Sentinel> {
        Iter::new(self.begin(), self.end())
    }
}

impl<V: View> ViewInterface for V {}
