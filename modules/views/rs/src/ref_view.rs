use std::fmt::{Debug, Formatter};
use std::ptr;

use seqview_core_rs::{BidirectionalPosition, Iter, Position, Range, SizedRange, View};

use crate::reverse::{ReverseView, Reversible};

/// A non-owning view of a range that outlives it.
///
/// Copying the view copies the reference only. Two `RefView`s are equal when they refer to the
/// very same object.
pub struct RefView<'a, R: ?Sized> {
    base: &'a R,
}

impl<'a, R: ?Sized> RefView<'a, R> {
    pub fn new(base: &'a R) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &'a R {
        self.base
    }
}

/// Wraps a referenced range into a view without copying it.
pub fn all<'a, R: ?Sized>(range: &'a R) -> RefView<'a, R>
where
    &'a R: Range,
{
    RefView::new(range)
}

impl<R: ?Sized> Clone for RefView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for RefView<'_, R> {}

impl<R: ?Sized> PartialEq for RefView<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.base, other.base)
    }
}

impl<R: ?Sized> Eq for RefView<'_, R> {}

impl<R: ?Sized> Debug for RefView<'_, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RefView({:p})", self.base)
    }
}

impl<'a, R: ?Sized> Range for RefView<'a, R>
where
    &'a R: Range,
{
    type Position = <&'a R as Range>::Position;
    type Sentinel = <&'a R as Range>::Sentinel;

    fn begin(&self) -> Self::Position {
        self.base.begin()
    }

    fn end(&self) -> Self::Sentinel {
        self.base.end()
    }

    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

impl<'a, R: ?Sized> SizedRange for RefView<'a, R>
where
    &'a R: SizedRange,
{
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<'a, R: ?Sized> View for RefView<'a, R> where &'a R: Range {}

impl<'a, R: ?Sized> Reversible for RefView<'a, R>
where
    &'a R: Range<Position: BidirectionalPosition>,
{
    type Reversed = ReverseView<Self>;

    fn reversed(self) -> Self::Reversed {
        ReverseView::new(self)
    }
}

impl<'a, R: ?Sized> IntoIterator for RefView<'a, R>
where
    &'a R: Range,
{
    type Item = <<&'a R as Range>::Position as Position>::Item;
    type IntoIter = Iter<<&'a R as Range>::Position, <&'a R as Range>::Sentinel>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.begin(), self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewInterface;
    use seqview_core_rs::{CommonRange, ContiguousRange};
    use static_assertions::assert_impl_all;
    use std::collections::VecDeque;

    assert_impl_all!(RefView<'static, [u8]>: View, SizedRange, CommonRange, ContiguousRange, Copy);
    assert_impl_all!(RefView<'static, VecDeque<u8>>: View, SizedRange, CommonRange);

    #[test]
    fn test_forwards_to_base() {
        let data = vec![3, 1, 4, 1, 5];
        let view = all(&data);

        assert_eq!(view.size(), 5);
        assert!(!view.is_empty());
        assert_eq!(view.data(), data.as_ptr());
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), data);
        assert!(ptr::eq(view.base(), &data));
    }

    #[test]
    fn test_identity_equality() {
        let a = [1, 2];
        let b = [1, 2];
        let (va, vb) = (all(&a), all(&b));
        let copy = va;

        assert_eq!(va, copy);
        assert_ne!(va, vb);
        assert!(format!("{:?}", va).starts_with("RefView(0x"));
    }

    #[test]
    fn test_empty_base() {
        let data: VecDeque<u8> = VecDeque::new();
        let view = all(&data);
        assert!(view.is_empty());
        assert_eq!(view.front(), None);
        assert_eq!(view.into_iter().count(), 0);
    }

    #[test]
    fn test_reversed() {
        let data = [1, 2, 3];
        let view = all(&data).reversed();
        assert_eq!(view.into_iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert!(ptr::eq(view.reversed().base(), &data));
    }
}
