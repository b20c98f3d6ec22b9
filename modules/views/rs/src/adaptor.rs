//! Range adaptors and the `range | Adaptor` pipeline syntax.

use std::collections::VecDeque;
use std::ops::{self, BitOr};

use seqview_core_rs::num::PrimInt;
use seqview_core_rs::{BidirectionalPosition, Position, View};

use crate::counted::CountedView;
use crate::ref_view::RefView;
use crate::reverse::{ReverseView, Reversible};

/// Conversion of a viewable argument into a view.
///
/// Views convert to themselves; borrowed containers become a [`RefView`] over the container.
pub trait IntoView {
    type View: View;

    fn into_view(self) -> Self::View;
}

/// A pipeline stage turning a range of type `R` into `Self::Output`.
pub trait Adaptor<R> {
    type Output;

    fn adapt(self, range: R) -> Self::Output;
}

/// Converts its argument to a view, see [`IntoView`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct All;

/// Reverses its argument, see [`Reversible`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

impl<R: IntoView> Adaptor<R> for All {
    type Output = R::View;

    fn adapt(self, range: R) -> R::View {
        range.into_view()
    }
}

impl<R> Adaptor<R> for Reverse
where
    R: IntoView<View: Reversible>,
{
    type Output = <R::View as Reversible>::Reversed;

    fn adapt(self, range: R) -> Self::Output {
        range.into_view().reversed()
    }
}

macro_rules! impl_into_view_for_views {
    ($([$($generics:tt)*] $view:ty where [$($bounds:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> IntoView for $view where $($bounds)* {
                type View = Self;

                #[inline(always)]
                fn into_view(self) -> Self {
                    self
                }
            }

            impl<$($generics)*, A: Adaptor<Self>> BitOr<A> for $view where $($bounds)* {
                type Output = A::Output;

                #[inline(always)]
                fn bitor(self, adaptor: A) -> A::Output {
                    adaptor.adapt(self)
                }
            }
        )*
    };
}

impl_into_view_for_views!(
    ['a, R: ?Sized] RefView<'a, R> where [&'a R: seqview_core_rs::Range],
    [P] CountedView<P> where [P: Position],
    [V] ReverseView<V> where [V: View<Position: BidirectionalPosition>],
);

/// `BitOr` for foreign range types, one impl per adaptor.
macro_rules! impl_pipe {
    ([$($generics:tt)*] $range:ty) => {
        impl<$($generics)*> BitOr<All> for $range {
            type Output = <All as Adaptor<Self>>::Output;

            #[inline(always)]
            fn bitor(self, adaptor: All) -> Self::Output {
                adaptor.adapt(self)
            }
        }

        impl<$($generics)*> BitOr<Reverse> for $range {
            type Output = <Reverse as Adaptor<Self>>::Output;

            #[inline(always)]
            fn bitor(self, adaptor: Reverse) -> Self::Output {
                adaptor.adapt(self)
            }
        }
    };
}

macro_rules! impl_into_view_for_borrowed {
    ($([$($generics:tt)*] $borrowed:ty => $target:ty),* $(,)?) => {
        $(
            impl<$($generics)*> IntoView for $borrowed {
                type View = RefView<'a, $target>;

                #[inline(always)]
                fn into_view(self) -> Self::View {
                    RefView::new(self)
                }
            }

            impl_pipe!([$($generics)*] $borrowed);
        )*
    };
}

impl_into_view_for_borrowed!(
    ['a, T] &'a [T] => [T],
    ['a, T, const N: usize] &'a [T; N] => [T; N],
    ['a, T] &'a Vec<T> => Vec<T>,
    ['a, T] &'a VecDeque<T> => VecDeque<T>,
);

impl<Idx: PrimInt> IntoView for ops::Range<Idx> {
    type View = Self;

    fn into_view(self) -> Self {
        self
    }
}

impl_pipe!([Idx: PrimInt] ops::Range<Idx>);

impl<Idx: PrimInt> IntoView for ops::RangeFrom<Idx> {
    type View = Self;

    fn into_view(self) -> Self {
        self
    }
}

impl<Idx: PrimInt> BitOr<All> for ops::RangeFrom<Idx> {
    type Output = Self;

    fn bitor(self, _adaptor: All) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counted::counted;
    use seqview_core_rs::containers::SlicePosition;
    use seqview_core_rs::{Range, SizedRange};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<&'static Vec<u8> as IntoView>::View, RefView<'static, Vec<u8>>);
    assert_type_eq_all!(<ops::Range<i8> as IntoView>::View, ops::Range<i8>);
    assert_type_eq_all!(
        <ReverseView<RefView<'static, [u8]>> as BitOr<Reverse>>::Output,
        RefView<'static, [u8]>
    );

    #[test]
    fn test_all() {
        let data = vec![1, 2, 3];
        let view = &data | All;
        assert!(std::ptr::eq(view.base(), &data));
        assert_eq!(view | All, view);
        assert_eq!(((2u8..5) | All).size(), 3);
        assert_eq!(((7u8..) | All).begin().read(), 7);
    }

    #[test]
    fn test_reverse_pipe() {
        let deque = VecDeque::from([1, 2, 3]);
        let rev = &deque | Reverse;
        assert_eq!(rev.size(), 3);
        assert_eq!(rev.into_iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

        let slice: &[char] = &['a', 'b'];
        assert_eq!((slice | Reverse).into_iter().collect::<String>(), "ba");

        let back = &deque | Reverse | Reverse;
        assert!(std::ptr::eq(back.base(), &deque));
    }

    #[test]
    fn test_pipe_through_counted() {
        let data = [4, 5, 6, 7];
        let view = counted(SlicePosition::new(&data, 1), 2) | Reverse;
        assert_eq!(view.into_iter().copied().collect::<Vec<_>>(), vec![6, 5]);
        assert_eq!((view | Reverse).start().index(), 1);
    }

    #[test]
    fn test_adapt_directly() {
        let rng = 0u32..3;
        assert_eq!(Reverse.adapt(rng.clone()).into_iter().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(All.adapt(rng.clone()), rng);
    }
}
