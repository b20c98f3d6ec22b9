//! Projections and comparators.

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// A mapping applied to elements before they are compared.
pub trait Projection<T> {
    type Output;

    fn project(&self, value: T) -> Self::Output;
}

/// Any function of one argument is a projection.
impl<T, Out, F> Projection<T> for F
where
    F: Fn(T) -> Out,
{
    type Output = Out;

    #[inline(always)]
    fn project(&self, value: T) -> Out {
        self(value)
    }
}

/// The projection returning its argument unchanged; the default projection of algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl Identity {
    #[inline(always)]
    pub fn call<T>(&self, value: T) -> T {
        value
    }
}

impl<T> Projection<T> for Identity {
    type Output = T;

    #[inline(always)]
    fn project(&self, value: T) -> T {
        value
    }
}

/// A binary equivalence test between a left and a right operand.
pub trait Comparator<L: ?Sized, R: ?Sized = L> {
    fn compare(&self, left: &L, right: &R) -> bool;
}

/// Any function of two references returning `bool` is a comparator.
impl<L: ?Sized, R: ?Sized, F> Comparator<L, R> for F
where
    F: Fn(&L, &R) -> bool,
{
    #[inline(always)]
    fn compare(&self, left: &L, right: &R) -> bool {
        self(left, right)
    }
}

/// Comparators that accept operands of different types and compare them without building a
/// value of one type from the other. Heterogeneous lookups require this marker.
pub trait TransparentComparator {}

/// Marker selecting the transparent flavour of [`EqualTo`].
#[derive(Debug, Clone, Copy)]
pub enum Transparent {}

/// Equality comparator.
///
/// `EqualTo<T>` compares two values of type `T`. The default, `EqualTo<Transparent>`, compares
/// any `L` against any `R` for which `L: PartialEq<R>`, using that impl directly.
pub struct EqualTo<T: ?Sized = Transparent> {
    _phantom: PhantomData<fn(&T, &T) -> bool>,
}

impl<T: ?Sized> EqualTo<T> {
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl EqualTo<Transparent> {
    pub const fn transparent() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Default for EqualTo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for EqualTo<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for EqualTo<T> {}

impl<T: ?Sized> Debug for EqualTo<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EqualTo<{}>", std::any::type_name::<T>())
    }
}

impl<T: PartialEq + ?Sized> Comparator<T> for EqualTo<T> {
    #[inline(always)]
    fn compare(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

impl<L: PartialEq<R> + ?Sized, R: ?Sized> Comparator<L, R> for EqualTo<Transparent> {
    #[inline(always)]
    fn compare(&self, left: &L, right: &R) -> bool {
        left == right
    }
}

impl TransparentComparator for EqualTo<Transparent> {}
