//! Value exchange: `swap` and `exchange`.

/// Types whose values can be exchanged in place.
///
/// The provided [`Swap::swap_with`] is the generic three-move swap; a type opts in with an empty
/// impl, or overrides the method when it knows a better way. Arrays swap element-wise.
pub trait Swap: Sized {
    /// Whether [`Swap::swap_with`] is guaranteed not to panic.
    const NO_PANIC: bool = true;

    #[inline(always)]
    fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

macro_rules! impl_swap {
    ($($ty:ty),* $(,)?) => {
        $(impl Swap for $ty {})*
    };
}

impl_swap!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, (),
    String,
);

impl<T> Swap for Vec<T> {}

impl<T: ?Sized> Swap for Box<T> {}

impl<T> Swap for Option<T> {}

impl<T: Swap, const N: usize> Swap for [T; N] {
    const NO_PANIC: bool = T::NO_PANIC;

    fn swap_with(&mut self, other: &mut Self) {
        for (left, right) in self.iter_mut().zip(other.iter_mut()) {
            left.swap_with(right);
        }
    }
}

/// Exchange the values of `left` and `right`.
#[inline(always)]
pub fn swap<T: Swap>(left: &mut T, right: &mut T) {
    left.swap_with(right);
}

/// Replace `target` with `value` and return the previous value of `target`.
///
/// Moving never panics in Rust; the only possible panic source is the `Into` conversion.
#[inline(always)]
pub fn exchange<T, U: Into<T>>(target: &mut T, value: U) -> T {
    std::mem::replace(target, value.into())
}

/// Swap the pointees of two raw pointers.
///
/// Identical pointers are left untouched.
///
/// # Safety
///
/// Both pointers must be non-null (checked with `debug_assert!`), properly aligned, valid for
/// reads and writes, and not aliased by any live reference for the duration of the call.
#[cfg(feature = "swappable-pointers")]
pub unsafe fn swap_pointees<T: Swap>(left: *mut T, right: *mut T) {
    debug_assert!(!left.is_null());
    debug_assert!(!right.is_null());
    if std::ptr::eq(left, right) {
        return;
    }
    unsafe { (*left).swap_with(&mut *right) }
}

/// Swap a value with the pointee of a raw pointer.
///
/// # Safety
///
/// `right` must be non-null (checked with `debug_assert!`), properly aligned, valid for reads and
/// writes, and must not point to `left`.
#[cfg(feature = "swappable-pointers")]
pub unsafe fn swap_with_pointee<T: Swap>(left: &mut T, right: *mut T) {
    debug_assert!(!right.is_null());
    unsafe { left.swap_with(&mut *right) }
}

/// Swap the pointee of a raw pointer with a value.
///
/// # Safety
///
/// Same as [`swap_with_pointee`], with the roles of the operands exchanged.
#[cfg(feature = "swappable-pointers")]
pub unsafe fn swap_pointee_with<T: Swap>(left: *mut T, right: &mut T) {
    debug_assert!(!left.is_null());
    unsafe { (*left).swap_with(right) }
}
