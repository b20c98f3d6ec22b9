use std::fmt::Debug;

/// T values are primitive integers usable as counter positions
pub trait PrimInt: ::num::PrimInt + Debug + Default {}

impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// `value` moved by `delta`, computed in `i128` so that only the result has to fit in `Idx`.
///
/// # Panics
///
/// Panics if `value` or the moved value don't fit into `i128`, or the moved value doesn't fit
/// into `Idx`.
#[inline]
pub(crate) fn offset<Idx: PrimInt>(value: Idx, delta: i128) -> Idx {
    let moved = match value.to_i128().and_then(|v| v.checked_add(delta)) {
        Some(moved) => moved,
        None => panic!("Moving {value:?} by {delta} overflows i128"),
    };
    match <Idx as ::num::NumCast>::from(moved) {
        Some(moved) => moved,
        None => panic!("Moving {value:?} by {delta} leaves the range of the counter type"),
    }
}

/// Signed distance between two integers, `to - from`, computed in `i128`.
///
/// # Panics
///
/// Panics if either end doesn't fit into `i128` or the distance doesn't fit into `isize`.
#[inline]
pub(crate) fn distance<Idx: PrimInt>(from: Idx, to: Idx) -> isize {
    let span = match (from.to_i128(), to.to_i128()) {
        (Some(start), Some(end)) => end.checked_sub(start),
        _ => None,
    };
    let span = match span {
        Some(span) => span,
        None => panic!("Distance from {from:?} to {to:?} can't fit in i128"),
    };
    match isize::try_from(span) {
        Ok(span) => span,
        Err(_) => panic!("Distance {span} can't fit in isize"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(offset(0u8, 255), 255u8);
        assert_eq!(offset(3i64, -5), -2i64);
        // The step itself exceeds i8, the result does not.
        assert_eq!(offset(-100i8, 150), 50i8);
        assert_eq!(offset(100i8, -200), -100i8);
    }

    #[test]
    #[should_panic(expected = "leaves the range")]
    fn test_offset_overflow() {
        offset(200u8, 56);
    }

    #[test]
    #[should_panic(expected = "leaves the range")]
    fn test_offset_underflow() {
        offset(0u32, -1);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(3u32, 10u32), 7);
        assert_eq!(distance(10u32, 3u32), -7);
        assert_eq!(distance(-5i32, 5i32), 10);
        assert_eq!(distance(0usize, 0usize), 0);
        assert_eq!(distance(-100i8, 100i8), 200);
        assert_eq!(distance(i8::MAX, i8::MIN), -255);
        assert_eq!(distance(0u64, u64::from(u32::MAX)), u32::MAX as isize);
    }
}
