use crate::functional::{Comparator, Projection, TransparentComparator};
use crate::position::{Position, Sentinel};
use crate::range::Range;

type Item<R> = <<R as Range>::Position as Position>::Item;

/// First position whose projected element matches `key`, or `None`.
///
/// The key may have a different type than the projected elements; the comparator must be
/// transparent so that no element or key conversion is implied.
pub fn find_with<R, K, C, F>(range: &R, key: &K, comparator: C, projection: F) -> Option<R::Position>
where
    R: Range + ?Sized,
    K: ?Sized,
    F: Projection<Item<R>>,
    C: Comparator<F::Output, K> + TransparentComparator,
{
    let end = range.end();
    let mut position = range.begin();
    while !end.reached(&position) {
        if comparator.compare(&projection.project(position.read()), key) {
            return Some(position);
        }
        position.step();
    }
    None
}

/// Whether two ranges have the same length and pairwise equivalent elements.
pub fn equal_with<A, B, C>(left: &A, right: &B, comparator: C) -> bool
where
    A: Range + ?Sized,
    B: Range + ?Sized,
    C: Comparator<Item<A>, Item<B>>,
{
    let (lend, rend) = (left.end(), right.end());
    let (mut lpos, mut rpos) = (left.begin(), right.begin());
    loop {
        match (lend.reached(&lpos), rend.reached(&rpos)) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        if !comparator.compare(&lpos.read(), &rpos.read()) {
            return false;
        }
        lpos.step();
        rpos.step();
    }
}
