use std::ptr;

use seqview_core_rs::archetype::Bidirectional;
use seqview_core_rs::containers::SlicePosition;
use seqview_core_rs::{
    BidirectionalRange, CommonRange, ContiguousRange, RandomAccessPosition, RandomAccessRange, Range,
    SizedRange, View,
};
use seqview_testing_rs::{assert_range_eq, Checker};
use seqview_views_rs::{
    all, counted, reverse, CountedView, RefView, Reverse, ReverseView, ViewInterface,
};
use static_assertions::{assert_impl_all, assert_not_impl_any};

type ArrayView = RefView<'static, [i32; 10]>;

assert_impl_all!(ReverseView<ArrayView>: View, SizedRange, CommonRange, RandomAccessRange);
assert_not_impl_any!(ReverseView<ArrayView>: ContiguousRange);

type BidiCounted = CountedView<Bidirectional<SlicePosition<'static, i32>>>;

assert_impl_all!(ReverseView<BidiCounted>: View, SizedRange, CommonRange, BidirectionalRange);
assert_not_impl_any!(ReverseView<BidiCounted>: RandomAccessRange);

#[test]
fn test_reverse_array() {
    let rg = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let x = &rg | Reverse;

    assert_range_eq!(x, [&9, &8, &7, &6, &5, &4, &3, &2, &1, &0]);
    assert_eq!(x.size(), 10);
    assert_eq!(x.len(), 10);
    assert!(!x.is_empty());
    assert_eq!(x.front(), Some(&9));
    assert_eq!(x.back(), Some(&0));
}

#[test]
fn test_reverse_counted_bidirectional() {
    let rg = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let x = counted(Bidirectional(SlicePosition::new(&rg, 0)), 5) | Reverse;

    assert_range_eq!(x, [&4, &3, &2, &1, &0]);
    assert_eq!(x.size(), 5);
    assert_eq!(x.count(), 5);
}

#[test]
fn test_double_reverse_is_the_reference() {
    let rg = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let x: RefView<'_, [i32; 10]> = &rg | Reverse | Reverse;

    assert!(ptr::eq(x.base(), &rg));
    assert_eq!(x, all(&rg));
    assert_range_eq!(x, &rg);
}

#[test]
fn test_index_mirrors_base() {
    let data: Vec<u64> = (0..32).map(|x| x * x + 7).collect();
    let n = data.len();
    let rev = reverse(all(&data));

    let mut checker = Checker::new();
    for i in 0..n {
        checker.check(
            rev.at(i) == &data[n - 1 - i],
            format!("reverse(S)[{i}] == S[{}]", n - 1 - i),
        );
    }
    checker.check(rev.size() == n, "size is preserved");
    checker.finish().unwrap();
}

#[test]
fn test_reverse_of_empty() {
    let empty: Vec<u8> = Vec::new();
    let rev = &empty | Reverse;
    assert!(rev.is_empty());
    assert_eq!(rev.size(), 0);
    assert_range_eq!(rev, Vec::<&u8>::new());
}

#[test]
fn test_reverse_counter_range() {
    let rev = (0u32..10) | Reverse;
    assert_range_eq!(rev.clone(), (0u32..10).rev());
    assert_eq!(rev.at(3), 6);
    assert_eq!(rev.begin().distance_to(&rev.end()), 10);
}

#[test]
fn test_reverse_signed_span_wider_than_the_type() {
    let rev = (-100i8..100) | Reverse;
    assert_eq!(rev.size(), 200);
    assert_eq!(rev.len(), 200);
    assert_eq!(rev.at(0), 99);
    assert_eq!(rev.at(150), -51);
    assert_eq!(rev.at(199), -100);
    assert_range_eq!(rev, (-100i8..100).rev());
}

#[test]
fn test_reverse_keeps_base_view() {
    let data = [1, 2, 3];
    let inner = all(&data);
    let rev = ReverseView::new(inner);
    assert_eq!(*rev.base(), inner);
    assert_eq!(rev.into_base(), inner);
}
