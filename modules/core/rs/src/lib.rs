//! Capability model of the seqview range framework: positions, sentinels, range predicates and
//! the customization points dispatching over them.

pub use access::{begin, data, empty, end, iter, read, size};
pub use iter::Iter;
pub use position::{
    BidirectionalPosition, ContiguousPosition, Position, RandomAccessPosition, Sentinel,
    Unreachable,
};
pub use range::{
    BidirectionalRange, CommonRange, ContiguousRange, RandomAccessRange, Range, SizedRange, View,
};
pub use swap::{exchange, swap, Swap};

pub mod access;
pub mod algorithm;
pub mod archetype;
pub mod containers;
pub mod functional;
mod iter;
pub mod num;
mod position;
mod range;
pub mod swap;
