//! Ranges over std containers and counters.

pub use counter::Counter;
pub use deque::DequePosition;
pub use slice::SlicePosition;

mod counter;
mod deque;
mod slice;
