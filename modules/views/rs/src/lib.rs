//! Lazily evaluated views over seqview ranges.
//!
//! A view borrows or wraps a range and recomputes its capabilities from it: a [`ReverseView`] over
//! a random-access view is random-access, a [`CountedView`] is always sized, and so on. Views
//! compose through the pipeline operator:
//!
//! ```
//! use seqview_views_rs::{Reverse, ViewInterface};
//!
//! let data = vec![1, 2, 3];
//! let reversed = &data | Reverse;
//! assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

pub use adaptor::{Adaptor, All, IntoView, Reverse};
pub use counted::{counted, CountedView};
pub use interface::ViewInterface;
pub use ref_view::{all, RefView};
pub use reverse::{reverse, ReversePosition, ReverseView, Reversible};

mod adaptor;
mod counted;
mod interface;
mod ref_view;
mod reverse;
