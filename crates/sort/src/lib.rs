//! Comparison sorts parameterized by a strict less-than predicate.
//!
//! Every function takes the caller's slice by reference and returns a newly
//! allocated, ascending `Vec`; the input is never reordered. The plain
//! variants use the natural order, the `_by` variants accept any
//! [`LessThan`](ordkit_ordering::LessThan), including a
//! [`Predicate`](ordkit_ordering::Predicate) built from an `Option`.
//!
//! | algorithm | stable | average    |
//! |-----------|--------|------------|
//! | merge     | yes    | O(n log n) |
//! | selection | no     | O(n²)      |
//! | insertion | yes    | O(n²)      |
//! | quick     | no     | O(n log n) |

pub mod algorithm;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use algorithm::{sort_json, Algorithm, SortError};
pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{merge_sort, merge_sort_by};
pub use quick::{quick_sort, quick_sort_by};
pub use selection::{selection_sort, selection_sort_by};
