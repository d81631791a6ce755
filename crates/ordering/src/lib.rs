//! Ordering predicates for ordkit.
//!
//! Every ordered structure and sort in the workspace is parameterized by a
//! strict "less-than" predicate instead of a three-way comparator. Two values
//! are *equivalent* when neither is less than the other.
//!
//! ```
//! use ordkit_ordering::{LessThan, NaturalOrder, Predicate};
//!
//! assert!(NaturalOrder.less(&1, &2));
//!
//! let reversed = |a: &i32, b: &i32| a > b;
//! assert!(reversed.less(&2, &1));
//!
//! // An absent predicate falls back to the natural order.
//! let fallback: Predicate<fn(&i32, &i32) -> bool> = None.into();
//! assert!(fallback.less(&1, &2));
//! ```

pub mod json;
pub mod less;

pub use json::JsonOrder;
pub use less::{LessThan, NaturalOrder, Predicate};
