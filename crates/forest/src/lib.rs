//! Arena-backed ordered-multiset trees.
//!
//! [`CountingTree`] is an unbalanced binary search tree that keeps one node
//! per distinct value and counts repeated insertions. The [`util`] and
//! [`print`] modules hold the link-walking and rendering helpers it is built
//! on; they work over any arena node implementing [`types::Node`].

pub mod counting_tree;
pub mod print;
pub mod types;
pub mod util;

pub use counting_tree::{CountingTree, Distinct, Iter};
