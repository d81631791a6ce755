//! Namespaced key/value persistence.
//!
//! A [`Basket`] scopes keys under a mandatory name and stores JSON-encoded
//! values in any [`Storage`]. When the supplied storage is missing or
//! unavailable, the basket keeps working against an in-memory map.

pub mod basket;
pub mod storage;

pub use basket::{Backend, Basket, BasketError};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
