use std::fmt;
use std::str::FromStr;

use ordkit_ordering::{JsonOrder, LessThan, NaturalOrder};
use serde_json::Value;
use thiserror::Error;

use crate::{insertion_sort_by, merge_sort_by, quick_sort_by, selection_sort_by};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("unknown sort algorithm `{0}`")]
    UnknownAlgorithm(String),
}

/// One of the four sorting strategies, for callers that pick at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Merge,
    Selection,
    Insertion,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Merge,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge | Algorithm::Insertion)
    }

    pub fn sort<T: Clone + PartialOrd>(self, items: &[T]) -> Vec<T> {
        self.sort_by(items, NaturalOrder)
    }

    pub fn sort_by<T: Clone, L: LessThan<T>>(self, items: &[T], less: L) -> Vec<T> {
        match self {
            Algorithm::Merge => merge_sort_by(items, less),
            Algorithm::Selection => selection_sort_by(items, less),
            Algorithm::Insertion => insertion_sort_by(items, less),
            Algorithm::Quick => quick_sort_by(items, less),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix("sort").unwrap_or(&key);
        let key = key.trim_end_matches(['_', '-', ' ']);
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

/// Sorts a dynamic JSON array with [`JsonOrder`]. Anything other than an
/// array yields an empty vector.
pub fn sort_json(items: &Value, algorithm: Algorithm) -> Vec<Value> {
    match items {
        Value::Array(items) => algorithm.sort_by(items, JsonOrder),
        _ => Vec::new(),
    }
}
