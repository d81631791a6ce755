//! Small helpers around the core containers: record arrays held as
//! `serde_json::Value` and whitespace handling for strings.

pub mod records;
pub mod strings;
