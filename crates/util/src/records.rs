//! Record-array helpers.
//!
//! Inputs are dynamic JSON values. Anything that is not an array is treated
//! as an empty record list rather than an error.

use serde_json::{Map, Value};

/// Elements of `items`, or an empty slice when `items` is not an array.
pub fn records(items: &Value) -> &[Value] {
    match items {
        Value::Array(items) => items,
        _ => &[],
    }
}

/// Script-style truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn field_names(fields: &Value) -> Vec<&str> {
    match fields {
        Value::String(name) => vec![name.as_str()],
        Value::Array(names) => names.iter().filter_map(Value::as_str).collect(),
        Value::Object(map) => map.keys().map(String::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Keeps the records where at least one of `fields` is truthy.
///
/// `fields` may be a single name, an array of names, or an object whose keys
/// are the names.
pub fn filter_having(items: &Value, fields: &Value) -> Vec<Value> {
    let names = field_names(fields);
    records(items)
        .iter()
        .filter(|item| names.iter().any(|name| item.get(*name).is_some_and(is_truthy)))
        .cloned()
        .collect()
}

/// Projects `field` out of every record; `None` where it is absent.
pub fn plain(items: &Value, field: &str) -> Vec<Option<Value>> {
    records(items)
        .iter()
        .map(|item| item.get(field).cloned())
        .collect()
}

/// Drops absent and `null` entries.
pub fn compact<I>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = Option<Value>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_null())
        .collect()
}

/// Sums the numeric `field` across records.
///
/// A record missing the field (or holding a non-number) poisons the sum to
/// `NaN`. No field, or no records, sums to 0.
pub fn sum_by(items: &Value, field: Option<&str>) -> f64 {
    let Some(field) = field else {
        return 0.0;
    };
    records(items)
        .iter()
        .map(|item| item.get(field).and_then(Value::as_f64).unwrap_or(f64::NAN))
        .sum()
}

/// Copies every property of `props` onto each object record, in place.
pub fn add_property<'a>(items: &'a mut Value, props: Option<&Map<String, Value>>) -> &'a mut Value {
    let Some(props) = props else {
        return items;
    };
    if let Value::Array(list) = items {
        for item in list.iter_mut() {
            if let Value::Object(record) = item {
                for (k, v) in props {
                    record.insert(k.clone(), v.clone());
                }
            }
        }
    }
    items
}
