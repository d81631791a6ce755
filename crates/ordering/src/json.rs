use serde_json::Value;

use crate::less::LessThan;

/// Total ordering policy over JSON values.
///
/// Types rank `null < bool < number < string < array < object`, so `null` is
/// the strict minimum and sorts before numeric zero. Within a type: `false`
/// before `true`, numbers by `f64` value, strings by code point, arrays
/// lexicographically. All objects are equivalent to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonOrder;

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// `true` when `a` orders strictly before `b` under [`JsonOrder`].
pub fn json_less(a: &Value, b: &Value) -> bool {
    let (ra, rb) = (rank(a), rank(b));
    if ra != rb {
        return ra < rb;
    }
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => !*a && *b,
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a < b
        }
        (Value::String(a), Value::String(b)) => a < b,
        (Value::Array(a), Value::Array(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                if json_less(x, y) {
                    return true;
                }
                if json_less(y, x) {
                    return false;
                }
            }
            a.len() < b.len()
        }
        _ => false,
    }
}

impl LessThan<Value> for JsonOrder {
    #[inline]
    fn less(&self, a: &Value, b: &Value) -> bool {
        json_less(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_minimum() {
        assert!(JsonOrder.less(&json!(null), &json!(0)));
        assert!(JsonOrder.less(&json!(null), &json!(-100)));
        assert!(JsonOrder.less(&json!(null), &json!(false)));
        assert!(!JsonOrder.less(&json!(0), &json!(null)));
        assert!(JsonOrder.equivalent(&json!(null), &json!(null)));
    }

    #[test]
    fn same_type_matrix() {
        assert!(JsonOrder.less(&json!(false), &json!(true)));
        assert!(JsonOrder.less(&json!(1), &json!(1.5)));
        assert!(JsonOrder.equivalent(&json!(2), &json!(2.0)));
        assert!(JsonOrder.less(&json!("a"), &json!("b")));
        assert!(JsonOrder.less(&json!([1, 2]), &json!([1, 3])));
        assert!(JsonOrder.less(&json!([1]), &json!([1, 0])));
        assert!(JsonOrder.equivalent(&json!({"a": 1}), &json!({"b": 2})));
    }

    #[test]
    fn cross_type_matrix() {
        let ladder = [
            json!(null),
            json!(true),
            json!(-5),
            json!(""),
            json!([]),
            json!({}),
        ];
        for (i, a) in ladder.iter().enumerate() {
            for (j, b) in ladder.iter().enumerate() {
                assert_eq!(JsonOrder.less(a, b), i < j, "{a} vs {b}");
            }
        }
    }
}
