use serde_json::Value;
use std::cmp::Ordering;

/// Strict equality between a wrapped value and an operand.
/// Undefined equals nothing; numbers compare by numeric value.
pub fn strict_eq(a: Option<&Value>, b: &Value) -> bool {
    match (a, b) {
        (None, _) => false,
        (Some(Value::Number(na)), Value::Number(nb)) => match (na.as_f64(), nb.as_f64()) {
            (Some(da), Some(db)) => da == db,
            _ => na == nb,
        },
        (Some(a), b) => a == b,
    }
}

/// Order `a` against `b`. `None` means incomparable, so every
/// ordering predicate is false.
pub fn cmp_values(a: Option<&Value>, b: &Value) -> Option<Ordering> {
    match (a?, b) {
        (Value::String(sa), Value::String(sb)) => Some(sa.cmp(sb)),
        (a, b) => as_number(a)?.partial_cmp(&as_number(b)?),
    }
}

/// Numeric reading used for mixed-type ordering.
fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                Some(0.0)
            } else {
                t.parse::<f64>().ok().filter(|f| !f.is_nan())
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_equal_across_representations() {
        assert!(strict_eq(Some(&json!(1)), &json!(1.0)));
        assert!(!strict_eq(Some(&json!(1)), &json!("1")));
        assert!(!strict_eq(None, &Value::Null));
        assert!(strict_eq(Some(&Value::Null), &Value::Null));
        assert!(strict_eq(Some(&json!({"a": [1]})), &json!({"a": [1]})));
    }

    #[test]
    fn strings_order_lexicographically() {
        assert_eq!(cmp_values(Some(&json!("abc")), &json!("abd")), Some(Ordering::Less));
        assert_eq!(cmp_values(Some(&json!("10")), &json!("9")), Some(Ordering::Less));
    }

    #[test]
    fn mixed_types_order_numerically() {
        assert_eq!(cmp_values(Some(&json!("10")), &json!(9)), Some(Ordering::Greater));
        assert_eq!(cmp_values(Some(&Value::Null), &json!(0)), Some(Ordering::Equal));
        assert_eq!(cmp_values(Some(&json!(true)), &json!(0.5)), Some(Ordering::Greater));
        assert_eq!(cmp_values(Some(&json!("")), &json!(0)), Some(Ordering::Equal));
    }

    #[test]
    fn incomparable_values() {
        assert_eq!(cmp_values(None, &json!(1)), None);
        assert_eq!(cmp_values(Some(&json!("abc")), &json!(1)), None);
        assert_eq!(cmp_values(Some(&json!([1])), &json!(1)), None);
        assert_eq!(cmp_values(Some(&json!(1)), &json!({})), None);
    }
}
