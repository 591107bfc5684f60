use super::{Array, Object, Value};

// NOTE: Numbers are compared exactly, so `NaN` is not equal to itself and `Value` can't be `Eq`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::Boolean(l), Value::Boolean(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Array(l), Value::Array(r)) => eq_arrays(l, r),
            (Value::Object(l), Value::Object(r)) => eq_objects(l, r),
            _ => false,
        }
    }
}

#[inline]
fn eq_arrays(left: &Array, right: &Array) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| l == r)
}

/// Key-wise comparison that does not depend on the iteration order of either map.
#[inline]
fn eq_objects(left: &Object, right: &Object) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, lv)| right.get(key).is_some_and(|rv| lv == rv))
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Boolean(boolean) if boolean == other)
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<bool> for &Value {
    fn eq(&self, other: &bool) -> bool {
        **self == *other
    }
}

impl PartialEq<bool> for &mut Value {
    fn eq(&self, other: &bool) -> bool {
        **self == *other
    }
}

macro_rules! partial_eq_number {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for Value {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::float_cmp,
                    clippy::unnecessary_cast
                )]
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Value::Number(number) if *number == *other as f64)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other == self
                }
            }

            impl PartialEq<$ty> for &Value {
                fn eq(&self, other: &$ty) -> bool {
                    **self == *other
                }
            }

            impl PartialEq<$ty> for &mut Value {
                fn eq(&self, other: &$ty) -> bool {
                    **self == *other
                }
            }
        )*
    };
}

partial_eq_number! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
    f32 f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample() -> Value {
        Value::from_iter([
            ("x", Value::from(1)),
            ("y", Value::from(vec![Value::from(2), Value::from(3)])),
            ("z", Value::from_iter([("nested", Value::Null)])),
        ])
    }

    #[test_case(Value::Null)]
    #[test_case(Value::from(0))]
    #[test_case(Value::from(true))]
    #[test_case(Value::from("text"))]
    #[test_case(Value::from(vec![Value::Null, Value::from(1.5)]))]
    #[test_case(sample())]
    fn reflexive(value: Value) {
        assert_eq!(value, value.clone());
        #[allow(clippy::eq_op)]
        let equal = value == value;
        assert!(equal);
    }

    #[test_case(Value::from(0), Value::from(false); "number vs boolean")]
    #[test_case(Value::Null, Value::from(false); "null vs boolean")]
    #[test_case(Value::Null, Value::from(""); "null vs empty string")]
    #[test_case(Value::from("1"), Value::from(1); "string vs number")]
    #[test_case(Value::from(Array::new()), Value::from(Object::new()); "empty array vs empty object")]
    #[test_case(Value::from(0.1 + 0.2), Value::from(0.3); "no epsilon")]
    #[test_case(Value::from(f64::NAN), Value::from(f64::NAN); "nan")]
    #[test_case(
        Value::from(vec![Value::from(1), Value::from(2)]),
        Value::from(vec![Value::from(2), Value::from(1)]);
        "array order matters"
    )]
    #[test_case(
        Value::from(vec![Value::from(1)]),
        Value::from(vec![Value::from(1), Value::from(1)]);
        "array length"
    )]
    #[test_case(Value::from_iter([("a", 1)]), Value::from_iter([("b", 1)]); "object keys")]
    #[test_case(Value::from_iter([("a", 1)]), Value::from_iter([("a", 2)]); "object values")]
    #[test_case(
        Value::from_iter([("a", 1)]),
        Value::from_iter([("a", 1), ("b", 2)]);
        "object size"
    )]
    fn not_equal(left: Value, right: Value) {
        assert_ne!(left, right);
        assert_ne!(right, left);
    }

    #[test]
    fn object_order_independent() {
        let left = Value::from_iter([("a", 1), ("b", 2)]);
        let right = Value::from_iter([("b", 2), ("a", 1)]);
        assert_eq!(left, right);
        assert_eq!(right, left);
    }

    #[test]
    fn object_size_check_is_symmetric() {
        // Every key of the smaller side exists in the larger one.
        let small = Value::from_iter([("a", 1)]);
        let large = Value::from_iter([("a", 1), ("b", 1)]);
        assert_ne!(small, large);
        assert_ne!(large, small);
    }

    #[test]
    fn primitives() {
        assert_eq!(Value::from("s"), "s");
        assert_eq!("s", Value::from("s"));
        assert_eq!(Value::from("s"), String::from("s"));
        assert_eq!(Value::from(true), true);
        assert_eq!(false, Value::from(false));
        assert_eq!(Value::from(3), 3);
        assert_eq!(Value::from(3), 3.0);
        assert_eq!(3u8, Value::from(3));
        assert_ne!(Value::from(1), true);
        assert_ne!(Value::from("1"), 1);
        assert_ne!(Value::Null, 0);
    }

    #[test]
    fn primitives_through_references() {
        let mut value = Value::from_iter([("n", Value::from(7)), ("b", Value::from(true))]);
        assert_eq!(value.at("n"), 7);
        assert_eq!(value.at("n"), 7.0);
        assert_eq!(value.at("b"), true);
        assert_ne!(value.at("b"), 1);
        assert_eq!(value.at_mut("n"), 7u64);
        assert_eq!(value.at_mut("b"), true);
        assert!(value.get("n").is_some_and(|n| n == 7));
    }
}
