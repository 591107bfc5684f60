use std::borrow::Cow;

use super::{number, Array, Object, Value, ValueKind};

macro_rules! from_number {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                // NOTE: Integers beyond 2^53 are rounded to the nearest `f64`
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

from_number! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
    f32 f64
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        Value::String(value.into_owned())
    }
}

impl From<char> for Value {
    #[inline]
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Array> for Value {
    #[inline]
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<&[Value]> for Value {
    #[inline]
    fn from(value: &[Value]) -> Self {
        Value::Array(value.to_vec())
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<ValueKind> for Value {
    #[inline]
    fn from(kind: ValueKind) -> Self {
        Value::with_kind(kind)
    }
}

impl From<()> for Value {
    #[inline]
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Value {
    /// Best-effort conversion to an integer.
    ///
    /// Numbers are truncated toward zero (saturating at the `i64` bounds, `NaN` becomes `0`),
    /// booleans become `0` or `1` and strings are parsed by their leading integer. Anything else,
    /// including a string without a leading integer, yields `0`.
    #[must_use]
    // NOTE: `as` saturates, which is the intended truncation
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_integer(&self) -> i64 {
        match self {
            Value::Number(number) => *number as i64,
            Value::Boolean(boolean) => i64::from(*boolean),
            Value::String(s) => number::parse_integer_prefix(s).unwrap_or_else(|| {
                log::trace!("{s:?} does not start with an integer, falling back to 0");
                0
            }),
            Value::Null | Value::Array(_) | Value::Object(_) => 0,
        }
    }

    /// Best-effort conversion to a floating-point number.
    ///
    /// Booleans become `0.0` or `1.0` and strings are parsed by their leading number. Anything
    /// else, including a string without a leading number, yields `0.0`.
    #[must_use]
    pub fn as_decimal(&self) -> f64 {
        match self {
            Value::Number(number) => *number,
            Value::Boolean(boolean) => f64::from(u8::from(*boolean)),
            Value::String(s) => number::parse_decimal_prefix(s).unwrap_or_else(|| {
                log::trace!("{s:?} does not start with a number, falling back to 0.0");
                0.0
            }),
            Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
        }
    }

    /// Truthiness: non-zero numbers, `true` and non-empty strings.
    #[must_use]
    pub fn as_boolean(&self) -> bool {
        match self {
            Value::Number(number) => *number != 0.0,
            Value::Boolean(boolean) => *boolean,
            Value::String(s) => !s.is_empty(),
            Value::Null | Value::Array(_) | Value::Object(_) => false,
        }
    }

    /// The string payload itself, or the compact JSON text of any other value.
    #[must_use]
    pub fn as_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => crate::serialize(other, false),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use test_case::test_case;

    macro_rules! assert_number_roundtrip {
        ($($value:expr),* $(,)?) => {
            $(
                let value = Value::from($value);
                assert_eq!(value.type_name(), "number");
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                let expected = $value as f64;
                assert_eq!(value.as_decimal(), expected);
            )*
        };
    }

    #[test]
    fn numeric_constructors() {
        assert_number_roundtrip!(
            i8::MIN,
            i16::MIN,
            i32::MIN,
            i64::MIN,
            isize::MAX,
            u8::MAX,
            u16::MAX,
            u32::MAX,
            u64::MAX,
            usize::MAX,
            1.5f32,
            -0.125f64,
        );
    }

    #[test]
    fn large_integers_lose_precision() {
        let value = Value::from(9_007_199_254_740_993_i64);
        assert_eq!(value.as_integer(), 9_007_199_254_740_992);
    }

    #[test]
    fn string_constructors() {
        let owned = String::from("owned");
        assert_eq!(Value::from(&owned), "owned");
        assert_eq!(Value::from(owned), "owned");
        assert_eq!(Value::from("borrowed"), "borrowed");
        assert_eq!(Value::from(Cow::Borrowed("cow")), "cow");
        assert_eq!(Value::from('c'), "c");
    }

    #[test]
    fn container_constructors() {
        let elements = [Value::from(1), Value::from(2)];
        let copied = Value::from(&elements[..]);
        assert_eq!(copied.len(), 2);
        assert_eq!(Value::from(elements.to_vec()), copied);
        assert_eq!(Value::from_iter(elements), copied);

        let mut object = Object::new();
        object.insert("a".to_string(), Value::from(1));
        assert_eq!(Value::from(object), Value::from_iter([("a", 1)]));
    }

    #[test]
    fn null_constructors() {
        assert!(Value::from(()).is_null());
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some(3)), 3);
        assert_eq!(Value::from(ValueKind::Boolean), false);
    }

    #[test_case(Value::from(3.99), 3)]
    #[test_case(Value::from(-3.99), -3)]
    #[test_case(Value::from(f64::NAN), 0; "nan")]
    #[test_case(Value::from(1e300), i64::MAX; "saturates")]
    #[test_case(Value::from(true), 1)]
    #[test_case(Value::from(false), 0)]
    #[test_case(Value::from("42"), 42)]
    #[test_case(Value::from(" -7 apples"), -7)]
    #[test_case(Value::from("not a number"), 0)]
    #[test_case(Value::from("99999999999999999999"), 0; "overflow")]
    #[test_case(Value::Null, 0)]
    #[test_case(Value::from(vec![Value::from(1)]), 0)]
    #[test_case(Value::from_iter([("a", 1)]), 0)]
    fn as_integer(value: Value, expected: i64) {
        assert_eq!(value.as_integer(), expected);
    }

    #[test_case(Value::from(2.5), 2.5)]
    #[test_case(Value::from(true), 1.0)]
    #[test_case(Value::from(false), 0.0)]
    #[test_case(Value::from("3.25"), 3.25)]
    #[test_case(Value::from("1e2x"), 100.0)]
    #[test_case(Value::from("0x1A"), 26.0; "hex string")]
    #[test_case(Value::from("not a number"), 0.0)]
    #[test_case(Value::from("1e999"), 0.0; "overflow")]
    #[test_case(Value::Null, 0.0)]
    #[test_case(Value::from(vec![Value::from(1)]), 0.0)]
    fn as_decimal(value: Value, expected: f64) {
        assert_eq!(value.as_decimal(), expected);
    }

    #[test_case(Value::from(0), false)]
    #[test_case(Value::from(-0.5), true)]
    #[test_case(Value::from(f64::NAN), true; "nan")]
    #[test_case(Value::from(true), true)]
    #[test_case(Value::from(false), false)]
    #[test_case(Value::from(""), false; "empty string")]
    #[test_case(Value::from("false"), true; "non-empty string")]
    #[test_case(Value::Null, false)]
    #[test_case(Value::from(vec![Value::from(1)]), false)]
    #[test_case(Value::from_iter([("a", 1)]), false)]
    fn as_boolean(value: Value, expected: bool) {
        assert_eq!(value.as_boolean(), expected);
    }

    #[test_case(Value::from("text"), "text")]
    #[test_case(Value::from("a\"b"), "a\"b"; "string is not escaped")]
    #[test_case(Value::Null, "null")]
    #[test_case(Value::from(7), "7")]
    #[test_case(Value::from(false), "false")]
    #[test_case(Value::from(vec![Value::from(1), Value::from("x")]), r#"[1,"x"]"#)]
    fn as_string(value: Value, expected: &str) {
        assert_eq!(value.as_string(), expected);
    }

    #[test]
    fn as_string_matches_serializer() {
        let value = Value::from_iter([("k", Value::from(vec![Value::Null, Value::from(true)]))]);
        assert_eq!(value.as_string(), crate::serialize(&value, false));
    }
}
