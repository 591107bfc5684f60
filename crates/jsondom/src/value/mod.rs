mod convert;
mod eq;
mod kind;
pub(crate) mod number;

use ahash::AHashMap;

pub use kind::{UnknownKind, ValueKind};

/// Ordered sequence of values owned by [`Value::Array`].
pub type Array = Vec<Value>;
/// String-keyed mapping owned by [`Value::Object`]. Iteration order is unspecified.
pub type Object = AHashMap<String, Value>;

/// An owned JSON value.
///
/// Every nested value is exclusively owned, so cloning is always deep and dropping always
/// releases the whole tree. Numbers are stored as `f64`: integers with a magnitude beyond
/// 2^53 lose precision.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Number(f64),
    Boolean(bool),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Create a `null` value.
    #[must_use]
    pub const fn new() -> Value {
        Value::Null
    }

    /// Create a value of the given kind holding that kind's default payload.
    ///
    /// The payloads are `0.0`, `false`, `""`, `[]` and `{}`.
    #[must_use]
    pub fn with_kind(kind: ValueKind) -> Value {
        match kind {
            ValueKind::Null => Value::Null,
            ValueKind::Number => Value::Number(0.0),
            ValueKind::Boolean => Value::Boolean(false),
            ValueKind::String => Value::String(String::new()),
            ValueKind::Array => Value::Array(Array::new()),
            ValueKind::Object => Value::Object(Object::new()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Label of the active kind, e.g. `"object"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Move the payload out, leaving `null` in its place.
    #[must_use = "use `*value = Value::Null` to discard the payload"]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Borrow the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the array payload, if any.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Borrow the object payload, if any.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The number payload.
    ///
    /// # Panics
    ///
    /// If the value is not a number.
    #[must_use]
    #[track_caller]
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(number) => *number,
            other => other.kind_mismatch(ValueKind::Number),
        }
    }

    /// The boolean payload.
    ///
    /// # Panics
    ///
    /// If the value is not a boolean.
    #[must_use]
    #[track_caller]
    pub fn boolean(&self) -> bool {
        match self {
            Value::Boolean(boolean) => *boolean,
            other => other.kind_mismatch(ValueKind::Boolean),
        }
    }

    /// The string payload.
    ///
    /// # Panics
    ///
    /// If the value is not a string.
    #[must_use]
    #[track_caller]
    pub fn string(&self) -> &String {
        match self {
            Value::String(s) => s,
            other => other.kind_mismatch(ValueKind::String),
        }
    }

    /// # Panics
    ///
    /// If the value is not a string.
    #[track_caller]
    pub fn string_mut(&mut self) -> &mut String {
        match self {
            Value::String(s) => s,
            other => other.kind_mismatch(ValueKind::String),
        }
    }

    /// The array payload.
    ///
    /// # Panics
    ///
    /// If the value is not an array.
    #[must_use]
    #[track_caller]
    pub fn array(&self) -> &Array {
        match self {
            Value::Array(array) => array,
            other => other.kind_mismatch(ValueKind::Array),
        }
    }

    /// # Panics
    ///
    /// If the value is not an array.
    #[track_caller]
    pub fn array_mut(&mut self) -> &mut Array {
        match self {
            Value::Array(array) => array,
            other => other.kind_mismatch(ValueKind::Array),
        }
    }

    /// The object payload.
    ///
    /// # Panics
    ///
    /// If the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn object(&self) -> &Object {
        match self {
            Value::Object(object) => object,
            other => other.kind_mismatch(ValueKind::Object),
        }
    }

    /// # Panics
    ///
    /// If the value is not an object.
    #[track_caller]
    pub fn object_mut(&mut self) -> &mut Object {
        match self {
            Value::Object(object) => object,
            other => other.kind_mismatch(ValueKind::Object),
        }
    }

    /// Append `value` to an array.
    ///
    /// # Panics
    ///
    /// If `self` is not an array.
    #[track_caller]
    pub fn push(&mut self, value: impl Into<Value>) {
        self.array_mut().push(value.into());
    }

    /// Insert `value` under `key` into an object, returning the replaced value.
    ///
    /// # Panics
    ///
    /// If `self` is not an object.
    #[track_caller]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.object_mut().insert(key.into(), value.into())
    }

    /// Whether the value holds nothing.
    ///
    /// Strings, arrays and objects are empty when their container is, `null` is always empty,
    /// numbers and booleans never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Number(_) | Value::Boolean(_) => false,
            Value::String(s) => s.is_empty(),
            Value::Array(array) => array.is_empty(),
            Value::Object(object) => object.is_empty(),
        }
    }

    /// Number of characters, elements or entries. Zero for scalars and `null`.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Null | Value::Number(_) | Value::Boolean(_) => 0,
            Value::String(s) => s.chars().count(),
            Value::Array(array) => array.len(),
            Value::Object(object) => object.len(),
        }
    }

    #[cold]
    #[track_caller]
    pub(crate) fn kind_mismatch(&self, expected: ValueKind) -> ! {
        panic!("expected JSON {expected}, found {}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_is_null() {
        let value = Value::default();
        assert_eq!(value.kind(), ValueKind::Null);
        assert!(value.is_null());
        assert!(value.is_empty());
        assert_eq!(value.len(), 0);
        assert!(!value.as_boolean());
        assert_eq!(Value::new(), value);
    }

    #[test_case(ValueKind::Null, "null")]
    #[test_case(ValueKind::Number, "0")]
    #[test_case(ValueKind::Boolean, "false")]
    #[test_case(ValueKind::String, r#""""#)]
    #[test_case(ValueKind::Array, "[]")]
    #[test_case(ValueKind::Object, "{}")]
    fn with_kind(kind: ValueKind, rendered: &str) {
        let value = Value::with_kind(kind);
        assert_eq!(value.kind(), kind);
        assert_eq!(value.type_name(), kind.name());
        assert_eq!(value.to_string(), rendered);
    }

    #[test_case(Value::Null, true, 0)]
    #[test_case(Value::Number(0.0), false, 0)]
    #[test_case(Value::Boolean(false), false, 0)]
    #[test_case(Value::from(""), true, 0; "empty string")]
    #[test_case(Value::from("héllo"), false, 5; "string counts characters")]
    #[test_case(Value::Array(vec![Value::Null, Value::Null]), false, 2)]
    #[test_case(Value::Object(Object::new()), true, 0)]
    fn emptiness_and_length(value: Value, empty: bool, length: usize) {
        assert_eq!(value.is_empty(), empty);
        assert_eq!(value.len(), length);
    }

    #[test]
    fn take_leaves_null() {
        let mut value = Value::from(vec![Value::from(1), Value::from("two")]);
        let expected = value.clone();
        let moved = value.take();
        assert_eq!(moved, expected);
        assert!(value.is_null());
        assert!(value.is_empty());
    }

    #[test]
    fn clone_is_deep() {
        let original = Value::from_iter([
            ("list", Value::from(vec![Value::from(1), Value::from(2)])),
            ("name", Value::from("x")),
        ]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.at_mut("list").push(3);
        *copy.at_mut("name").string_mut() = String::from("y");

        assert_ne!(copy, original);
        assert_eq!(original.at("list").len(), 2);
        assert_eq!(original.at("name"), "x");
    }

    #[test]
    fn assignment_replaces_payload() {
        let mut value = Value::from(vec![Value::from("a"); 128]);
        assert_eq!(value.len(), 128);
        value = Value::from(true);
        assert_eq!(value, true);

        let mut value = Value::from_iter([("k", 1)]);
        value = value.clone();
        assert_eq!(value, Value::from_iter([("k", 1)]));

        let mut target = Value::Null;
        target.clone_from(&value);
        assert_eq!(target, value);
    }

    #[test]
    fn push_and_insert() {
        let mut array = Value::with_kind(ValueKind::Array);
        array.push(1);
        array.push("two");
        assert_eq!(array.len(), 2);

        let mut object = Value::with_kind(ValueKind::Object);
        assert_eq!(object.insert("a", 1), None);
        assert_eq!(object.insert("a", 2), Some(Value::from(1)));
        assert_eq!(object.at("a").as_integer(), 2);
    }

    #[test]
    fn payload_accessors() {
        assert_eq!(Value::from(2.5).number(), 2.5);
        assert!(Value::from(true).boolean());
        assert_eq!(Value::from("s").string(), "s");
        assert_eq!(Value::from(vec![Value::Null]).array().len(), 1);
        assert!(Value::with_kind(ValueKind::Object).object().is_empty());
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from(1).as_str(), None);
        assert!(Value::Null.as_array().is_none());
        assert!(Value::Null.as_object().is_none());
    }

    #[test]
    #[should_panic(expected = "expected JSON number, found string")]
    fn number_of_string() {
        let _ = Value::from("1").number();
    }

    #[test]
    #[should_panic(expected = "expected JSON array, found null")]
    fn push_to_null() {
        Value::Null.push(1);
    }

    #[test]
    #[should_panic(expected = "expected JSON object, found array")]
    fn insert_into_array() {
        Value::with_kind(ValueKind::Array).insert("key", 1);
    }
}
