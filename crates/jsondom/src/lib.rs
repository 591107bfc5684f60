//! # jsondom
//!
//! An owned, in-memory JSON value type.
//!
//! [`Value`] holds `null`, a number, a boolean, a string, an array or an object and exclusively
//! owns everything nested in it.
//!
//! ```
//! use jsondom::Value;
//!
//! let value = Value::from_iter([
//!     ("x", Value::from(1)),
//!     ("y", Value::from(vec![Value::from(2), Value::from(3)])),
//! ]);
//! assert_eq!(value.type_name(), "object");
//! assert_eq!(value.at("y").at(1).as_integer(), 3);
//! assert_eq!(value["y"].to_string(), "[2,3]");
//! ```
//!
//! Accessors come in two flavours. Lookups that assume a kind (`at`, `array`, `push`, ...) panic
//! when their precondition does not hold. Conversions (`as_integer`, `as_decimal`, ...) never
//! fail and fall back to a zero value instead.
//!
//! With the `serde_json` feature, values convert to and from `serde_json::Value` and JSON text
//! can be parsed with [`from_str`].
mod impls;
mod index;
mod ser;
mod value;

pub use index::Index;
#[cfg(feature = "serde_json")]
pub use impls::serde_json::from_str;
pub use ser::{serialize, serialize_into, write_to};
pub use value::{Array, Object, UnknownKind, Value, ValueKind};
