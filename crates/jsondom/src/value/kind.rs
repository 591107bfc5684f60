use core::fmt;
use std::str::FromStr;

/// The active variant of a [`Value`](crate::Value).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Number,
    Boolean,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// All kinds, in declaration order.
    pub const ALL: [ValueKind; 6] = [
        ValueKind::Null,
        ValueKind::Number,
        ValueKind::Boolean,
        ValueKind::String,
        ValueKind::Array,
        ValueKind::Object,
    ];

    /// Fixed, lowercase label of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Returned when a string does not name any [`ValueKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(String);

impl UnknownKind {
    /// The rejected input.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid JSON value kind", self.0)
    }
}

impl std::error::Error for UnknownKind {}
