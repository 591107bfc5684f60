#[cfg(feature = "serde_json")]
pub(crate) mod serde_json;
