//! Total, chainable access into untyped JSON response trees.
//!
//! Every step returns a [`Nav`], present or absent; walking past a missing
//! node simply stays absent. Only [`Nav::require`] and friends turn absence
//! into an error, and they do so with the name of the field that was needed.

use serde_json::Value;
use ytbridge_core::DecodeError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Nav<'a>(Option<&'a Value>);

impl<'a> Nav<'a> {
    pub const fn new(value: &'a Value) -> Self {
        Self(Some(value))
    }

    pub const fn absent() -> Self {
        Self(None)
    }

    /// Object member `key`.
    pub fn get(self, key: &str) -> Self {
        Self(self.0.and_then(|v| v.get(key)))
    }

    /// Array element `index`.
    pub fn at(self, index: usize) -> Self {
        Self(self.0.and_then(|v| v.get(index)))
    }

    pub fn first(self) -> Self {
        self.at(0)
    }

    /// Follow a sequence of object keys.
    pub fn path(self, keys: &[&str]) -> Self {
        keys.iter().fold(self, |nav, key| nav.get(key))
    }

    /// Elements of an array; empty when absent or not an array.
    pub fn array(self) -> impl Iterator<Item = Nav<'a>> {
        self.0
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(|v| Nav(Some(v)))
    }

    /// Member `key` of the first array element that has it.
    pub fn find(self, key: &str) -> Self {
        self.array()
            .map(|item| item.get(key))
            .find(|nav| nav.is_present())
            .unwrap_or_default()
    }

    pub const fn value(self) -> Option<&'a Value> {
        self.0
    }

    pub const fn is_present(self) -> bool {
        self.0.is_some()
    }

    pub fn str(self) -> Option<&'a str> {
        self.0.and_then(Value::as_str)
    }

    pub fn string(self) -> Option<String> {
        self.str().map(str::to_string)
    }

    /// Unsigned number, also accepting numeric strings (`"1234"`).
    pub fn u64(self) -> Option<u64> {
        match self.0? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Concatenated `runs[*].text` of a text node.
    pub fn runs_text(self) -> Option<String> {
        let runs = self.get("runs").value()?.as_array()?;
        Some(
            runs.iter()
                .filter_map(|run| run.get("text").and_then(Value::as_str))
                .collect(),
        )
    }

    pub fn require(self, field: &'static str) -> Result<&'a Value, DecodeError> {
        self.0.ok_or(DecodeError::MissingField(field))
    }

    pub fn require_str(self, field: &'static str) -> Result<&'a str, DecodeError> {
        self.require(field)?
            .as_str()
            .ok_or(DecodeError::UnexpectedShape {
                field,
                expected: "string",
            })
    }

    pub fn require_u64(self, field: &'static str) -> Result<u64, DecodeError> {
        self.require(field)?;
        self.u64().ok_or(DecodeError::UnexpectedShape {
            field,
            expected: "unsigned integer",
        })
    }
}
