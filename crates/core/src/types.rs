//! Key, value and prior-state types
//!
//! Keys and values are opaque tokens. The engine never inspects their
//! contents; it only compares them for equality. Tokens produced by the
//! command reader never contain whitespace, but the engine itself does not
//! enforce that.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a stored variable
///
/// Keys are unique within a store.
///
/// # Examples
///
/// ```
/// use nestkv_core::Key;
///
/// let key = Key::new("a");
/// assert_eq!(key.as_str(), "a");
/// assert_eq!(key, Key::from("a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Create a key from any string-like token
    pub fn new(token: impl Into<String>) -> Self {
        Key(token.into())
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return the owned token
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::new(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key(s)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token stored under a key
///
/// Many keys may hold equal values; the frequency index counts them.
///
/// # Examples
///
/// ```
/// use nestkv_core::Value;
///
/// let v = Value::from("10");
/// assert_eq!(v.to_string(), "10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    /// Create a value from any string-like token
    pub fn new(token: impl Into<String>) -> Self {
        Value(token.into())
    }

    /// Borrow the value as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the owned token
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::new(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value(s)
    }
}

impl Borrow<str> for Value {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of a key before a transaction block first touched it
///
/// Undo frames store one `PriorState` per mutated key. `Absent` means the key
/// was unset when the block began, which is distinct from any stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorState {
    /// Key held no value
    Absent,
    /// Key held this value
    Present(Value),
}

impl PriorState {
    /// Whether the key held a value
    pub fn is_present(&self) -> bool {
        matches!(self, PriorState::Present(_))
    }

    /// The captured value, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            PriorState::Absent => None,
            PriorState::Present(v) => Some(v),
        }
    }
}

impl From<Option<Value>> for PriorState {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(v) => PriorState::Present(v),
            None => PriorState::Absent,
        }
    }
}

impl From<PriorState> for Option<Value> {
    fn from(state: PriorState) -> Self {
        match state {
            PriorState::Absent => None,
            PriorState::Present(v) => Some(v),
        }
    }
}
