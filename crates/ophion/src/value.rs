//! Host-side values at the conversion seam.
//!
//! The general host/foreign marshalling layer lives outside this crate; the
//! bridge only ever consumes the result of converting a single foreign object
//! (a `__str__` result or a type's `__name__`). `HostValue` is the shape that
//! crosses the seam: the scalar cases an `Interpreter::to_host` implementation
//! can produce without pulling in the full conversion machinery.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A foreign value converted to a host-native representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostValue {
    /// The foreign interpreter's null/none singleton.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl HostValue {
    /// Unwraps a string value, rendering any other variant through `Display`.
    ///
    /// Translation expects `__str__` and `__name__` results to convert to
    /// `Str`, but a misbehaving foreign object can return anything; the
    /// fallback keeps the rendered message usable instead of failing.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for HostValue {
    /// Renders the value with the foreign interpreter's spellings for the
    /// singletons and booleans.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}
