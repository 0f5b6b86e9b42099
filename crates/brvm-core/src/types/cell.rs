//! The `Cell` value: a field that is a number when its text looks like one.
//!
//! Snapshot CSV files carry every value as text. A field whose trimmed text
//! is exactly a finite number becomes [`Cell::Number`]; anything else is kept
//! verbatim as [`Cell::Text`]. A field absent from a short row is
//! [`Cell::Missing`]. On the wire a cell is a plain JSON number, string, or
//! `null`, so the same type reads remote API payloads unchanged.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl Cell {
    /// Coerce already-trimmed text.
    ///
    /// The empty string stays text; it is never read as `0`.
    pub fn coerce(text: &str) -> Self {
        if text.is_empty() {
            return Self::Text(String::new());
        }
        match fast_float2::parse::<f64, _>(text) {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(text.to_string()),
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Integral view of a numeric cell (truncates toward zero).
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Textual rendering, used for fields that are names rather than
    /// quantities. `Missing` renders as the empty string.
    pub fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
            Self::Missing => String::new(),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}

/// Serde helper for text fields that may arrive as numbers (a CSV symbol
/// such as `1234` is coerced before it reaches the record).
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Cell::deserialize(deserializer).map(Cell::into_text)
}
