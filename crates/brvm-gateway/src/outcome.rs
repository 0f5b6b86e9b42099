//! Tagged results returned by every gateway operation.
//!
//! The renderer only needs "a value or nothing", which
//! [`Outcome::into_option`] gives it. The tag additionally says whether the
//! value is real data or the example dataset, so a view can flag
//! "showing example data".

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Where a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Live,
    Fallback,
    Unavailable,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Fallback => write!(f, "fallback"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Read from a snapshot file or the remote API.
    Live(T),
    /// The fixed example dataset was substituted.
    Fallback(T),
    /// Nothing to show (remote failure, unreadable status file).
    Unavailable,
}

impl<T> Outcome<T> {
    pub fn origin(&self) -> Origin {
        match self {
            Self::Live(_) => Origin::Live,
            Self::Fallback(_) => Origin::Fallback,
            Self::Unavailable => Origin::Unavailable,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Live(v) | Self::Fallback(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    /// Drop the tag: the plain "value or null" view.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Live(v) | Self::Fallback(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Live(v) => Outcome::Live(f(v)),
            Self::Fallback(v) => Outcome::Fallback(f(v)),
            Self::Unavailable => Outcome::Unavailable,
        }
    }
}

/// `{"origin": "live", "data": ...}`; `data` is `null` when unavailable.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Outcome", 2)?;
        s.serialize_field("origin", &self.origin())?;
        s.serialize_field("data", &self.data())?;
        s.end()
    }
}
