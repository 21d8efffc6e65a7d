//! Record identifier newtype with a smart constructor.
//!
//! Identifiers validate non-empty strings at construction time.
//! The raw constructor is never exported - use the smart constructor only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user record within a dataset snapshot.
///
/// Uniqueness is assumed, not enforced: if the upstream dataset ever
/// carries duplicate ids, by-id operations act on the first match.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Smart constructor: validates a non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidUserId> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidUserId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = InvalidUserId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Rejection reason from the [`UserId`] smart constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidUserId {
    /// The id string was empty.
    #[error("User ID cannot be empty")]
    Empty,
}

// ===== Tests =====
