//! Cart Data

use std::{fmt, str::FromStr};

use thiserror::Error;
use uuid::Uuid;

/// Longest session key a client may present.
pub const MAX_SESSION_KEY_LEN: usize = 64;

/// Opaque key correlating a browser session to its cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionKeyError {
    #[error("session key is empty")]
    Empty,

    #[error("session key is longer than {MAX_SESSION_KEY_LEN} characters")]
    TooLong,

    #[error("session key contains characters outside visible ASCII")]
    InvalidCharacters,
}

impl SessionKey {
    /// Issue a fresh, time-ordered key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    /// Validate a key received from a client.
    ///
    /// # Errors
    ///
    /// Returns an error when the key is empty, too long, or not visible ASCII.
    pub fn parse(key: impl Into<String>) -> Result<Self, SessionKeyError> {
        let key = key.into();

        if key.is_empty() {
            return Err(SessionKeyError::Empty);
        }

        if key.len() > MAX_SESSION_KEY_LEN {
            return Err(SessionKeyError::TooLong);
        }

        if !key.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(SessionKeyError::InvalidCharacters);
        }

        Ok(Self(key))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SessionKey {
    type Err = SessionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A change requested against one cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit, creating the line at the item's current price.
    Increase,
    /// Take one unit away; the line disappears at zero.
    Decrease,
    /// Drop the line entirely.
    Remove,
}
