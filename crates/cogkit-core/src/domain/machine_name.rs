//! Machine names: the normalised identifier a theme is known by.
//!
//! A machine name doubles as the theme's directory name and as the text that
//! replaces the starter kit placeholder, so it must be a valid PHP function
//! prefix: `^[a-z][a-z0-9_]*$`.
//!
//! # Derivation
//!
//! ```text
//! "123 Bad!!Name"
//!   1. lowercase, ' ' -> '_'     "123_bad!!name"
//!   2. drop [^a-z0-9_]           "123_badname"
//!   3. drop leading [^a-z]+      "badname"
//! ```
//!
//! The steps always run in this order. Reordering them changes results for
//! inputs such as `"_1 a"`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A validated machine name.
///
/// Invariant: non-empty and matches `^[a-z][a-z0-9_]*$`. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MachineName(String);

impl MachineName {
    /// Apply the three derivation steps without validating the result.
    ///
    /// The output may be empty (e.g. for `"111"`); [`MachineName::derive`]
    /// rejects that case.
    pub fn normalize(input: &str) -> String {
        let lowered = input.to_ascii_lowercase().replace(' ', "_");

        let cleaned: String = lowered
            .chars()
            .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
            .collect();

        cleaned
            .trim_start_matches(|c: char| !c.is_ascii_lowercase())
            .to_string()
    }

    /// Derive a machine name from free-form text.
    ///
    /// # Errors
    /// `DomainError::EmptyMachineName` if nothing usable survives
    /// normalisation.
    pub fn derive(input: &str) -> Result<Self, DomainError> {
        let normalized = Self::normalize(input);
        if normalized.is_empty() {
            return Err(DomainError::EmptyMachineName {
                input: input.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() => {
                chars.all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
            }
            _ => false,
        }
    }
}

impl fmt::Display for MachineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MachineName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strict parse: the input must already be a valid machine name.
impl FromStr for MachineName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::InvalidMachineName {
                value: s.to_string(),
                reason: "expected [a-z][a-z0-9_]*".into(),
            })
        }
    }
}
