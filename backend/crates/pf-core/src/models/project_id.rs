//! Project identifiers.
//!
//! An id has the form `project:<unixMillis>-<suffix>` and is also the
//! record's storage key. The suffix comes from a non-cryptographic RNG and
//! no uniqueness check follows generation.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Key prefix shared by every stored project
pub const PROJECT_KEY_PREFIX: &str = "project:";

const SUFFIX_LENGTH: usize = 9;
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a fresh id stamped with `now`
    pub fn generate(now: DateTime<Utc>) -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LENGTH)
            .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();

        Self(format!(
            "{}{}-{}",
            PROJECT_KEY_PREFIX,
            now.timestamp_millis(),
            suffix
        ))
    }

    /// Accept any key inside the project namespace.
    ///
    /// The remainder is not checked against the generated shape; ids written
    /// by other tools (e.g. `project:999`) are still addressable.
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        match raw.strip_prefix(PROJECT_KEY_PREFIX) {
            Some(rest) if !rest.is_empty() => Ok(Self(raw.to_string())),
            _ => Err(CoreError::InvalidProjectId {
                value: raw.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
