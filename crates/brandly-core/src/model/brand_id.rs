// ── Brand identity ──
//
// `BrandId` is what navigation hands around. `IdPolicy` decides how an id
// becomes a URL path segment, and rejects ids that cannot.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::FetchError;

/// Opaque brand identifier as carried by list records and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandId(String);

impl BrandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BrandId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BrandId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for BrandId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── IdPolicy ────────────────────────────────────────────────────────

/// How a [`BrandId`] is turned into the `{id}` segment of `/brands/{id}`.
///
/// Invalid ids fail with [`FetchError::Validation`] before any request
/// is sent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdPolicy {
    /// Use the id verbatim. Must be non-empty, without whitespace or `/`.
    #[default]
    Opaque,
    /// The id must be an unsigned decimal integer; it is sent in canonical
    /// form (`"007"` becomes `"7"`).
    Numeric,
}

impl IdPolicy {
    /// Resolve `id` into the path segment sent to the server.
    pub fn path_segment(self, id: &BrandId) -> Result<String, FetchError> {
        let raw = id.as_str();
        if raw.is_empty() {
            return Err(invalid(raw, "id is empty"));
        }

        match self {
            Self::Opaque => {
                if raw.chars().any(char::is_whitespace) {
                    return Err(invalid(raw, "id contains whitespace"));
                }
                if raw.contains('/') {
                    return Err(invalid(raw, "id contains '/'"));
                }
                // URL path normalization would drop these segments.
                if raw == "." || raw == ".." {
                    return Err(invalid(raw, "id is a dot segment"));
                }
                Ok(raw.to_owned())
            }
            Self::Numeric => {
                if !raw.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid(raw, "expected an unsigned integer"));
                }
                raw.parse::<u64>()
                    .map(|n| n.to_string())
                    .map_err(|e| invalid(raw, &e.to_string()))
            }
        }
    }
}

fn invalid(id: &str, reason: &str) -> FetchError {
    FetchError::Validation {
        id: id.to_owned(),
        reason: reason.to_owned(),
    }
}
