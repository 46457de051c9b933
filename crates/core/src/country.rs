//! Country codes.

use serde::Serialize;

/// Country identifier as sent by clients (ISO alpha-2 style, e.g. `"SE"`).
///
/// No format validation happens here. Whether a code is known is decided by
/// the region table at pricing time, so unknown codes surface as pricing
/// errors naming the offending code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
