//! The caller's identity key: an Italian fiscal code.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static FISCAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Z]{6}[0-9LMNPQRSTUV]{2}[ABCDEHLMPRST][0-9LMNPQRSTUV]{2}[A-Z][0-9LMNPQRSTUV]{3}[A-Z]$",
    )
    .expect("invalid fiscal code regex")
});

/// Returned when a string is not a well-formed fiscal code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fiscal code: {0:?}")]
pub struct FiscalCodeError(pub String);

/// A syntactically valid fiscal code.
///
/// Serialises as a plain JSON string. Deserialising an invalid value fails,
/// so a `FiscalCode` obtained from the wire is always well-formed.
///
/// ```json
/// "XUZTCT88A51Y311X"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FiscalCode(String);

impl FiscalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FiscalCode {
    type Err = FiscalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if FISCAL_CODE_RE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(FiscalCodeError(s.to_string()))
        }
    }
}

impl TryFrom<String> for FiscalCode {
    type Error = FiscalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if FISCAL_CODE_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(FiscalCodeError(value))
        }
    }
}

impl From<FiscalCode> for String {
    fn from(value: FiscalCode) -> Self {
        value.0
    }
}

impl AsRef<str> for FiscalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FiscalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
