//! Behavioural switches that operators choose at startup.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid {setting} value '{value}', expected one of: {expected}")]
pub struct PolicyParseError {
    pub setting: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// What the field validator does with body keys outside the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    /// Drop them silently.
    #[default]
    Ignore,
    /// Fail the request with a 400 listing the accepted keys.
    Reject,
}

impl FromStr for UnknownKeyPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            _ => Err(PolicyParseError {
                setting: "UNKNOWN_KEY_POLICY",
                value: s.to_string(),
                expected: "ignore, reject",
            }),
        }
    }
}

impl fmt::Display for UnknownKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("ignore"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// How `DELETE /developers/{id}` treats a developer that owns an info row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeveloperDeletePolicy {
    /// Delete only the info row and keep the developer. This is the
    /// historical behaviour; a second delete then removes the developer.
    #[default]
    InfoFirst,
    /// Delete the developer row, then its info row.
    Cascade,
}

impl FromStr for DeveloperDeletePolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info-first" | "info_first" => Ok(Self::InfoFirst),
            "cascade" => Ok(Self::Cascade),
            _ => Err(PolicyParseError {
                setting: "DEVELOPER_DELETE_POLICY",
                value: s.to_string(),
                expected: "info-first, cascade",
            }),
        }
    }
}

impl fmt::Display for DeveloperDeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfoFirst => f.write_str("info-first"),
            Self::Cascade => f.write_str("cascade"),
        }
    }
}
