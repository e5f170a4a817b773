use serde::{Deserialize, Serialize};

/// Severity of a condition or a health alert.
///
/// Stored in SQLite as its lowercase string form. Unknown values read
/// from storage or the knowledge base fall back to `Medium` rather than
/// failing the whole row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Parse a stored string, defaulting to `Medium` for anything unknown.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "critical" => Self::Critical,
            _ => Self::Medium,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Medium
    }
}
