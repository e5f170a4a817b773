use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// A health alert visible to every user (outbreaks, advisories).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAlert {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub location: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

/// Payload for creating a new alert. `severity` defaults to medium.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAlert {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    pub location: Option<String>,
}
