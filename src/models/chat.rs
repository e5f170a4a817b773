use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One chat exchange, logged append-only. Never read back by the
/// rule engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    pub response: String,
    pub language: String,
    pub timestamp: NaiveDateTime,
}
