use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::ChatRecord;

/// Append one exchange to the chat log.
pub fn insert_chat_record(
    conn: &Connection,
    user_id: &str,
    message: &str,
    response: &str,
    language: &str,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO chat_history (user_id, message, response, language)
         VALUES (?1, ?2, ?3, ?4)",
        params![user_id, message, response, language],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Recent exchanges for a user, newest first.
pub fn recent_history(
    conn: &Connection,
    user_id: &str,
    limit: usize,
) -> Result<Vec<ChatRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, message, response, language, timestamp
         FROM chat_history
         WHERE user_id = ?1
         ORDER BY timestamp DESC, id DESC
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![user_id, limit as i64], |row| {
        Ok(ChatRecord {
            id: row.get(0)?,
            user_id: row.get(1)?,
            message: row.get(2)?,
            response: row.get(3)?,
            language: row.get(4)?,
            timestamp: row.get::<_, NaiveDateTime>(5)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
