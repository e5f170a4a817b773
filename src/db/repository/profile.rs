use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{ProfileUpdate, UserProfile};

pub fn get_profile(
    conn: &Connection,
    user_id: &str,
) -> Result<Option<UserProfile>, DatabaseError> {
    let profile = conn
        .query_row(
            "SELECT user_id, age, gender, location, language_preference,
                    phone_number, vaccination_reminders
             FROM user_profiles WHERE user_id = ?1",
            params![user_id],
            row_to_profile,
        )
        .optional()?;
    Ok(profile)
}

/// Upsert: merge `update` into the stored profile (or a fresh default
/// one) and write it back. Returns the resulting profile.
pub fn upsert_profile(
    conn: &Connection,
    user_id: &str,
    update: &ProfileUpdate,
) -> Result<UserProfile, DatabaseError> {
    let mut profile =
        get_profile(conn, user_id)?.unwrap_or_else(|| UserProfile::new(user_id));
    profile.apply(update);

    conn.execute(
        "INSERT INTO user_profiles
             (user_id, age, gender, location, language_preference,
              phone_number, vaccination_reminders)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(user_id) DO UPDATE SET
             age = excluded.age,
             gender = excluded.gender,
             location = excluded.location,
             language_preference = excluded.language_preference,
             phone_number = excluded.phone_number,
             vaccination_reminders = excluded.vaccination_reminders",
        params![
            profile.user_id,
            profile.age,
            profile.gender,
            profile.location,
            profile.language_preference,
            profile.phone_number,
            profile.vaccination_reminders as i64,
        ],
    )?;

    Ok(profile)
}

/// All profiles that opted into vaccination reminders and have a phone
/// number on file. Consumed by the reminder scheduler.
pub fn list_reminder_profiles(conn: &Connection) -> Result<Vec<UserProfile>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT user_id, age, gender, location, language_preference,
                phone_number, vaccination_reminders
         FROM user_profiles
         WHERE vaccination_reminders = 1 AND phone_number IS NOT NULL",
    )?;
    let rows = stmt.query_map([], row_to_profile)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn row_to_profile(row: &rusqlite::Row<'_>) -> Result<UserProfile, rusqlite::Error> {
    Ok(UserProfile {
        user_id: row.get(0)?,
        age: row.get(1)?,
        gender: row.get(2)?,
        location: row.get(3)?,
        language_preference: row.get(4)?,
        phone_number: row.get(5)?,
        vaccination_reminders: row.get::<_, i64>(6)? != 0,
    })
}
