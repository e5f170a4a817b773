use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::enums::Severity;
use crate::models::{HealthAlert, NewAlert};

/// Insert a new alert and return it as stored.
pub fn insert_alert(conn: &Connection, alert: &NewAlert) -> Result<HealthAlert, DatabaseError> {
    conn.execute(
        "INSERT INTO health_alerts (title, description, severity, location)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            alert.title,
            alert.description,
            alert.severity.as_str(),
            alert.location,
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_alert(conn, id)?.ok_or_else(|| DatabaseError::NotFound {
        entity_type: "health_alert".into(),
        id: id.to_string(),
    })
}

pub fn get_alert(conn: &Connection, id: i64) -> Result<Option<HealthAlert>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, severity, location, active, created_at
         FROM health_alerts WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map(params![id], row_to_alert)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// Active alerts, newest first. `location` filters by case-insensitive
/// substring when present. `limit` of `None` returns all.
pub fn list_active_alerts(
    conn: &Connection,
    location: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<HealthAlert>, DatabaseError> {
    let limit = limit.map(|n| n as i64).unwrap_or(-1);
    let alerts = match location {
        Some(loc) => {
            let pattern = format!("%{loc}%");
            let mut stmt = conn.prepare(
                "SELECT id, title, description, severity, location, active, created_at
                 FROM health_alerts
                 WHERE active = 1 AND location LIKE ?1
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![pattern, limit], row_to_alert)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, title, description, severity, location, active, created_at
                 FROM health_alerts
                 WHERE active = 1
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], row_to_alert)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
    };
    Ok(alerts)
}

fn row_to_alert(row: &rusqlite::Row<'_>) -> Result<HealthAlert, rusqlite::Error> {
    Ok(HealthAlert {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        severity: Severity::from_str_or_default(&row.get::<_, String>(3)?),
        location: row.get(4)?,
        active: row.get::<_, i64>(5)? != 0,
        created_at: row.get::<_, NaiveDateTime>(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    fn make_alert(title: &str, severity: Severity, location: Option<&str>) -> NewAlert {
        NewAlert {
            title: title.into(),
            description: "test description".into(),
            severity,
            location: location.map(|s| s.into()),
        }
    }

    #[test]
    fn insert_and_get_round_trip() {
        let conn = open_memory_database().unwrap();
        let stored =
            insert_alert(&conn, &make_alert("Dengue Outbreak", Severity::High, Some("Mumbai")))
                .unwrap();
        assert_eq!(stored.title, "Dengue Outbreak");
        assert_eq!(stored.severity, Severity::High);
        assert!(stored.active);

        let fetched = get_alert(&conn, stored.id).unwrap().unwrap();
        assert_eq!(fetched.id, stored.id);
    }

    #[test]
    fn list_is_newest_first() {
        let conn = open_memory_database().unwrap();
        // Seeded sample alert is already present; ids break created_at ties.
        let a = insert_alert(&conn, &make_alert("First", Severity::Low, None)).unwrap();
        let b = insert_alert(&conn, &make_alert("Second", Severity::Low, None)).unwrap();

        let alerts = list_active_alerts(&conn, None, None).unwrap();
        assert!(alerts.len() >= 3);
        assert_eq!(alerts[0].id, b.id);
        assert_eq!(alerts[1].id, a.id);
    }

    #[test]
    fn location_filter_is_substring_match() {
        let conn = open_memory_database().unwrap();
        insert_alert(&conn, &make_alert("Local", Severity::Medium, Some("Navi Mumbai"))).unwrap();
        insert_alert(&conn, &make_alert("Elsewhere", Severity::Medium, Some("Delhi"))).unwrap();

        let alerts = list_active_alerts(&conn, Some("mumbai"), None).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "Local");
    }

    #[test]
    fn limit_applies() {
        let conn = open_memory_database().unwrap();
        for i in 0..5 {
            insert_alert(&conn, &make_alert(&format!("Alert {i}"), Severity::Low, None)).unwrap();
        }
        let alerts = list_active_alerts(&conn, None, Some(3)).unwrap();
        assert_eq!(alerts.len(), 3);
    }
}
