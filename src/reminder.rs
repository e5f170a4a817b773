//! Vaccination reminder scheduler.
//!
//! A background task that periodically scans opted-in profiles and
//! routes their age-eligible vaccines through the notification stub.
//! Failures are logged and the next tick proceeds; the scheduler never
//! takes the service down.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;

use crate::db;
use crate::engine::eligibility::is_eligible;
use crate::kb::KnowledgeBase;
use crate::notify;

/// Reminder passes run once a day.
pub const REMINDER_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Handle to the running scheduler. Dropping it (or calling
/// [`ReminderScheduler::shutdown`]) stops the task.
pub struct ReminderScheduler {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ReminderScheduler {
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Reminder scheduler shutdown signal sent");
        }
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn the scheduler in a background tokio task.
pub fn start(db_path: PathBuf, kb: Arc<KnowledgeBase>, interval: Duration) -> ReminderScheduler {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick fires immediately; skip it so startup stays quiet.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = run_reminder_pass(&db_path, &kb) {
                        tracing::error!(error = %e, "Reminder pass failed");
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::info!("Reminder scheduler stopped");
                    break;
                }
            }
        }
    });

    ReminderScheduler {
        shutdown_tx: Some(shutdown_tx),
    }
}

/// One scan: for every opted-in profile with a phone number, log the
/// vaccines their age qualifies them for.
pub fn run_reminder_pass(
    db_path: &std::path::Path,
    kb: &KnowledgeBase,
) -> Result<usize, db::DatabaseError> {
    let conn = db::open_database(db_path)?;
    let profiles = db::list_reminder_profiles(&conn)?;

    let mut notified = 0;
    for profile in &profiles {
        let Some(age) = profile.age else {
            continue;
        };
        let vaccines: Vec<String> = kb
            .vaccines
            .iter()
            .filter(|v| is_eligible(age, &v.age_range))
            .map(|v| v.name.clone())
            .collect();
        if !vaccines.is_empty() {
            notify::send_vaccination_reminder(profile, &vaccines);
            notified += 1;
        }
    }

    tracing::info!(profiles = profiles.len(), notified, "Reminder pass complete");
    Ok(notified)
}
