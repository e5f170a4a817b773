//! Notification stub. No SMS gateway is wired up; every send becomes a
//! structured log event so the call sites and payloads are real even
//! though delivery is not.

use crate::models::{HealthAlert, UserProfile};

/// "Send" SMS notifications for a critical health alert.
pub fn send_sms_alerts(alert: &HealthAlert) {
    tracing::warn!(
        alert_id = alert.id,
        title = %alert.title,
        severity = alert.severity.as_str(),
        location = alert.location.as_deref().unwrap_or("all"),
        "SMS alert (stub): no gateway configured, not delivered"
    );
}

/// "Send" a vaccination reminder to one user.
pub fn send_vaccination_reminder(profile: &UserProfile, vaccine_names: &[String]) {
    tracing::info!(
        user_id = %profile.user_id,
        phone = profile.phone_number.as_deref().unwrap_or("unknown"),
        vaccines = ?vaccine_names,
        "Vaccination reminder (stub): no gateway configured, not delivered"
    );
}
