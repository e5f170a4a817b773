use serde::{Deserialize, Serialize};

/// A user profile, keyed by `user_id` with upsert semantics.
/// The rule engine only ever reads `age` (vaccine eligibility).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub language_preference: String,
    pub phone_number: Option<String>,
    pub vaccination_reminders: bool,
}

impl UserProfile {
    /// Fresh profile with defaults, before any update is applied.
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            age: None,
            gender: None,
            location: None,
            language_preference: crate::config::DEFAULT_LANGUAGE.to_string(),
            phone_number: None,
            vaccination_reminders: true,
        }
    }

    /// Merge an update into this profile. Absent fields keep their
    /// stored values.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(ref gender) = update.gender {
            self.gender = Some(gender.clone());
        }
        if let Some(ref location) = update.location {
            self.location = Some(location.clone());
        }
        if let Some(ref lang) = update.language_preference {
            self.language_preference = lang.clone();
        }
        if let Some(ref phone) = update.phone_number {
            self.phone_number = Some(phone.clone());
        }
        if let Some(reminders) = update.vaccination_reminders {
            self.vaccination_reminders = reminders;
        }
    }
}

/// Partial profile update as received from `POST /api/profile`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub language_preference: Option<String>,
    pub phone_number: Option<String>,
    pub vaccination_reminders: Option<bool>,
}
