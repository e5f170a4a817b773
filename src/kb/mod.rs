//! Static healthcare knowledge base.
//!
//! Three JSON files under `resources/kb/` are loaded once at startup
//! into an immutable [`KnowledgeBase`] that is shared read-only across
//! requests. A missing or malformed file degrades to an empty list and
//! a warning; the service keeps answering with whatever loaded.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::enums::Severity;

/// A disease entry: symptoms to match against plus advice to surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub severity: Severity,
}

/// A vaccine entry. `age_range` is a free-text expression like
/// "18-64", "above 12" or "6 months and older".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vaccine {
    pub name: String,
    #[serde(default)]
    pub age_range: String,
    #[serde(default)]
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreventiveCategory {
    pub name: String,
    pub tips: Vec<String>,
}

/// The loaded knowledge base. Entry order is file order and is the
/// tie-break order for ranking, so all three lists are `Vec`s.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub conditions: Vec<Condition>,
    pub vaccines: Vec<Vaccine>,
    pub preventive: Vec<PreventiveCategory>,
}

impl KnowledgeBase {
    /// Load the knowledge base from `dir`. Never fails: each file that
    /// cannot be read or parsed yields an empty list.
    pub fn load(dir: &Path) -> Self {
        let conditions = load_file(&dir.join("diseases.json"));
        let vaccines = load_file(&dir.join("vaccines.json"));
        let preventive = load_file(&dir.join("preventive_care.json"));

        tracing::info!(
            conditions = conditions.len(),
            vaccines = vaccines.len(),
            preventive = preventive.len(),
            "Knowledge base loaded"
        );

        Self {
            conditions,
            vaccines,
            preventive,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.vaccines.is_empty() && self.preventive.is_empty()
    }

    /// In-memory fixture for tests (no file I/O).
    pub fn load_test() -> Self {
        Self {
            conditions: vec![
                Condition {
                    name: "Common Cold".into(),
                    symptoms: vec![
                        "runny nose".into(),
                        "sneezing".into(),
                        "sore throat".into(),
                        "mild cough".into(),
                    ],
                    description: "A mild viral infection of the nose and throat.".into(),
                    recommendations: vec!["Rest".into(), "Drink warm fluids".into()],
                    severity: Severity::Low,
                },
                Condition {
                    name: "Influenza".into(),
                    symptoms: vec![
                        "high fever".into(),
                        "body aches".into(),
                        "dry cough".into(),
                        "fatigue".into(),
                        "headache".into(),
                    ],
                    description: "A contagious respiratory illness caused by influenza viruses."
                        .into(),
                    recommendations: vec![
                        "Rest and hydration".into(),
                        "Consult a doctor if fever persists".into(),
                    ],
                    severity: Severity::Medium,
                },
                Condition {
                    name: "Dengue".into(),
                    symptoms: vec![
                        "high fever".into(),
                        "severe headache".into(),
                        "pain behind eyes".into(),
                        "joint pain".into(),
                        "skin rash".into(),
                    ],
                    description: "A mosquito-borne viral infection.".into(),
                    recommendations: vec![
                        "Seek medical attention".into(),
                        "Avoid aspirin".into(),
                    ],
                    severity: Severity::High,
                },
            ],
            vaccines: vec![
                Vaccine {
                    name: "covid-19".into(),
                    age_range: "above 12".into(),
                    purpose: "Protection against COVID-19".into(),
                },
                Vaccine {
                    name: "influenza".into(),
                    age_range: "6 months and older".into(),
                    purpose: "Annual protection against seasonal flu".into(),
                },
                Vaccine {
                    name: "hepatitis b".into(),
                    age_range: "0-18".into(),
                    purpose: "Protection against hepatitis B infection".into(),
                },
                Vaccine {
                    name: "shingles".into(),
                    age_range: "above 50".into(),
                    purpose: "Protection against shingles".into(),
                },
            ],
            preventive: vec![
                PreventiveCategory {
                    name: "hygiene".into(),
                    tips: vec![
                        "Wash hands frequently with soap".into(),
                        "Cover mouth when coughing".into(),
                        "Keep surroundings clean".into(),
                    ],
                },
                PreventiveCategory {
                    name: "nutrition".into(),
                    tips: vec![
                        "Eat a balanced diet".into(),
                        "Stay hydrated".into(),
                    ],
                },
                PreventiveCategory {
                    name: "exercise".into(),
                    tips: vec!["At least 30 minutes of activity a day".into()],
                },
                PreventiveCategory {
                    name: "sleep".into(),
                    tips: vec!["7-8 hours of sleep a night".into()],
                },
            ],
        }
    }
}

fn load_file<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Knowledge base file missing");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Knowledge base file malformed");
            Vec::new()
        }
    }
}
