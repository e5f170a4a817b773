use super::text::normalize_joined;

/// The branch a chat message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Symptom,
    Vaccine,
    Preventive,
    Alert,
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Symptom => "symptom",
            Self::Vaccine => "vaccine",
            Self::Preventive => "preventive",
            Self::Alert => "alert",
            Self::Fallback => "fallback",
        }
    }
}

/// Ordered priority table: the first entry whose keyword occurs in the
/// normalized input wins. Symptom checks precede everything else, so
/// "fever and vaccine" routes to the symptom branch.
const INTENT_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::Symptom,
        &["symptom", "pain", "fever", "cough", "headache", "sick", "hurt"],
    ),
    (Intent::Vaccine, &["vaccine", "vaccination", "immunization"]),
    (
        Intent::Preventive,
        &["prevent", "prevention", "healthy", "tips", "care"],
    ),
    (Intent::Alert, &["alert", "outbreak", "emergency", "warning"]),
];

/// Classify input into an [`Intent`].
///
/// Keyword tests are substring checks against the normalized input,
/// so "vaccinations" triggers "vaccination" and "unhealthy" triggers
/// "healthy". Same coarseness as the matcher.
pub fn detect(raw_input: &str) -> Intent {
    let normalized = normalize_joined(raw_input);
    for (intent, keywords) in INTENT_TABLE {
        if keywords.iter().any(|kw| normalized.contains(kw)) {
            return *intent;
        }
    }
    Intent::Fallback
}
