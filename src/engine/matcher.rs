use std::cmp::Ordering;

use serde::Serialize;

use crate::kb::KnowledgeBase;
use crate::models::enums::Severity;

use super::text::normalize;

/// Hard cap on reported confidence. Even a full symptom match is never
/// presented as more than 95%.
pub const CONFIDENCE_CAP: f64 = 95.0;

/// At most this many conditions are returned per query.
pub const MAX_RESULTS: usize = 3;

/// One ranked candidate condition for a symptom query. Ephemeral,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionMatch {
    pub condition: String,
    pub confidence: f64,
    pub matched_symptoms: Vec<String>,
    pub description: String,
    pub recommendations: Vec<String>,
    pub severity: Severity,
}

/// Match free-text input against the disease knowledge base.
///
/// A symptom phrase counts as matched when any input token occurs as a
/// substring of the lowercased phrase. This is deliberately coarse:
/// short tokens ("a", "in") can match phrases they have nothing to do
/// with. That behavior is part of the contract, not a bug.
///
/// Returns at most [`MAX_RESULTS`] matches, descending confidence,
/// ties broken by knowledge-base order.
pub fn analyze(raw_input: &str, kb: &KnowledgeBase) -> Vec<ConditionMatch> {
    let words = normalize(raw_input);
    if words.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ConditionMatch> = Vec::new();

    for condition in &kb.conditions {
        let mut matched_symptoms = Vec::new();
        for symptom in &condition.symptoms {
            let phrase = symptom.to_lowercase();
            if words.iter().any(|w| phrase.contains(w.as_str())) {
                matched_symptoms.push(symptom.clone());
            }
        }

        if matched_symptoms.is_empty() {
            continue;
        }

        // Empty symptom lists use denominator 1 to avoid division by zero.
        let denominator = condition.symptoms.len().max(1) as f64;
        let confidence =
            ((matched_symptoms.len() as f64 / denominator) * 100.0).min(CONFIDENCE_CAP);

        results.push(ConditionMatch {
            condition: condition.name.clone(),
            confidence,
            matched_symptoms,
            description: condition.description.clone(),
            recommendations: condition.recommendations.clone(),
            severity: condition.severity,
        });
    }

    // Stable sort: equal confidences keep knowledge-base order.
    results.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(MAX_RESULTS);
    results
}
