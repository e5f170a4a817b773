use crate::kb::KnowledgeBase;
use crate::models::{HealthAlert, UserProfile};

use super::eligibility::is_eligible;
use super::intent::{self, Intent};
use super::matcher;
use super::messages::MessageTemplates;

const MAX_VACCINES: usize = 5;
const MAX_PREVENTIVE_CATEGORIES: usize = 3;
const MAX_TIPS_PER_CATEGORY: usize = 3;
const MAX_ALERTS: usize = 3;

/// Seam for the alert branch: the engine asks for active alerts,
/// newest first, and stays otherwise pure.
pub trait AlertSource {
    fn active_alerts(&self, limit: usize) -> Vec<HealthAlert>;
}

/// A source with no alerts, for callers that don't serve the alert branch.
pub struct NoAlerts;

impl AlertSource for NoAlerts {
    fn active_alerts(&self, _limit: usize) -> Vec<HealthAlert> {
        Vec::new()
    }
}

impl AlertSource for Vec<HealthAlert> {
    fn active_alerts(&self, limit: usize) -> Vec<HealthAlert> {
        self.iter().take(limit).cloned().collect()
    }
}

/// Produce the chatbot's textual response for one input.
///
/// Always returns some text: every branch has a fixed fallback for the
/// empty case, and the fallback branch is a capability overview.
pub fn generate_response(
    user_input: &str,
    profile: Option<&UserProfile>,
    alerts: &dyn AlertSource,
    kb: &KnowledgeBase,
) -> String {
    let detected = intent::detect(user_input);
    tracing::debug!(intent = detected.as_str(), "Routing chat input");

    match detected {
        Intent::Symptom => {
            let matches = matcher::analyze(user_input, kb);
            if matches.is_empty() {
                MessageTemplates::NO_MATCH.to_string()
            } else {
                MessageTemplates::symptom_report(&matches)
            }
        }
        Intent::Vaccine => {
            let age = profile.and_then(|p| p.age);
            let eligible: Vec<_> = kb
                .vaccines
                .iter()
                .filter(|v| match age {
                    Some(age) => is_eligible(age, &v.age_range),
                    // Unknown age: no constraint to apply, list everything.
                    None => true,
                })
                .take(MAX_VACCINES)
                .collect();
            if eligible.is_empty() {
                MessageTemplates::VACCINE_PROMPT.to_string()
            } else {
                MessageTemplates::vaccine_list(&eligible)
            }
        }
        Intent::Preventive => {
            let categories: Vec<_> = kb
                .preventive
                .iter()
                .take(MAX_PREVENTIVE_CATEGORIES)
                .collect();
            MessageTemplates::preventive_tips(&categories, MAX_TIPS_PER_CATEGORY)
        }
        Intent::Alert => {
            let active = alerts.active_alerts(MAX_ALERTS);
            if active.is_empty() {
                MessageTemplates::NO_ALERTS.to_string()
            } else {
                MessageTemplates::alert_list(&active)
            }
        }
        Intent::Fallback => MessageTemplates::GREETING.to_string(),
    }
}
