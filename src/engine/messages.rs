use crate::kb::{PreventiveCategory, Vaccine};
use crate::models::HealthAlert;

use super::matcher::ConditionMatch;

/// Fixed texts and response assembly. Kept in one place so every
/// branch of the responder reads the same voice.
pub struct MessageTemplates;

impl MessageTemplates {
    pub const DISCLAIMER: &'static str = "⚠️ **Important**: This is for educational purposes \
        only. Please consult a healthcare professional for proper diagnosis and treatment.";

    pub const NO_MATCH: &'static str = "I couldn't identify specific conditions based on your \
        symptoms. Please provide more details or consult a healthcare professional.";

    pub const VACCINE_PROMPT: &'static str = "I can provide vaccination information. Please \
        specify your age or the vaccine you're interested in.";

    pub const NO_ALERTS: &'static str = "No active health alerts in your area. Stay safe and \
        follow preventive measures!";

    pub const GREETING: &'static str = "Hello! I'm your healthcare assistant. I can help you with:\n\n\
        🔍 **Symptom Analysis** - Describe your symptoms for possible conditions\n\
        💉 **Vaccination Info** - Get vaccination schedules and information\n\
        🛡️ **Preventive Care** - Learn about staying healthy\n\
        🚨 **Health Alerts** - Check for disease outbreaks in your area\n\n\
        What would you like to know about?";

    /// Ranked condition list plus the educational disclaimer.
    pub fn symptom_report(matches: &[ConditionMatch]) -> String {
        let mut out = String::from("Based on your symptoms, here are some possible conditions:\n\n");
        for m in matches {
            out.push_str(&format!("• **{}** ({:.0}% match)\n", m.condition, m.confidence));
            out.push_str(&format!("  {}\n", m.description));
            if !m.recommendations.is_empty() {
                out.push_str(&format!(
                    "  Recommendations: {}\n",
                    m.recommendations.join(", ")
                ));
            }
            out.push('\n');
        }
        out.push_str(Self::DISCLAIMER);
        out
    }

    pub fn vaccine_list(vaccines: &[&Vaccine]) -> String {
        let mut out = String::from("Here are the recommended vaccinations:\n\n");
        for v in vaccines {
            out.push_str(&format!("• **{}**\n", title_case(&v.name)));
            let age = if v.age_range.is_empty() { "As recommended" } else { &v.age_range };
            let purpose = if v.purpose.is_empty() { "Disease prevention" } else { &v.purpose };
            out.push_str(&format!("  Age: {age}\n"));
            out.push_str(&format!("  Purpose: {purpose}\n\n"));
        }
        out
    }

    pub fn preventive_tips(categories: &[&PreventiveCategory], tips_per_category: usize) -> String {
        let mut out = String::from("Here are some important preventive healthcare tips:\n\n");
        for cat in categories {
            out.push_str(&format!("**{}:**\n", title_case(&cat.name)));
            for tip in cat.tips.iter().take(tips_per_category) {
                out.push_str(&format!("• {tip}\n"));
            }
            out.push('\n');
        }
        out
    }

    pub fn alert_list(alerts: &[HealthAlert]) -> String {
        let mut out = String::from("🚨 **Current Health Alerts:**\n\n");
        for alert in alerts {
            out.push_str(&format!(
                "• **{}** ({})\n",
                alert.title,
                alert.severity.as_str().to_uppercase()
            ));
            out.push_str(&format!("  {}\n", alert.description));
            if let Some(ref location) = alert.location {
                out.push_str(&format!("  Location: {location}\n"));
            }
            out.push('\n');
        }
        out
    }
}

/// Capitalize the first letter of every word ("covid-19" → "Covid-19").
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
