//! Plain-text rendering of prediction outcomes.
//!
//! Mirrors what the form's result panel shows: a risk headline, the churn
//! probability as a percentage, and the service's optional message.

use crate::models::PredictionResult;

/// Formats a probability in [0, 1] as a percentage with one decimal place,
/// e.g. `0.82` -> `"82.0%"`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Headline for the outcome: churners are flagged, everyone else is safe.
pub fn risk_headline(result: &PredictionResult) -> &'static str {
    if result.is_churn() {
        "High Risk"
    } else {
        "Safe Customer"
    }
}

/// Renders the full result block for the terminal surface.
pub fn render_result(result: &PredictionResult) -> String {
    let mut out = format!(
        "{}\nChurn probability: {}",
        risk_headline(result),
        format_probability(result.probability)
    );
    if let Some(message) = &result.message {
        out.push('\n');
        out.push_str(message);
    }
    out
}
