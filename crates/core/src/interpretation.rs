//! Human-readable interpretation sentence.

use crate::result::{AnionGapStatus, CompensationStatus, Disorder, PrimaryDisorder};

/// Composes the interpretation sentence.
///
/// The sentence reads `Primary <X>, with <status> by <response> and <additional...>.`,
/// prefixed with `Anion Gap Metabolic Acidosis. ` when a metabolic acidosis has a high gap.
pub fn interpret(
    primary: PrimaryDisorder,
    status: CompensationStatus,
    response: Option<Disorder>,
    additional: &[Disorder],
    gap_status: Option<AnionGapStatus>,
) -> String {
    match primary {
        PrimaryDisorder::Normal => return "Normal acid-base status.".to_string(),
        PrimaryDisorder::Mixed => return "Complex Mixed Acid-Base Disorder.".to_string(),
        _ => {}
    }

    let mut sentence = String::new();
    if primary == PrimaryDisorder::MetabolicAcidosis && gap_status == Some(AnionGapStatus::High) {
        sentence.push_str("Anion Gap Metabolic Acidosis. ");
    }
    sentence.push_str("Primary ");
    sentence.push_str(primary.label());

    if let Some(response) = response.filter(|_| status != CompensationStatus::NotApplicable) {
        sentence.push_str(&format!(", with {status} by {response}"));
    }

    if !additional.is_empty() {
        let joined = additional
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(" and ");
        sentence.push_str(" and ");
        sentence.push_str(&joined);
    }

    sentence.push('.');
    sentence
}
