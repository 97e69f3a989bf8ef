//! Disorder classification.
//!
//! [`classify`] is a pure function of a [`MeasurementSet`]. It runs four stages in order:
//! primary determination, expected compensation, anion gap with delta ratio, and the
//! interpretation sentence. Without a complete pH/pCO2/HCO3 triad there is no result.

use crate::anion_gap::{anion_gap, delta_ratio};
use crate::compensation::assess_compensation;
use crate::interpretation::interpret;
use crate::measurements::{MeasurementSet, RawMeasurements};
use crate::primary::determine_primary;
use crate::result::{round_to, AnionGapStatus, DisorderResult, PrimaryDisorder};

/// Classifies a measurement snapshot.
///
/// Returns `None` when pH, pCO2 or HCO3 is missing.
pub fn classify(measurements: &MeasurementSet) -> Option<DisorderResult> {
    let Some((ph, pco2, hco3)) = measurements.triad() else {
        tracing::debug!("triad incomplete, no classification");
        return None;
    };

    let primary = determine_primary(ph, pco2, hco3);
    tracing::debug!(ph, pco2, hco3, %primary, "primary disorder determined");

    let compensation = assess_compensation(primary, pco2, hco3, measurements.chronic);
    let mut additional = compensation.additional;

    let gap = measurements
        .electrolytes()
        .map(|(na, cl)| anion_gap(na, cl, hco3, measurements.albumin));
    let gap_status = gap.map(|g| g.status);

    let delta = gap
        .filter(|g| {
            primary == PrimaryDisorder::MetabolicAcidosis && g.status == AnionGapStatus::High
        })
        .and_then(|g| delta_ratio(g.value(), hco3));
    if let Some(disorder) = delta.and_then(|d| d.additional) {
        additional.push(disorder);
    }

    let interpretation = interpret(
        primary,
        compensation.status,
        compensation.response,
        &additional,
        gap_status,
    );

    let all_disorders = (primary != PrimaryDisorder::Normal)
        .then(|| primary.label())
        .into_iter()
        .chain(compensation.response.map(|r| r.label()))
        .chain(additional.iter().map(|d| d.label()))
        .map(str::to_string)
        .collect();

    Some(DisorderResult {
        primary_disorder: primary,
        compensatory_response: compensation.response,
        compensation_status: compensation.status,
        additional_disorders: additional,
        expected_range: compensation.expected_range,
        anion_gap: gap.map(|g| round_to(g.value(), 1)),
        uncorrected_anion_gap: gap.map(|g| round_to(g.uncorrected, 1)),
        corrected_anion_gap: gap.and_then(|g| g.corrected).map(|v| round_to(v, 1)),
        anion_gap_status: gap_status,
        delta_ratio: delta.map(|d| round_to(d.ratio, 2)),
        delta_ratio_interpretation: delta.map(|d| d.interpretation),
        all_disorders,
        interpretation,
        inputs: *measurements,
    })
}

/// Parses the raw form fields and classifies them.
pub fn classify_raw(raw: &RawMeasurements) -> Option<DisorderResult> {
    classify(&MeasurementSet::from_raw(raw))
}
