//! Anion gap and delta ratio.

use crate::constants::*;
use crate::result::{AnionGapStatus, DeltaRatioInterpretation, Disorder};

/// Anion gap values before rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnionGap {
    /// `Na - (Cl + HCO3)`.
    pub uncorrected: f64,
    /// Albumin-corrected gap, present when albumin is positive.
    pub corrected: Option<f64>,
    pub status: AnionGapStatus,
}

impl AnionGap {
    /// The gap used for display and the delta ratio: corrected when available.
    pub fn value(&self) -> f64 {
        self.corrected.unwrap_or(self.uncorrected)
    }
}

/// Computes the anion gap, correcting for albumin when it is present and positive.
pub fn anion_gap(na: f64, cl: f64, hco3: f64, albumin: Option<f64>) -> AnionGap {
    let uncorrected = na - (cl + hco3);
    let corrected = albumin
        .filter(|alb| *alb > 0.0)
        .map(|alb| uncorrected + ALBUMIN_CORRECTION_FACTOR * (ALBUMIN_REFERENCE - alb));

    AnionGap {
        uncorrected,
        corrected,
        status: gap_status(corrected.unwrap_or(uncorrected)),
    }
}

fn gap_status(gap: f64) -> AnionGapStatus {
    if gap > ANION_GAP_HIGH {
        AnionGapStatus::High
    } else if gap < ANION_GAP_LOW {
        AnionGapStatus::Low
    } else {
        AnionGapStatus::Normal
    }
}

/// Delta ratio with its reading and any disorder it uncovers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeltaRatio {
    pub ratio: f64,
    pub interpretation: DeltaRatioInterpretation,
    pub additional: Option<Disorder>,
}

/// Computes `(gap - 12) / (24 - HCO3)`.
///
/// Returns `None` when HCO3 is not below 24, since the ratio is then undefined or inverted.
/// Callers only ask for it in a high anion gap metabolic acidosis.
pub fn delta_ratio(gap: f64, hco3: f64) -> Option<DeltaRatio> {
    let delta_gap = gap - DELTA_ANION_GAP_BASELINE;
    let delta_hco3 = DELTA_HCO3_BASELINE - hco3;
    if delta_hco3 <= 0.0 {
        return None;
    }

    let ratio = delta_gap / delta_hco3;
    let (interpretation, additional) = if ratio < 1.0 {
        (
            DeltaRatioInterpretation::NormalGapAcidosisAlsoPresent,
            Some(Disorder::NonAnionGapMetabolicAcidosis),
        )
    } else if ratio < 2.0 {
        (DeltaRatioInterpretation::PureHighGapAcidosis, None)
    } else {
        (
            DeltaRatioInterpretation::MetabolicAlkalosisAlsoPresent,
            Some(Disorder::MetabolicAlkalosis),
        )
    };

    Some(DeltaRatio {
        ratio,
        interpretation,
        additional,
    })
}
