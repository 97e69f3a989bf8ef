//! Constants used throughout the acid-base classifier.
//!
//! Normal bounds, formula coefficients, tolerances and anion-gap thresholds live here so the
//! stage modules read as the formulas they implement.

/// Lower bound of normal arterial pH.
pub const PH_LOW: f64 = 7.35;

/// Upper bound of normal arterial pH.
pub const PH_HIGH: f64 = 7.45;

/// Lower bound of normal pCO2 (mmHg).
pub const PCO2_LOW: f64 = 36.0;

/// Upper bound of normal pCO2 (mmHg).
pub const PCO2_HIGH: f64 = 44.0;

/// Lower bound of normal HCO3 (mEq/L).
pub const HCO3_LOW: f64 = 22.0;

/// Upper bound of the broad HCO3 normal band (mEq/L).
///
/// Governs the normal-pH branch of primary determination and the "crosses its own
/// threshold" check for metabolic compensation.
pub const HCO3_HIGH: f64 = 28.0;

/// Upper bound of the tight HCO3 band used inside the alkalaemia branch (mEq/L).
pub const HCO3_HIGH_TIGHT: f64 = 26.0;

/// Midpoint of the pCO2 normal band, used for relative contributions.
pub const PCO2_MIDPOINT: f64 = (PCO2_LOW + PCO2_HIGH) / 2.0;

/// Midpoint of the broad HCO3 normal band, used for relative contributions.
pub const HCO3_MIDPOINT: f64 = (HCO3_LOW + HCO3_HIGH) / 2.0;

/// Reference pCO2 the compensation formulas are anchored on.
pub const PCO2_REFERENCE: f64 = 40.0;

/// Reference HCO3 the compensation formulas are anchored on.
pub const HCO3_REFERENCE: f64 = 24.0;

/// Winter's formula: expected pCO2 = 1.5 x HCO3 + 8.
pub const WINTERS_SLOPE: f64 = 1.5;
pub const WINTERS_INTERCEPT: f64 = 8.0;

/// Metabolic alkalosis: expected pCO2 rises 0.7 mmHg per mEq/L of HCO3.
pub const METABOLIC_ALKALOSIS_SLOPE: f64 = 0.7;

/// Respiratory acidosis: HCO3 rise per mmHg of pCO2.
pub const RESPIRATORY_ACIDOSIS_ACUTE_SLOPE: f64 = 0.1;
pub const RESPIRATORY_ACIDOSIS_CHRONIC_SLOPE: f64 = 0.35;

/// Respiratory alkalosis: HCO3 fall per mmHg of pCO2.
pub const RESPIRATORY_ALKALOSIS_ACUTE_SLOPE: f64 = 0.2;
pub const RESPIRATORY_ALKALOSIS_CHRONIC_SLOPE: f64 = 0.5;

/// Tolerance around an expected pCO2 (mmHg).
pub const PCO2_TOLERANCE: f64 = 2.0;

/// Tolerance around the expected HCO3 in respiratory acidosis (mEq/L).
pub const RESPIRATORY_ACIDOSIS_TOLERANCE: f64 = 3.0;

/// Tolerance around the expected HCO3 in respiratory alkalosis (mEq/L).
pub const RESPIRATORY_ALKALOSIS_TOLERANCE: f64 = 2.0;

/// Anion gap above this is high (mEq/L).
pub const ANION_GAP_HIGH: f64 = 12.0;

/// Anion gap below this is low (mEq/L).
pub const ANION_GAP_LOW: f64 = 8.0;

/// Normal serum albumin the anion gap correction is anchored on (g/dL).
pub const ALBUMIN_REFERENCE: f64 = 4.0;

/// Anion gap rise per g/dL of albumin below reference.
pub const ALBUMIN_CORRECTION_FACTOR: f64 = 2.5;

/// Normal anion gap subtracted when computing the delta anion gap.
pub const DELTA_ANION_GAP_BASELINE: f64 = 12.0;

/// Normal HCO3 the delta HCO3 is measured from.
pub const DELTA_HCO3_BASELINE: f64 = 24.0;

/// Display reference range for HCO3 on the input form (mEq/L).
pub const HCO3_DISPLAY_HIGH: f64 = 26.0;
