//! Structured classification result.
//!
//! A [`DisorderResult`] is built once per classification and never mutated afterwards.
//! Numeric outputs are stored already rounded to their display precision and serialise as
//! fixed-precision strings, so `24.0` is emitted as `"24.0"` rather than `24`.

use crate::measurements::MeasurementSet;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

/// Primary acid-base disorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PrimaryDisorder {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Metabolic Acidosis")]
    MetabolicAcidosis,
    #[serde(rename = "Metabolic Alkalosis")]
    MetabolicAlkalosis,
    #[serde(rename = "Respiratory Acidosis")]
    RespiratoryAcidosis,
    #[serde(rename = "Respiratory Alkalosis")]
    RespiratoryAlkalosis,
    #[serde(rename = "Mixed Disorder")]
    Mixed,
}

impl PrimaryDisorder {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::MetabolicAcidosis => "Metabolic Acidosis",
            Self::MetabolicAlkalosis => "Metabolic Alkalosis",
            Self::RespiratoryAcidosis => "Respiratory Acidosis",
            Self::RespiratoryAlkalosis => "Respiratory Alkalosis",
            Self::Mixed => "Mixed Disorder",
        }
    }
}

impl fmt::Display for PrimaryDisorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A compensatory or additional disorder label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Disorder {
    #[serde(rename = "Metabolic Acidosis")]
    MetabolicAcidosis,
    #[serde(rename = "Metabolic Alkalosis")]
    MetabolicAlkalosis,
    #[serde(rename = "Respiratory Acidosis")]
    RespiratoryAcidosis,
    #[serde(rename = "Respiratory Alkalosis")]
    RespiratoryAlkalosis,
    /// Concurrent normal anion gap process found by the delta ratio.
    #[serde(rename = "Non-AG Metabolic Acidosis")]
    NonAnionGapMetabolicAcidosis,
}

impl Disorder {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MetabolicAcidosis => "Metabolic Acidosis",
            Self::MetabolicAlkalosis => "Metabolic Alkalosis",
            Self::RespiratoryAcidosis => "Respiratory Acidosis",
            Self::RespiratoryAlkalosis => "Respiratory Alkalosis",
            Self::NonAnionGapMetabolicAcidosis => "Non-AG Metabolic Acidosis",
        }
    }
}

impl fmt::Display for Disorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How well the compensating parameter tracks its expected value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CompensationStatus {
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "Compensated")]
    Compensated,
    #[serde(rename = "Overcompensated")]
    Overcompensated,
    #[serde(rename = "Inadequate compensation")]
    Inadequate,
}

impl CompensationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotApplicable => "N/A",
            Self::Compensated => "Compensated",
            Self::Overcompensated => "Overcompensated",
            Self::Inadequate => "Inadequate compensation",
        }
    }
}

impl fmt::Display for CompensationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AnionGapStatus {
    High,
    Normal,
    Low,
}

impl fmt::Display for AnionGapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Normal => "Normal",
            Self::Low => "Low",
        })
    }
}

/// Meaning of a delta ratio computed for a high anion gap metabolic acidosis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeltaRatioInterpretation {
    /// Ratio below 1.
    #[serde(rename = "Normal AG metabolic acidosis also present")]
    NormalGapAcidosisAlsoPresent,
    /// Ratio in `[1, 2)`.
    #[serde(rename = "Pure high AG metabolic acidosis")]
    PureHighGapAcidosis,
    /// Ratio of 2 or more.
    #[serde(rename = "Metabolic alkalosis also present")]
    MetabolicAlkalosisAlsoPresent,
}

impl DeltaRatioInterpretation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NormalGapAcidosisAlsoPresent => "Normal AG metabolic acidosis also present",
            Self::PureHighGapAcidosis => "Pure high AG metabolic acidosis",
            Self::MetabolicAlkalosisAlsoPresent => "Metabolic alkalosis also present",
        }
    }
}

impl fmt::Display for DeltaRatioInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formula-derived acceptable band for the compensating parameter, one decimal place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExpectedRange {
    #[serde(serialize_with = "serialize_one_decimal")]
    pub low: f64,
    #[serde(serialize_with = "serialize_one_decimal")]
    pub high: f64,
}

impl ExpectedRange {
    /// Builds the band `expected ± tolerance`, rounding both bounds.
    pub fn around(expected: f64, tolerance: f64) -> Self {
        Self {
            low: round_to(expected - tolerance, 1),
            high: round_to(expected + tolerance, 1),
        }
    }
}

impl fmt::Display for ExpectedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} | {:.1}", self.low, self.high)
    }
}

/// Output of one classification.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisorderResult {
    pub primary_disorder: PrimaryDisorder,
    pub compensatory_response: Option<Disorder>,
    pub compensation_status: CompensationStatus,
    pub additional_disorders: Vec<Disorder>,
    pub expected_range: Option<ExpectedRange>,
    #[serde(serialize_with = "serialize_optional_one_decimal")]
    pub anion_gap: Option<f64>,
    #[serde(serialize_with = "serialize_optional_one_decimal")]
    pub uncorrected_anion_gap: Option<f64>,
    #[serde(serialize_with = "serialize_optional_one_decimal")]
    pub corrected_anion_gap: Option<f64>,
    pub anion_gap_status: Option<AnionGapStatus>,
    #[serde(serialize_with = "serialize_optional_two_decimals")]
    pub delta_ratio: Option<f64>,
    pub delta_ratio_interpretation: Option<DeltaRatioInterpretation>,
    pub all_disorders: Vec<String>,
    pub interpretation: String,
    /// The parsed snapshot this result was computed from.
    pub inputs: MeasurementSet,
}

impl DisorderResult {
    /// Anion gap formatted to one decimal place, as displayed.
    pub fn anion_gap_text(&self) -> Option<String> {
        self.anion_gap.map(|v| format!("{v:.1}"))
    }

    /// Delta ratio formatted to two decimal places, as displayed.
    pub fn delta_ratio_text(&self) -> Option<String> {
        self.delta_ratio.map(|v| format!("{v:.2}"))
    }

    /// Whether a compensation verdict applies (false for Normal and Mixed).
    pub fn has_compensation(&self) -> bool {
        self.compensation_status != CompensationStatus::NotApplicable
    }
}

/// Rounds half away from zero to `places` decimals.
///
/// The decision is made on the exact binary value of `value`, so `13.649999...` (the f64
/// nearest `1.5 * 5.1 + 8 - 2`) rounds down to `13.6` while a true tie such as `2.25` rounds
/// up to `2.3`. Infinities are returned unchanged.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        // Parsing the decimal text yields the nearest f64.
        .and_then(|rounded| rounded.to_string().parse::<f64>().ok())
        .unwrap_or(value)
}

fn serialize_one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.1}"))
}

fn serialize_optional_one_decimal<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_some(&format!("{v:.1}")),
        None => serializer.serialize_none(),
    }
}

fn serialize_optional_two_decimals<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_some(&format!("{v:.2}")),
        None => serializer.serialize_none(),
    }
}
