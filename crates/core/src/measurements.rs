//! Measurement snapshot handed to the classifier.
//!
//! The input-collection layer owns the free-text fields; the classifier only ever sees a
//! parsed snapshot. Each reading is independently optional.

use abg_types::parse_optional;
use serde::{Deserialize, Serialize};

/// Six optional readings plus the chronicity flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    /// Arterial pH (unitless).
    pub ph: Option<f64>,
    /// Partial pressure of CO2 (mmHg).
    pub pco2: Option<f64>,
    /// Bicarbonate (mEq/L).
    pub hco3: Option<f64>,
    /// Sodium (mEq/L).
    pub na: Option<f64>,
    /// Chloride (mEq/L).
    pub cl: Option<f64>,
    /// Serum albumin (g/dL).
    pub albumin: Option<f64>,
    /// `true` for a chronic respiratory process, `false` for acute.
    pub chronic: bool,
}

impl MeasurementSet {
    /// Creates an empty snapshot with the given chronicity.
    pub fn new(chronic: bool) -> Self {
        Self {
            chronic,
            ..Self::default()
        }
    }

    /// Parses a snapshot from the raw form fields.
    pub fn from_raw(raw: &RawMeasurements) -> Self {
        Self {
            ph: parse_optional(&raw.ph),
            pco2: parse_optional(&raw.pco2),
            hco3: parse_optional(&raw.hco3),
            na: parse_optional(&raw.na),
            cl: parse_optional(&raw.cl),
            albumin: parse_optional(&raw.albumin),
            chronic: raw.chronic,
        }
    }

    pub fn with_ph(mut self, value: f64) -> Self {
        self.ph = Some(value);
        self
    }

    pub fn with_pco2(mut self, value: f64) -> Self {
        self.pco2 = Some(value);
        self
    }

    pub fn with_hco3(mut self, value: f64) -> Self {
        self.hco3 = Some(value);
        self
    }

    pub fn with_na(mut self, value: f64) -> Self {
        self.na = Some(value);
        self
    }

    pub fn with_cl(mut self, value: f64) -> Self {
        self.cl = Some(value);
        self
    }

    pub fn with_albumin(mut self, value: f64) -> Self {
        self.albumin = Some(value);
        self
    }

    /// Returns `(pH, pCO2, HCO3)` when all three are present.
    pub fn triad(&self) -> Option<(f64, f64, f64)> {
        Some((self.ph?, self.pco2?, self.hco3?))
    }

    /// Returns `(Na, Cl)` when both are present.
    pub fn electrolytes(&self) -> Option<(f64, f64)> {
        Some((self.na?, self.cl?))
    }
}

/// The raw text of each input field, as typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeasurements {
    pub ph: String,
    pub pco2: String,
    pub hco3: String,
    pub na: String,
    pub cl: String,
    pub albumin: String,
    pub chronic: bool,
}

impl Default for RawMeasurements {
    /// Blank fields with the chronic toggle switched on, the form's initial state.
    fn default() -> Self {
        Self {
            ph: String::new(),
            pco2: String::new(),
            hco3: String::new(),
            na: String::new(),
            cl: String::new(),
            albumin: String::new(),
            chronic: true,
        }
    }
}
