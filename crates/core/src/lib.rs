//! # ABG Core
//!
//! Acid-base disorder classification from arterial blood gas and electrolyte readings.
//!
//! Given pH, pCO2 and HCO3 (and optionally Na, Cl and albumin) this crate determines the
//! primary disorder, judges compensation against the standard formulas, computes the anion
//! gap and delta ratio, and composes a one-sentence interpretation.
//!
//! The classifier is a pure, synchronous function: no I/O, no shared state, same input same
//! output. Reading measurement files and resolving configuration are separate edges.
//!
//! ```
//! use abg_core::{classify, MeasurementSet, PrimaryDisorder};
//!
//! let set = MeasurementSet::new(true)
//!     .with_ph(7.20)
//!     .with_pco2(32.0)
//!     .with_hco3(12.0);
//! let result = classify(&set).expect("triad present");
//! assert_eq!(result.primary_disorder, PrimaryDisorder::MetabolicAcidosis);
//! ```

pub mod anion_gap;
pub mod batch;
pub mod classifier;
pub mod compensation;
pub mod config;
pub mod constants;
pub mod interpretation;
pub mod measurements;
pub mod primary;
pub mod reference;
pub mod result;
pub mod wire;

mod error;

pub use batch::{classify_records, BatchEntry};
pub use classifier::{classify, classify_raw};
pub use config::{chronicity_from_env_value, CoreConfig};
pub use error::{AbgError, AbgResult};
pub use measurements::{MeasurementSet, RawMeasurements};
pub use reference::{reading_flags, ReadingFlag, ReadingFlags, ReferenceRange};
pub use result::{
    AnionGapStatus, CompensationStatus, DeltaRatioInterpretation, Disorder, DisorderResult,
    ExpectedRange, PrimaryDisorder,
};
pub use wire::{parse_measurement_records, read_measurement_file, MeasurementRecord};
