//! Reference-range flags for the triad readings.
//!
//! These are the ranges the input form highlights against. They are display aids only and
//! do not feed the classifier; note the HCO3 display range tops out at 26, not 28.

use crate::constants::{HCO3_DISPLAY_HIGH, HCO3_LOW, PCO2_HIGH, PCO2_LOW, PH_HIGH, PH_LOW};
use crate::measurements::MeasurementSet;
use serde::Serialize;
use std::fmt;

pub const PH_RANGE: ReferenceRange = ReferenceRange::new(PH_LOW, PH_HIGH);
pub const PCO2_RANGE: ReferenceRange = ReferenceRange::new(PCO2_LOW, PCO2_HIGH);
pub const HCO3_RANGE: ReferenceRange = ReferenceRange::new(HCO3_LOW, HCO3_DISPLAY_HIGH);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
}

impl ReferenceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Flags `value` against the range; both bounds count as normal.
    pub fn flag(&self, value: f64) -> ReadingFlag {
        if value < self.low {
            ReadingFlag::Low
        } else if value > self.high {
            ReadingFlag::High
        } else {
            ReadingFlag::Normal
        }
    }
}

impl fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ReadingFlag {
    Low,
    Normal,
    High,
}

impl fmt::Display for ReadingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        })
    }
}

/// Per-reading flags; a missing reading has no flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReadingFlags {
    pub ph: Option<ReadingFlag>,
    pub pco2: Option<ReadingFlag>,
    pub hco3: Option<ReadingFlag>,
}

/// Flags each triad reading that is present.
pub fn reading_flags(measurements: &MeasurementSet) -> ReadingFlags {
    ReadingFlags {
        ph: measurements.ph.map(|v| PH_RANGE.flag(v)),
        pco2: measurements.pco2.map(|v| PCO2_RANGE.flag(v)),
        hco3: measurements.hco3.map(|v| HCO3_RANGE.flag(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_each_present_reading() {
        let set = MeasurementSet::new(true).with_ph(7.30).with_hco3(27.0);
        let flags = reading_flags(&set);
        assert_eq!(flags.ph, Some(ReadingFlag::Low));
        assert_eq!(flags.pco2, None);
        assert_eq!(flags.hco3, Some(ReadingFlag::High));
    }

    #[test]
    fn bounds_are_normal() {
        assert_eq!(PH_RANGE.flag(7.35), ReadingFlag::Normal);
        assert_eq!(PH_RANGE.flag(7.45), ReadingFlag::Normal);
        assert_eq!(PCO2_RANGE.flag(35.9), ReadingFlag::Low);
        assert_eq!(HCO3_RANGE.flag(26.0), ReadingFlag::Normal);
    }

    #[test]
    fn display_shows_bounds() {
        assert_eq!(PCO2_RANGE.to_string(), "36-44");
        assert_eq!(PH_RANGE.to_string(), "7.35-7.45");
    }
}
