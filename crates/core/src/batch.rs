//! Classification of every record in a measurement file.

use crate::classifier::classify;
use crate::config::CoreConfig;
use crate::result::DisorderResult;
use crate::wire::MeasurementRecord;
use serde::Serialize;

/// One classified record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchEntry {
    /// Record label, or its 1-based position when the record has no id.
    pub id: String,
    /// `None` when the record lacks part of the triad.
    pub result: Option<DisorderResult>,
}

/// Classifies each record in order, applying the configured default chronicity.
pub fn classify_records(records: &[MeasurementRecord], config: &CoreConfig) -> Vec<BatchEntry> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record
                .id
                .clone()
                .unwrap_or_else(|| format!("#{}", index + 1));
            let result = classify(&record.to_measurements(config.default_chronic()));
            if result.is_none() {
                tracing::warn!("record {id}: pH, pCO2 and HCO3 are required, skipping");
            }
            BatchEntry { id, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{CompensationStatus, PrimaryDisorder};
    use crate::wire::parse_measurement_records;

    #[test]
    fn classifies_each_record_in_order() {
        let input = r#"- id: first
  ph: 7.40
  pco2: 40
  hco3: 24
- ph: 7.30
- ph: 7.30
  pco2: 60
  hco3: 27
"#;
        let records = parse_measurement_records(input).expect("parse yaml");
        let entries = classify_records(&records, &CoreConfig::new(false));

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, "first");
        assert_eq!(
            entries[0].result.as_ref().map(|r| r.primary_disorder),
            Some(PrimaryDisorder::Normal)
        );
        assert_eq!(entries[1].id, "#2");
        assert!(entries[1].result.is_none());

        let third = entries[2].result.as_ref().expect("third classified");
        assert_eq!(third.compensation_status, CompensationStatus::Compensated);
    }

    #[test]
    fn record_chronicity_overrides_default() {
        let input = "- ph: 7.30\n  pco2: 60\n  hco3: 27\n  chronic: true\n";
        let records = parse_measurement_records(input).expect("parse yaml");
        let entries = classify_records(&records, &CoreConfig::new(false));
        let result = entries[0].result.as_ref().expect("classified");
        assert_eq!(result.compensation_status, CompensationStatus::Inadequate);
    }
}
