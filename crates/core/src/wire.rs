//! Measurement file wire model and translation helpers.
//!
//! A measurement file is a YAML sequence of records (JSON is accepted as YAML's subset):
//!
//! ```yaml
//! - id: bed-4
//!   ph: 7.20
//!   pco2: 32
//!   hco3: "12"
//!   na: 140
//!   cl: 100
//!   chronic: false
//! ```
//!
//! Every key is optional. Readings may be numbers or text; text goes through the same soft
//! parse as form fields. Unknown keys are rejected.

use crate::measurements::MeasurementSet;
use crate::{AbgError, AbgResult};
use abg_types::RawReading;
use serde::Deserialize;
use std::path::Path;

/// Domain-level carrier for one record of a measurement file.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRecord {
    /// Free-form label used when reporting results.
    pub id: Option<String>,
    pub ph: Option<f64>,
    pub pco2: Option<f64>,
    pub hco3: Option<f64>,
    pub na: Option<f64>,
    pub cl: Option<f64>,
    pub albumin: Option<f64>,
    /// Record-level chronicity; falls back to the configured default when absent.
    pub chronic: Option<bool>,
}

impl MeasurementRecord {
    /// Builds the classifier snapshot, filling chronicity from `default_chronic` if needed.
    pub fn to_measurements(&self, default_chronic: bool) -> MeasurementSet {
        MeasurementSet {
            ph: self.ph,
            pco2: self.pco2,
            hco3: self.hco3,
            na: self.na,
            cl: self.cl,
            albumin: self.albumin,
            chronic: self.chronic.unwrap_or(default_chronic),
        }
    }
}

/// Parse measurement records from YAML or JSON text.
///
/// This uses `serde_path_to_error` to surface the path (e.g. `[1].chronic`) of the failing
/// field when the text does not match the wire schema.
///
/// # Errors
///
/// Returns [`AbgError::Translation`] if the document is not a sequence of records, a field
/// has an unexpected type, or an unknown key is present.
pub fn parse_measurement_records(text: &str) -> AbgResult<Vec<MeasurementRecord>> {
    let deserializer = serde_yaml::Deserializer::from_str(text);

    let wire = match serde_path_to_error::deserialize::<_, Vec<MeasurementRecordWire>>(deserializer)
    {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            return Err(AbgError::Translation(format!(
                "Measurement file schema mismatch at {path}: {source}"
            )));
        }
    };

    Ok(wire.into_iter().map(wire_to_domain).collect())
}

/// Read and parse a measurement file.
pub fn read_measurement_file(path: &Path) -> AbgResult<Vec<MeasurementRecord>> {
    let text = std::fs::read_to_string(path).map_err(AbgError::FileRead)?;
    parse_measurement_records(&text)
}

// ============================================================================
// Wire model
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MeasurementRecordWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    ph: Option<RawReading>,
    #[serde(default)]
    pco2: Option<RawReading>,
    #[serde(default)]
    hco3: Option<RawReading>,
    #[serde(default)]
    na: Option<RawReading>,
    #[serde(default)]
    cl: Option<RawReading>,
    #[serde(default)]
    albumin: Option<RawReading>,
    #[serde(default)]
    chronic: Option<bool>,
}

fn wire_to_domain(wire: MeasurementRecordWire) -> MeasurementRecord {
    let resolve = |raw: Option<RawReading>| raw.as_ref().and_then(RawReading::value);

    MeasurementRecord {
        id: wire.id,
        ph: resolve(wire.ph),
        pco2: resolve(wire.pco2),
        hco3: resolve(wire.hco3),
        na: resolve(wire.na),
        cl: resolve(wire.cl),
        albumin: resolve(wire.albumin),
        chronic: wire.chronic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_numbers_and_text_readings() {
        let input = r#"- id: bed-4
  ph: 7.20
  pco2: 32
  hco3: "12"
  na: " 140 "
  cl: 100
  albumin: ""
  chronic: false
"#;

        let records = parse_measurement_records(input).expect("parse yaml");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id.as_deref(), Some("bed-4"));
        assert_eq!(record.ph, Some(7.2));
        assert_eq!(record.pco2, Some(32.0));
        assert_eq!(record.hco3, Some(12.0));
        assert_eq!(record.na, Some(140.0));
        assert_eq!(record.cl, Some(100.0));
        assert_eq!(record.albumin, None);
        assert_eq!(record.chronic, Some(false));
    }

    #[test]
    fn accepts_json_documents() {
        let input = r#"[{"ph": 7.4, "pco2": 40, "hco3": 24}, {"ph": "7.3"}]"#;
        let records = parse_measurement_records(input).expect("parse json");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].ph, Some(7.3));
        assert_eq!(records[1].pco2, None);
    }

    #[test]
    fn chronicity_falls_back_to_default() {
        let records = parse_measurement_records("- ph: 7.4\n").expect("parse yaml");
        assert!(records[0].to_measurements(true).chronic);
        assert!(!records[0].to_measurements(false).chronic);

        let records = parse_measurement_records("- chronic: false\n").expect("parse yaml");
        assert!(!records[0].to_measurements(true).chronic);
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = "- ph: 7.4\n  lactate: 4.2\n";
        let err = parse_measurement_records(input).expect_err("should reject unknown key");
        match err {
            AbgError::Translation(msg) => {
                assert!(msg.contains("lactate"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn strict_validation_reports_path_of_wrong_type() {
        let input = "- ph: 7.4\n- ph: 7.3\n  chronic: sometimes\n";
        let err = parse_measurement_records(input).expect_err("should reject wrong type");
        match err {
            AbgError::Translation(msg) => {
                assert!(msg.contains("chronic"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_sequence_document() {
        let err = parse_measurement_records("ph: 7.4\n").expect_err("should reject mapping");
        assert!(matches!(err, AbgError::Translation(_)));
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "- ph: 7.4\n  pco2: 40\n  hco3: 24").expect("write temp file");

        let records = read_measurement_file(file.path()).expect("read file");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hco3, Some(24.0));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read_measurement_file(&dir.path().join("absent.yaml"))
            .expect_err("should fail to read");
        assert!(matches!(err, AbgError::FileRead(_)));
    }
}
