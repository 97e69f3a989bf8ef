//! Expected compensation for a primary disorder.
//!
//! Each single primary disorder has one formula for the expected value of the compensating
//! parameter. The actual value is graded against `expected ± tolerance`:
//! - inside the band: compensated
//! - past the band in the direction the compensation moves: overcompensated, and the
//!   compensatory disorder is reported as an additional process
//! - short of the band: inadequate, and if the compensating parameter is itself abnormal in
//!   the opposite direction that disorder is reported as an additional process

use crate::constants::*;
use crate::result::{CompensationStatus, Disorder, ExpectedRange, PrimaryDisorder};

/// Outcome of the compensation stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Compensation {
    pub response: Option<Disorder>,
    pub status: CompensationStatus,
    pub expected_range: Option<ExpectedRange>,
    pub additional: Vec<Disorder>,
}

impl Compensation {
    fn not_applicable() -> Self {
        Self {
            response: None,
            status: CompensationStatus::NotApplicable,
            expected_range: None,
            additional: Vec::new(),
        }
    }
}

/// Which way the compensating parameter moves when compensating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shift {
    Rising,
    Falling,
}

/// Where the actual value lies relative to the expected band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Grade {
    Within,
    Beyond,
    Short,
}

fn grade(actual: f64, expected: f64, tolerance: f64, shift: Shift) -> Grade {
    let (below, above) = (actual < expected - tolerance, actual > expected + tolerance);
    match shift {
        Shift::Falling if below => Grade::Beyond,
        Shift::Falling if above => Grade::Short,
        Shift::Rising if above => Grade::Beyond,
        Shift::Rising if below => Grade::Short,
        _ => Grade::Within,
    }
}

/// Evaluates compensation for `primary`.
///
/// Normal and mixed primaries have no compensation formula and yield `N/A`.
pub fn assess_compensation(
    primary: PrimaryDisorder,
    pco2: f64,
    hco3: f64,
    chronic: bool,
) -> Compensation {
    match primary {
        PrimaryDisorder::MetabolicAcidosis => {
            // Winter's formula
            let expected = WINTERS_SLOPE * hco3 + WINTERS_INTERCEPT;
            build(
                Disorder::RespiratoryAlkalosis,
                expected,
                PCO2_TOLERANCE,
                grade(pco2, expected, PCO2_TOLERANCE, Shift::Falling),
                (pco2 > PCO2_HIGH).then_some(Disorder::RespiratoryAcidosis),
            )
        }
        PrimaryDisorder::MetabolicAlkalosis => {
            let expected = METABOLIC_ALKALOSIS_SLOPE * (hco3 - HCO3_REFERENCE) + PCO2_REFERENCE;
            build(
                Disorder::RespiratoryAcidosis,
                expected,
                PCO2_TOLERANCE,
                grade(pco2, expected, PCO2_TOLERANCE, Shift::Rising),
                (pco2 < PCO2_LOW).then_some(Disorder::RespiratoryAlkalosis),
            )
        }
        PrimaryDisorder::RespiratoryAcidosis => {
            let slope = if chronic {
                RESPIRATORY_ACIDOSIS_CHRONIC_SLOPE
            } else {
                RESPIRATORY_ACIDOSIS_ACUTE_SLOPE
            };
            let expected = HCO3_REFERENCE + slope * (pco2 - PCO2_REFERENCE);
            build(
                Disorder::MetabolicAlkalosis,
                expected,
                RESPIRATORY_ACIDOSIS_TOLERANCE,
                grade(hco3, expected, RESPIRATORY_ACIDOSIS_TOLERANCE, Shift::Rising),
                (hco3 < HCO3_LOW).then_some(Disorder::MetabolicAcidosis),
            )
        }
        PrimaryDisorder::RespiratoryAlkalosis => {
            let slope = if chronic {
                RESPIRATORY_ALKALOSIS_CHRONIC_SLOPE
            } else {
                RESPIRATORY_ALKALOSIS_ACUTE_SLOPE
            };
            let expected = HCO3_REFERENCE - slope * (PCO2_REFERENCE - pco2);
            build(
                Disorder::MetabolicAcidosis,
                expected,
                RESPIRATORY_ALKALOSIS_TOLERANCE,
                grade(hco3, expected, RESPIRATORY_ALKALOSIS_TOLERANCE, Shift::Falling),
                (hco3 > HCO3_HIGH).then_some(Disorder::MetabolicAlkalosis),
            )
        }
        PrimaryDisorder::Normal | PrimaryDisorder::Mixed => Compensation::not_applicable(),
    }
}

fn build(
    response: Disorder,
    expected: f64,
    tolerance: f64,
    grade: Grade,
    opposing: Option<Disorder>,
) -> Compensation {
    let (status, additional) = match grade {
        Grade::Within => (CompensationStatus::Compensated, Vec::new()),
        Grade::Beyond => (CompensationStatus::Overcompensated, vec![response]),
        Grade::Short => (CompensationStatus::Inadequate, opposing.into_iter().collect()),
    };

    tracing::debug!(
        %response,
        expected,
        %status,
        "compensation assessed"
    );

    Compensation {
        response: Some(response),
        status,
        expected_range: Some(ExpectedRange::around(expected, tolerance)),
        additional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(low: f64, high: f64) -> Option<ExpectedRange> {
        Some(ExpectedRange { low, high })
    }

    #[test]
    fn normal_and_mixed_are_not_applicable() {
        for primary in [PrimaryDisorder::Normal, PrimaryDisorder::Mixed] {
            let result = assess_compensation(primary, 40.0, 24.0, true);
            assert_eq!(result.status, CompensationStatus::NotApplicable);
            assert_eq!(result.response, None);
            assert_eq!(result.expected_range, None);
            assert!(result.additional.is_empty());
        }
    }

    #[test]
    fn metabolic_acidosis_uses_winters_formula() {
        let result = assess_compensation(PrimaryDisorder::MetabolicAcidosis, 26.0, 12.0, true);
        assert_eq!(result.response, Some(Disorder::RespiratoryAlkalosis));
        assert_eq!(result.expected_range, range(24.0, 28.0));
        assert_eq!(result.status, CompensationStatus::Compensated);
    }

    #[test]
    fn metabolic_acidosis_low_pco2_is_overcompensated() {
        let result = assess_compensation(PrimaryDisorder::MetabolicAcidosis, 20.0, 12.0, true);
        assert_eq!(result.status, CompensationStatus::Overcompensated);
        assert_eq!(result.additional, vec![Disorder::RespiratoryAlkalosis]);
    }

    #[test]
    fn metabolic_acidosis_high_pco2_is_inadequate() {
        let result = assess_compensation(PrimaryDisorder::MetabolicAcidosis, 32.0, 12.0, true);
        assert_eq!(result.status, CompensationStatus::Inadequate);
        assert!(result.additional.is_empty());

        let result = assess_compensation(PrimaryDisorder::MetabolicAcidosis, 50.0, 12.0, true);
        assert_eq!(result.status, CompensationStatus::Inadequate);
        assert_eq!(result.additional, vec![Disorder::RespiratoryAcidosis]);
    }

    #[test]
    fn metabolic_alkalosis_grading() {
        // expected pCO2 = 0.7 * (34 - 24) + 40 = 47
        let ok = assess_compensation(PrimaryDisorder::MetabolicAlkalosis, 47.0, 34.0, true);
        assert_eq!(ok.response, Some(Disorder::RespiratoryAcidosis));
        assert_eq!(ok.expected_range, range(45.0, 49.0));
        assert_eq!(ok.status, CompensationStatus::Compensated);

        let over = assess_compensation(PrimaryDisorder::MetabolicAlkalosis, 52.0, 34.0, true);
        assert_eq!(over.status, CompensationStatus::Overcompensated);
        assert_eq!(over.additional, vec![Disorder::RespiratoryAcidosis]);

        let short = assess_compensation(PrimaryDisorder::MetabolicAlkalosis, 40.0, 34.0, true);
        assert_eq!(short.status, CompensationStatus::Inadequate);
        assert!(short.additional.is_empty());

        let low = assess_compensation(PrimaryDisorder::MetabolicAlkalosis, 34.0, 34.0, true);
        assert_eq!(low.status, CompensationStatus::Inadequate);
        assert_eq!(low.additional, vec![Disorder::RespiratoryAlkalosis]);
    }

    #[test]
    fn respiratory_acidosis_band_depends_on_chronicity() {
        let chronic = assess_compensation(PrimaryDisorder::RespiratoryAcidosis, 60.0, 27.0, true);
        assert_eq!(chronic.response, Some(Disorder::MetabolicAlkalosis));
        assert_eq!(chronic.expected_range, range(28.0, 34.0));
        assert_eq!(chronic.status, CompensationStatus::Inadequate);

        let acute = assess_compensation(PrimaryDisorder::RespiratoryAcidosis, 60.0, 27.0, false);
        assert_eq!(acute.expected_range, range(23.0, 29.0));
        assert_eq!(acute.status, CompensationStatus::Compensated);
    }

    #[test]
    fn respiratory_acidosis_extremes() {
        let over = assess_compensation(PrimaryDisorder::RespiratoryAcidosis, 60.0, 36.0, true);
        assert_eq!(over.status, CompensationStatus::Overcompensated);
        assert_eq!(over.additional, vec![Disorder::MetabolicAlkalosis]);

        let short = assess_compensation(PrimaryDisorder::RespiratoryAcidosis, 60.0, 20.0, false);
        assert_eq!(short.status, CompensationStatus::Inadequate);
        assert_eq!(short.additional, vec![Disorder::MetabolicAcidosis]);
    }

    #[test]
    fn respiratory_alkalosis_band_depends_on_chronicity() {
        // acute 24 - 0.2 * 10 = 22, chronic 24 - 0.5 * 10 = 19
        let acute = assess_compensation(PrimaryDisorder::RespiratoryAlkalosis, 30.0, 22.0, false);
        assert_eq!(acute.response, Some(Disorder::MetabolicAcidosis));
        assert_eq!(acute.expected_range, range(20.0, 24.0));
        assert_eq!(acute.status, CompensationStatus::Compensated);

        let chronic = assess_compensation(PrimaryDisorder::RespiratoryAlkalosis, 30.0, 22.0, true);
        assert_eq!(chronic.expected_range, range(17.0, 21.0));
        assert_eq!(chronic.status, CompensationStatus::Inadequate);
        assert!(chronic.additional.is_empty());
    }

    #[test]
    fn respiratory_alkalosis_extremes() {
        let over = assess_compensation(PrimaryDisorder::RespiratoryAlkalosis, 30.0, 15.0, true);
        assert_eq!(over.status, CompensationStatus::Overcompensated);
        assert_eq!(over.additional, vec![Disorder::MetabolicAcidosis]);

        let short = assess_compensation(PrimaryDisorder::RespiratoryAlkalosis, 30.0, 29.0, false);
        assert_eq!(short.status, CompensationStatus::Inadequate);
        assert_eq!(short.additional, vec![Disorder::MetabolicAlkalosis]);
    }

    #[test]
    fn band_edges_count_as_compensated() {
        let low = assess_compensation(PrimaryDisorder::MetabolicAcidosis, 24.0, 12.0, true);
        let high = assess_compensation(PrimaryDisorder::MetabolicAcidosis, 28.0, 12.0, true);
        assert_eq!(low.status, CompensationStatus::Compensated);
        assert_eq!(high.status, CompensationStatus::Compensated);
    }
}
