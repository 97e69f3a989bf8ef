//! Primary disorder determination.
//!
//! A three-way split on pH, then per-branch threshold tests on pCO2 and HCO3. Acidaemia and
//! alkalaemia use the tight HCO3 pair (22/26); a normal pH uses the broad pair (22/28) and
//! falls back on the compensation formulas to tell a compensated single disorder from a
//! mixed one.

use crate::constants::*;
use crate::result::PrimaryDisorder;

/// Determines the primary disorder from the triad.
pub fn determine_primary(ph: f64, pco2: f64, hco3: f64) -> PrimaryDisorder {
    if ph < PH_LOW {
        acidaemic(pco2, hco3)
    } else if ph > PH_HIGH {
        alkalaemic(pco2, hco3)
    } else {
        normal_ph(pco2, hco3)
    }
}

fn acidaemic(pco2: f64, hco3: f64) -> PrimaryDisorder {
    let metabolic = hco3 < HCO3_LOW;
    let respiratory = pco2 > PCO2_HIGH;

    match (metabolic, respiratory) {
        (true, true) => {
            let metabolic_contribution = (HCO3_MIDPOINT - hco3) / HCO3_MIDPOINT;
            let respiratory_contribution = (pco2 - PCO2_MIDPOINT) / PCO2_MIDPOINT;
            if respiratory_contribution > metabolic_contribution {
                PrimaryDisorder::RespiratoryAcidosis
            } else {
                PrimaryDisorder::MetabolicAcidosis
            }
        }
        (true, false) => PrimaryDisorder::MetabolicAcidosis,
        (false, true) => PrimaryDisorder::RespiratoryAcidosis,
        (false, false) => PrimaryDisorder::Mixed,
    }
}

fn alkalaemic(pco2: f64, hco3: f64) -> PrimaryDisorder {
    let metabolic = hco3 > HCO3_HIGH_TIGHT;
    let respiratory = pco2 < PCO2_LOW;

    match (metabolic, respiratory) {
        (true, true) => {
            let metabolic_contribution = (hco3 - HCO3_MIDPOINT) / HCO3_MIDPOINT;
            let respiratory_contribution = (PCO2_MIDPOINT - pco2) / PCO2_MIDPOINT;
            if respiratory_contribution > metabolic_contribution {
                PrimaryDisorder::RespiratoryAlkalosis
            } else {
                PrimaryDisorder::MetabolicAlkalosis
            }
        }
        (true, false) => PrimaryDisorder::MetabolicAlkalosis,
        (false, true) => PrimaryDisorder::RespiratoryAlkalosis,
        (false, false) => PrimaryDisorder::Mixed,
    }
}

fn normal_ph(pco2: f64, hco3: f64) -> PrimaryDisorder {
    if pco2 < PCO2_LOW && hco3 < HCO3_LOW {
        let delta = PCO2_REFERENCE - pco2;
        let acute = HCO3_REFERENCE - RESPIRATORY_ALKALOSIS_ACUTE_SLOPE * delta;
        let chronic = HCO3_REFERENCE - RESPIRATORY_ALKALOSIS_CHRONIC_SLOPE * delta;

        if (hco3 - chronic).abs() < RESPIRATORY_ALKALOSIS_TOLERANCE
            || (hco3 - acute).abs() < RESPIRATORY_ALKALOSIS_TOLERANCE
        {
            return PrimaryDisorder::RespiratoryAlkalosis;
        }

        let expected_pco2 = WINTERS_SLOPE * hco3 + WINTERS_INTERCEPT;
        if (pco2 - expected_pco2).abs() < PCO2_TOLERANCE {
            PrimaryDisorder::MetabolicAcidosis
        } else {
            PrimaryDisorder::Mixed
        }
    } else if pco2 > PCO2_HIGH && hco3 > HCO3_HIGH {
        let delta = pco2 - PCO2_REFERENCE;
        let acute = HCO3_REFERENCE + RESPIRATORY_ACIDOSIS_ACUTE_SLOPE * delta;
        let chronic = HCO3_REFERENCE + RESPIRATORY_ACIDOSIS_CHRONIC_SLOPE * delta;

        if (hco3 - chronic).abs() < RESPIRATORY_ACIDOSIS_TOLERANCE
            || (hco3 - acute).abs() < RESPIRATORY_ACIDOSIS_TOLERANCE
        {
            return PrimaryDisorder::RespiratoryAcidosis;
        }

        let expected_pco2 =
            METABOLIC_ALKALOSIS_SLOPE * (hco3 - HCO3_REFERENCE) + PCO2_REFERENCE;
        if (pco2 - expected_pco2).abs() < PCO2_TOLERANCE {
            PrimaryDisorder::MetabolicAlkalosis
        } else {
            PrimaryDisorder::Mixed
        }
    } else if pco2 > PCO2_HIGH {
        PrimaryDisorder::RespiratoryAcidosis
    } else if pco2 < PCO2_LOW {
        PrimaryDisorder::RespiratoryAlkalosis
    } else if hco3 > HCO3_HIGH {
        PrimaryDisorder::MetabolicAlkalosis
    } else if hco3 < HCO3_LOW {
        PrimaryDisorder::MetabolicAcidosis
    } else {
        PrimaryDisorder::Normal
    }
}
