//! Validated primitive types for blood-gas readings.
//!
//! Readings arrive as free text typed into an input form (or as loosely typed YAML/JSON
//! values). The rule at this boundary is lenient: whitespace is trimmed, an empty field is
//! absent, and anything that does not start with a number is absent. Physiologically
//! implausible values are *not* rejected here.

/// Errors that can occur when parsing a reading from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    /// The input text was empty or contained only whitespace
    #[error("Reading cannot be empty")]
    Empty,
    /// The input text did not start with a number
    #[error("Reading is not numeric: {0}")]
    NotNumeric(String),
}

/// A numeric reading that is guaranteed not to be NaN.
///
/// Construction goes through [`Reading::parse`] or [`Reading::from_f64`]; both reject NaN so
/// that comparisons downstream behave as ordinary ordered comparisons.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reading(f64);

impl Reading {
    /// Parses a reading from free text.
    ///
    /// The input is trimmed, then the longest leading decimal number is taken (optional
    /// sign, digits, optional fraction, optional exponent, or `Infinity`). Trailing text
    /// such as units is ignored, so `"40 mmHg"` parses as `40.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingError::Empty`] for blank input and [`ReadingError::NotNumeric`] when
    /// no numeric prefix is present.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ReadingError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReadingError::Empty);
        }

        let prefix = numeric_prefix(trimmed)
            .ok_or_else(|| ReadingError::NotNumeric(trimmed.to_owned()))?;

        let value = match prefix.trim_start_matches(['+', '-']) {
            "Infinity" if prefix.starts_with('-') => f64::NEG_INFINITY,
            "Infinity" => f64::INFINITY,
            _ => prefix
                .parse::<f64>()
                .map_err(|_| ReadingError::NotNumeric(trimmed.to_owned()))?,
        };

        Self::from_f64(value).ok_or_else(|| ReadingError::NotNumeric(trimmed.to_owned()))
    }

    /// Wraps an already numeric value, returning `None` for NaN.
    pub fn from_f64(value: f64) -> Option<Self> {
        (!value.is_nan()).then_some(Self(value))
    }

    /// Returns the inner value.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Parses a reading, degrading every failure to `None`.
///
/// This is the rule applied to form fields: a half-typed or blank field is simply absent.
pub fn parse_optional(input: &str) -> Option<f64> {
    Reading::parse(input).ok().map(Reading::value)
}

/// Returns the longest prefix of `text` that forms a decimal number.
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(&text[..end + "Infinity".len()]);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&text[..end])
}

/// A loosely typed reading as it appears in YAML or JSON input.
///
/// Measurement files are hand-written, so `ph: 7.4` and `ph: "7.4"` are both accepted.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum RawReading {
    Number(f64),
    Text(String),
}

impl RawReading {
    /// Resolves the raw value with the same soft rule as form fields.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Reading::from_f64(*value).map(Reading::value),
            Self::Text(text) => parse_optional(text),
        }
    }
}
