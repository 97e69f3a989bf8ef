//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed in; the classifier never
//! reads environment variables itself.

use crate::{AbgError, AbgResult};

/// Chronicity assumed when none is specified: the input form starts on chronic.
pub const DEFAULT_CHRONIC: bool = true;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    default_chronic: bool,
}

impl CoreConfig {
    pub fn new(default_chronic: bool) -> Self {
        Self { default_chronic }
    }

    /// Chronicity applied to measurements that do not carry their own.
    pub fn default_chronic(&self) -> bool {
        self.default_chronic
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHRONIC)
    }
}

/// Parse the default chronicity from an optional string value.
///
/// Accepts `chronic`/`acute` and `true`/`false` (case-insensitive). If `value` is `None` or
/// empty/whitespace, returns [`DEFAULT_CHRONIC`].
pub fn chronicity_from_env_value(value: Option<String>) -> AbgResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(DEFAULT_CHRONIC),
        Some("chronic" | "true") => Ok(true),
        Some("acute" | "false") => Ok(false),
        Some(other) => Err(AbgError::InvalidInput(format!(
            "unrecognised chronicity '{other}' (expected chronic or acute)"
        ))),
    }
}
