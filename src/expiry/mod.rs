pub mod month;
pub mod normalize;
pub mod validate;

use crate::error::Result;
use chrono::{NaiveDateTime, TimeDelta};
use normalize::Normalizer;
use serde::Serialize;
use std::fmt::Write;
use tracing::{debug, warn};

/// Default `strftime` pattern for `expire_date`
pub const DEFAULT_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Reported when there is no certificate, or nothing usable could be read from it
pub const NO_EXPIRE_DATE: &str = "none";

/// Result record handed back to the orchestration layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryResult {
    pub failed: bool,
    pub changed: bool,
    pub expire_date: String,
    pub diff_days: i64,
}

impl ExpiryResult {
    /// The "nothing to report" record
    #[must_use]
    pub fn none() -> Self {
        Self {
            failed: false,
            changed: false,
            expire_date: NO_EXPIRE_DATE.to_string(),
            diff_days: 0,
        }
    }
}

impl Default for ExpiryResult {
    fn default() -> Self {
        Self::none()
    }
}

/// Turns a raw "not valid after" string into an [`ExpiryResult`].
pub struct ExpiryCalculator {
    normalizer: Normalizer,
    pattern: String,
}

impl ExpiryCalculator {
    /// # Errors
    ///
    /// Will return `Err` if the internal enddate pattern cannot be compiled
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            pattern: pattern.into(),
        })
    }

    /// Normalize, validate and diff `raw` against `now`.
    ///
    /// Anything short of an unknown month name degrades to [`ExpiryResult::none`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if `raw` is an OpenSSL enddate line with a month name
    /// that is not an English abbreviation
    pub fn calculate(&self, raw: &str, now: NaiveDateTime) -> Result<ExpiryResult> {
        let normalized = self.normalizer.normalize(raw)?;

        if !validate::is_valid(&normalized) {
            warn!("unparseable certificate date '{}'", normalized);
            return Ok(ExpiryResult::none());
        }

        Ok(self.diff(&normalized, now))
    }

    fn diff(&self, normalized: &str, now: NaiveDateTime) -> ExpiryResult {
        let cert_date = match NaiveDateTime::parse_from_str(normalized, validate::ISO_FORMAT) {
            Ok(date) => date,
            Err(e) => {
                warn!("cannot compute expiry of '{}': {}", normalized, e);
                return ExpiryResult::none();
            }
        };

        let diff_days = whole_days(cert_date - now);

        // chrono reports bad specifiers through fmt::Error
        let mut expire_date = String::new();
        if write!(expire_date, "{}", cert_date.format(&self.pattern)).is_err() {
            warn!("invalid date pattern '{}'", self.pattern);
            return ExpiryResult::none();
        }

        debug!("expire_date  '{}'", expire_date);
        debug!("diff days    '{}'", diff_days);

        ExpiryResult {
            failed: false,
            changed: false,
            expire_date,
            diff_days,
        }
    }
}

/// Whole days in `delta`, rounded towards negative infinity
#[must_use]
pub fn whole_days(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    if delta < TimeDelta::days(days) {
        days - 1
    } else {
        days
    }
}
