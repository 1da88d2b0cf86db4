use crate::error::Result;
use crate::expiry::{ExpiryCalculator, ExpiryResult};
use crate::source::EnddateSource;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `<directory>/<domain>/<domain>.pem`
#[must_use]
pub fn certificate_path(directory: &Path, domain: &str) -> PathBuf {
    directory.join(domain).join(format!("{domain}.pem"))
}

/// Expiry report for the snakeoil certificate of one domain
pub struct SnakeoilDate {
    certificate: PathBuf,
    source: Box<dyn EnddateSource>,
    calculator: ExpiryCalculator,
}

impl SnakeoilDate {
    /// # Errors
    ///
    /// Will return `Err` if the expiry calculator cannot be built
    pub fn new(
        directory: &Path,
        domain: &str,
        pattern: &str,
        source: Box<dyn EnddateSource>,
    ) -> Result<Self> {
        Ok(Self {
            certificate: certificate_path(directory, domain),
            source,
            calculator: ExpiryCalculator::new(pattern)?,
        })
    }

    /// # Errors
    ///
    /// See [`Self::run_at`]
    pub async fn run(&self) -> Result<ExpiryResult> {
        self.run_at(Local::now().naive_local()).await
    }

    /// Same as [`Self::run`] with a fixed notion of "now".
    ///
    /// # Errors
    ///
    /// Will return `Err` if the source fails hard or the certificate date
    /// names an unknown month
    pub async fn run_at(&self, now: NaiveDateTime) -> Result<ExpiryResult> {
        if !self.certificate.is_file() {
            info!("no certificate at {}", self.certificate.display());
            return Ok(ExpiryResult::none());
        }

        let Some(raw) = self.source.enddate(&self.certificate).await? else {
            return Ok(ExpiryResult::none());
        };
        debug!("raw enddate '{}'", raw);

        self.calculator.calculate(&raw, now)
    }
}
