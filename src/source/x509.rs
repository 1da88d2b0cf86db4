use crate::error::{Error, Result};
use crate::expiry::validate::OPENSSL_FORMAT;
use crate::source::EnddateSource;
use async_trait::async_trait;
use chrono::DateTime;
use std::path::Path;
use time::OffsetDateTime;
use tracing::debug;
use x509_parser::pem::Pem;
use x509_parser::time::ASN1Time;

pub struct CertificateDates {
    pub not_before: ASN1Time,
    pub not_after: ASN1Time,
}

/// Validity of the first `CERTIFICATE` block in `pem`.
///
/// A snakeoil `.pem` carries the certificate followed by its key, so other
/// blocks are skipped.
///
/// # Errors
///
/// Will return `Err` if the PEM is malformed, the certificate does not parse,
/// or there is no certificate at all
pub fn certificate_dates(pem: &[u8], path: &Path) -> Result<CertificateDates> {
    for block in Pem::iter_from_buffer(pem) {
        let block = block?;
        if block.label != "CERTIFICATE" {
            continue;
        }
        let cert = block.parse_x509()?;
        let validity = cert.validity();
        return Ok(CertificateDates {
            not_before: validity.not_before,
            not_after: validity.not_after,
        });
    }

    Err(Error::MissingCertificate(path.to_path_buf()))
}

/// Render as OpenSSL prints it, e.g. `Jun 15 00:00:00 2030 GMT`
///
/// # Errors
///
/// Will return `Err` if the time is out of chrono's range
pub fn openssl_text(asn1_time: &ASN1Time) -> Result<String> {
    let dt = DateTime::from_timestamp(asn1_time.timestamp(), 0).ok_or_else(|| {
        Error::Custom(format!("certificate time {asn1_time} out of range"))
    })?;
    Ok(dt.format(OPENSSL_FORMAT).to_string())
}

/// Whole days from now until `asn1_time`, negative once it has passed
#[must_use]
pub fn asn1time_to_future_days(asn1_time: &ASN1Time) -> i64 {
    let now = OffsetDateTime::now_utc();

    let target_time = asn1_time.to_datetime();

    let duration = target_time - now;
    duration.whole_days()
}

/// Reads the certificate in-process with `x509-parser`
pub struct X509Source;

#[async_trait]
impl EnddateSource for X509Source {
    async fn enddate(&self, certificate: &Path) -> Result<Option<String>> {
        let pem = tokio::fs::read(certificate).await?;
        let dates = certificate_dates(&pem, certificate)?;

        debug!(
            "{}: not before {} ({}d), not after {} ({}d)",
            certificate.display(),
            dates.not_before,
            asn1time_to_future_days(&dates.not_before),
            dates.not_after,
            asn1time_to_future_days(&dates.not_after)
        );

        Ok(Some(format!("notAfter={}", openssl_text(&dates.not_after)?)))
    }
}
