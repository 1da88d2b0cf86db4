use chrono::NaiveDateTime;

/// OpenSSL's textual enddate, e.g. `Jun 15 00:00:00 2030 GMT`
pub const OPENSSL_FORMAT: &str = "%b %d %H:%M:%S %Y GMT";

/// The normalized form consumed by the diff computation
pub const ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Candidate templates, tried in order
pub const KNOWN_FORMATS: [&str; 2] = [OPENSSL_FORMAT, ISO_FORMAT];

/// First known template `candidate` parses against, if any
#[must_use]
pub fn matching_format(candidate: &str) -> Option<&'static str> {
    KNOWN_FORMATS
        .into_iter()
        .find(|format| NaiveDateTime::parse_from_str(candidate, format).is_ok())
}

#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    matching_format(candidate).is_some()
}
