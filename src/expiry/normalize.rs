use crate::error::{Error, Result};
use crate::expiry::month::month_number;
use regex::Regex;

/// `notAfter=Jun 15 00:00:00 2030 GMT`, with or without OpenSSL's space padded day
const OPENSSL_ENDDATE: &str = r"^.*=(?P<month>\w{3})\s+(?P<day>\d{1,2}) (?P<hour>\d{2}):(?P<minute>\d{2}):(?P<second>\d{2}) (?P<year>\d{4}) GMT$";

/// Rewrites OpenSSL's textual "not after" line into `YYYY-MM-DD HH:MM:SS`.
pub struct Normalizer {
    enddate: Regex,
}

impl Normalizer {
    /// # Errors
    ///
    /// Will return `Err` if the enddate pattern does not compile
    pub fn new() -> Result<Self> {
        Ok(Self {
            enddate: Regex::new(OPENSSL_ENDDATE)?,
        })
    }

    /// Input that is not an OpenSSL enddate line is returned unchanged.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the line names a month outside the English table
    pub fn normalize(&self, raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        let Some(caps) = self.enddate.captures(trimmed) else {
            return Ok(raw.to_string());
        };

        let month = month_number(&caps["month"])
            .ok_or_else(|| Error::UnrecognizedMonth(caps["month"].to_string()))?;
        let day = &caps["day"];
        let day = if day.len() == 1 { format!("0{day}") } else { day.to_string() };

        Ok(format!(
            "{}-{month}-{day} {}:{}:{}",
            &caps["year"], &caps["hour"], &caps["minute"], &caps["second"]
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::month::MONTHS;

    #[test]
    fn test_every_month() {
        let normalizer = Normalizer::new().unwrap();
        for (name, number) in MONTHS {
            let raw = format!("notAfter={name} 05 12:00:00 2030 GMT");
            assert_eq!(
                normalizer.normalize(&raw).unwrap(),
                format!("2030-{number}-05 12:00:00")
            );
        }
    }

    #[test]
    fn test_padded_day_and_newline() {
        let normalizer = Normalizer::new().unwrap();
        assert_eq!(
            normalizer.normalize("notAfter=Jan  1 00:00:00 2023 GMT\n").unwrap(),
            "2023-01-01 00:00:00"
        );
    }

    #[test]
    fn test_passthrough() {
        let normalizer = Normalizer::new().unwrap();
        assert_eq!(
            normalizer.normalize("2030-01-05 12:00:00").unwrap(),
            "2030-01-05 12:00:00"
        );
        // no label, so not an enddate line
        assert_eq!(
            normalizer.normalize("Jan 05 12:00:00 2030 GMT").unwrap(),
            "Jan 05 12:00:00 2030 GMT"
        );
        assert_eq!(normalizer.normalize("").unwrap(), "");
    }

    #[test]
    fn test_unrecognized_month() {
        let normalizer = Normalizer::new().unwrap();
        let result = normalizer.normalize("notAfter=Mär 05 12:00:00 2030 GMT");
        assert!(matches!(result, Err(Error::UnrecognizedMonth(m)) if m == "Mär"));
    }
}
