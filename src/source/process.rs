use crate::command::exec;
use crate::error::Result;
use crate::source::EnddateSource;
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::warn;

/// `openssl x509 -enddate -noout -in <certificate>`
pub struct OpensslSource {
    openssl: PathBuf,
}

impl OpensslSource {
    #[must_use]
    pub const fn new(openssl: PathBuf) -> Self {
        Self { openssl }
    }
}

#[async_trait]
impl EnddateSource for OpensslSource {
    async fn enddate(&self, certificate: &Path) -> Result<Option<String>> {
        let args = [
            OsStr::new("x509"),
            OsStr::new("-enddate"),
            OsStr::new("-noout"),
            OsStr::new("-in"),
            certificate.as_os_str(),
        ];
        let out = exec(&self.openssl, args, None).await?;

        if !out.success() {
            warn!(
                "{} exited with {}: {}",
                self.openssl.display(),
                out.exit_code,
                out.stderr.trim()
            );
            return Ok(None);
        }

        Ok(out.stdout.lines().next().map(str::to_string))
    }
}
