pub mod process;
pub mod x509;

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Where the "not valid after" line of a certificate comes from
#[async_trait]
pub trait EnddateSource: Send + Sync {
    /// The raw enddate line, or `None` when the source has nothing to report.
    ///
    /// # Errors
    ///
    /// Will return `Err` on failures the caller must not paper over
    async fn enddate(&self, certificate: &Path) -> Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Parse the PEM file in-process
    #[default]
    X509,
    /// Ask `openssl x509 -enddate`
    Openssl,
}

#[must_use]
pub fn for_backend(backend: Backend, openssl: PathBuf) -> Box<dyn EnddateSource> {
    match backend {
        Backend::X509 => Box::new(x509::X509Source),
        Backend::Openssl => Box::new(process::OpensslSource::new(openssl)),
    }
}
