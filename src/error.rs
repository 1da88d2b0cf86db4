use derive_more::From;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    #[from]
    Json(serde_json::Error),

    #[from]
    Io(std::io::Error),

    #[from]
    Regex(regex::Error),

    #[from]
    Pem(x509_parser::error::PEMError),

    #[from]
    X509(x509_parser::nom::Err<x509_parser::error::X509Error>),

    /// Three-letter month abbreviation outside the month table
    UnrecognizedMonth(String),

    /// PEM file without a `CERTIFICATE` block
    MissingCertificate(PathBuf),

    /// Custom error message
    Custom(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::UnrecognizedMonth(month) => write!(fmt, "unrecognized month '{month}'"),
            Self::MissingCertificate(path) => {
                write!(fmt, "no certificate found in {}", path.display())
            }
            Self::Custom(msg) => write!(fmt, "{msg}"),
            _ => write!(fmt, "{self:?}"),
        }
    }
}

impl std::error::Error for Error {}
