use crate::command::exec;
use crate::error::Result;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum State {
    /// New private key and certificate signing request
    Csr,
    /// Self-sign the request and bundle certificate and key
    Crt,
    /// Diffie-Hellman parameters
    Dhparam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpensslResult {
    pub failed: bool,
    pub changed: bool,
    pub msg: String,
}

impl OpensslResult {
    fn success() -> Self {
        Self {
            failed: false,
            changed: true,
            msg: "success".to_string(),
        }
    }

    fn failure(msg: String) -> Self {
        Self {
            failed: true,
            changed: false,
            msg,
        }
    }
}

/// The files kept under `<directory>/<domain>/`
#[derive(Debug, Clone)]
pub struct SnakeoilFiles {
    pub base: PathBuf,
    pub csr: PathBuf,
    pub crt: PathBuf,
    pub pem: PathBuf,
    pub key: PathBuf,
    pub dh: PathBuf,
}

impl SnakeoilFiles {
    #[must_use]
    pub fn new(directory: &Path, domain: &str) -> Self {
        let base = directory.join(domain);
        Self {
            csr: base.join(format!("{domain}.csr")),
            crt: base.join(format!("{domain}.crt")),
            pem: base.join(format!("{domain}.pem")),
            key: base.join(format!("{domain}.key")),
            dh: base.join("dh.pem"),
            base,
        }
    }
}

pub struct SnakeoilOpenssl {
    pub openssl: PathBuf,
    pub files: SnakeoilFiles,
    pub dhparam: u32,
    pub cert_life_time: u32,
    pub openssl_config: Option<PathBuf>,
}

impl SnakeoilOpenssl {
    /// Arguments handed to `openssl` for `state`
    #[must_use]
    pub fn args(&self, state: State) -> Vec<OsString> {
        let files = &self.files;
        let mut args: Vec<OsString> = Vec::new();
        match state {
            State::Csr => {
                args.extend(["req", "-new", "-sha512", "-nodes", "-out"].map(OsString::from));
                args.push(files.csr.clone().into());
                args.extend(["-newkey", "rsa:4096", "-keyout"].map(OsString::from));
                args.push(files.key.clone().into());
                if let Some(config) = &self.openssl_config {
                    args.push("-config".into());
                    args.push(config.clone().into());
                }
            }
            State::Crt => {
                args.extend(["x509", "-req", "-in"].map(OsString::from));
                args.push(files.csr.clone().into());
                args.push("-out".into());
                args.push(files.crt.clone().into());
                args.push("-signkey".into());
                args.push(files.key.clone().into());
                args.push("-days".into());
                args.push(self.cert_life_time.to_string().into());
            }
            State::Dhparam => {
                args.extend(["dhparam", "-5", "-out"].map(OsString::from));
                args.push(files.dh.clone().into());
                args.push(self.dhparam.to_string().into());
            }
        }
        args
    }

    /// # Errors
    ///
    /// Will return `Err` if `openssl` cannot be spawned or the pem bundle
    /// cannot be written
    pub async fn run(&self, state: State) -> Result<OpensslResult> {
        if !self.files.base.is_dir() {
            return Ok(OpensslResult::failure(format!(
                "missing directory {}",
                self.files.base.display()
            )));
        }

        let out = exec(&self.openssl, self.args(state), Some(&self.files.base)).await?;
        if !out.success() {
            let stderr = out.stderr.trim();
            warn!("openssl {:?} failed with {}", state, out.exit_code);
            let msg = if stderr.is_empty() {
                format!("openssl exited with {}", out.exit_code)
            } else {
                stderr.to_string()
            };
            return Ok(OpensslResult::failure(msg));
        }

        if state == State::Crt {
            self.bundle().await?;
        }

        Ok(OpensslResult::success())
    }

    /// `<domain>.pem` = `<domain>.crt` followed by `<domain>.key`
    async fn bundle(&self) -> Result<()> {
        let mut pem = tokio::fs::read(&self.files.crt).await?;
        pem.extend(tokio::fs::read(&self.files.key).await?);
        tokio::fs::write(&self.files.pem, pem).await?;
        info!("wrote {}", self.files.pem.display());
        Ok(())
    }
}
