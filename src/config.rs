/**
 * Command line configuration
 */
use crate::expiry::DEFAULT_PATTERN;
use crate::openssl::State;
use crate::source::Backend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default size in bits of generated Diffie-Hellman parameters
pub const DEFAULT_DHPARAM_BITS: u32 = 1024;

/// Default validity in days of a self-signed certificate
pub const DEFAULT_CERT_LIFE_TIME_DAYS: u32 = 10;

/// Default OpenSSL binary, resolved through `PATH`
pub const DEFAULT_OPENSSL: &str = "openssl";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// OpenSSL binary to run
    #[arg(long, global = true, default_value = DEFAULT_OPENSSL)]
    pub openssl: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report when the snakeoil certificate of a domain expires
    Date {
        /// Directory holding one sub-directory per domain
        #[arg(short, long)]
        directory: PathBuf,

        /// Domain, also the certificate's file name
        #[arg(long)]
        domain: String,

        /// strftime pattern for `expire_date`
        #[arg(short, long, default_value = DEFAULT_PATTERN)]
        pattern: String,

        /// How the certificate is read
        #[arg(short, long, value_enum, default_value_t = Backend::default())]
        backend: Backend,
    },

    /// Create a CSR, a self-signed certificate, or DH parameters
    Openssl {
        #[arg(value_enum)]
        state: State,

        /// Directory holding one sub-directory per domain
        #[arg(short, long)]
        directory: PathBuf,

        /// Domain, also the base name of every generated file
        #[arg(long)]
        domain: String,

        /// Size of the Diffie-Hellman parameters in bits
        #[arg(long, default_value_t = DEFAULT_DHPARAM_BITS)]
        dhparam: u32,

        /// Validity of the certificate in days
        #[arg(long, default_value_t = DEFAULT_CERT_LIFE_TIME_DAYS)]
        cert_life_time: u32,

        /// `openssl req` configuration file
        #[arg(long)]
        openssl_config: Option<PathBuf>,
    },
}

/// Validate configuration constants at compile time
const _: () = {
    assert!(DEFAULT_DHPARAM_BITS > 0, "DEFAULT_DHPARAM_BITS must be greater than 0");
    assert!(DEFAULT_CERT_LIFE_TIME_DAYS > 0, "DEFAULT_CERT_LIFE_TIME_DAYS must be greater than 0");
};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_date_defaults() {
        let args =
            Args::try_parse_from(["snakeoil", "date", "-d", "/etc/snakeoil", "--domain", "a.test"])
                .unwrap();
        assert_eq!(args.openssl, PathBuf::from("openssl"));
        match args.command {
            Command::Date { pattern, backend, .. } => {
                assert_eq!(pattern, "%Y-%m-%dT%H:%M:%S");
                assert_eq!(backend, Backend::X509);
            }
            Command::Openssl { .. } => panic!("expected date"),
        }
    }

    #[test]
    fn test_openssl_defaults() {
        let args = Args::try_parse_from([
            "snakeoil", "openssl", "crt", "-d", "/etc/snakeoil", "--domain", "a.test",
        ])
        .unwrap();
        match args.command {
            Command::Openssl { state, dhparam, cert_life_time, openssl_config, .. } => {
                assert_eq!(state, State::Crt);
                assert_eq!(dhparam, 1024);
                assert_eq!(cert_life_time, 10);
                assert!(openssl_config.is_none());
            }
            Command::Date { .. } => panic!("expected openssl"),
        }
    }

    #[test]
    fn test_unknown_state_rejected() {
        let result = Args::try_parse_from([
            "snakeoil", "openssl", "pfx", "-d", "/etc/snakeoil", "--domain", "a.test",
        ]);
        assert!(result.is_err());
    }
}
