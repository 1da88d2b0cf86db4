use clap::Parser;
use snakeoil::config::{Args, Command, DEFAULT_LOG_FILTER};
use snakeoil::openssl::{SnakeoilFiles, SnakeoilOpenssl};
use snakeoil::snakeoil_date::SnakeoilDate;
use snakeoil::source;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let json = match args.command {
        Command::Date {
            directory,
            domain,
            pattern,
            backend,
        } => {
            let source = source::for_backend(backend, args.openssl);
            let result = SnakeoilDate::new(&directory, &domain, &pattern, source)?
                .run()
                .await?;
            debug!("= result : '{:?}'", result);
            serde_json::to_string(&result)?
        }
        Command::Openssl {
            state,
            directory,
            domain,
            dhparam,
            cert_life_time,
            openssl_config,
        } => {
            let snakeoil = SnakeoilOpenssl {
                openssl: args.openssl,
                files: SnakeoilFiles::new(&directory, &domain),
                dhparam,
                cert_life_time,
                openssl_config,
            };
            let result = snakeoil.run(state).await?;
            debug!("= result : '{:?}'", result);
            serde_json::to_string(&result)?
        }
    };

    println!("{json}");
    Ok(())
}
