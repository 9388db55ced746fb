use cert_seed::{seed, CertificateTable, SeedError, SeederConfig};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Adds a certificate and private key for HOSTNAME to the local encryption table.
///
/// The store endpoint defaults to http://localhost:4566 and can be changed
/// with LOCALSTACK_ENDPOINT_URL.
#[derive(Debug, Parser)]
#[command(name = "cert-seed", version, about, long_about)]
struct Cli {
    /// Hostname the certificate is served for
    hostname: String,
    /// Path to the PEM certificate (chain)
    cert_file: PathBuf,
    /// Path to the PEM private key
    key_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = SeederConfig::from_env();
    let sdk_config = config.load_sdk_config().await;
    let table = CertificateTable::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.table_name(),
    );

    match seed(&table, &cli.hostname, &cli.cert_file, &cli.key_file).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(e: &SeedError) -> String {
    match e {
        SeedError::Read { .. } => format!("Could not read the certificate or key: {e}"),
        SeedError::Put(_) => format!("Could not add the item to table: {e}"),
    }
}
