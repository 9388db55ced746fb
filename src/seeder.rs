use crate::{
    certificate_table::{CertificateRecord, CertificateTable},
    errors::SeedError,
};
use aws_sdk_dynamodb::operation::put_item::PutItemOutput;
use log::info;
use std::path::Path;

/// Reads the certificate and key files and upserts them under `hostname`.
///
/// Both files are read before the store is contacted, so a bad path never
/// results in a write. The raw store response is logged and returned.
pub async fn seed(
    table: &CertificateTable,
    hostname: &str,
    cert_path: impl AsRef<Path>,
    key_path: impl AsRef<Path>,
) -> Result<PutItemOutput, SeedError> {
    let record = CertificateRecord::from_files(hostname, cert_path, key_path)?;

    info!("Adding item...");
    let output = table.put(&record).await?;

    info!("{}", created_message(&output));

    Ok(output)
}

fn created_message(output: &PutItemOutput) -> String {
    format!("DynamoDB table item created: {output:#?}")
}
