mod record;
pub use self::record::CertificateRecord;

use crate::errors::PutError;
use aws_sdk_dynamodb::{error::DisplayErrorContext, operation::put_item::PutItemOutput, Client};
use log::debug;

/// Handle on the table the TLS router loads its certificates from.
pub struct CertificateTable {
    db: Client,
    table_name: String,
}

impl CertificateTable {
    pub fn new(db: Client, table_name: impl Into<String>) -> Self {
        Self {
            db,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Writes `record`, replacing any item with the same hostname.
    pub async fn put(&self, record: &CertificateRecord) -> Result<PutItemOutput, PutError> {
        let item = record.to_item()?;

        debug!("PUT {} into {}", record.hostname, self.table_name);

        self.db
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| PutError::Aws(DisplayErrorContext(&e).to_string()))
    }
}
