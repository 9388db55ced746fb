use std::path::PathBuf;
use thiserror::Error;

/// Error returned by [`CertificateTable::put`](crate::CertificateTable::put) when writing a record to DynamoDB
#[derive(Error, Debug)]
pub enum PutError {
    #[error("AwsError: {0}")]
    Aws(String),
    #[error("SerializeError: {0}")]
    Serialize(#[from] serde_dynamo::Error),
}

/// Error returned by [`seed`](crate::seed)
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("PutError: {0}")]
    Put(#[from] PutError),
}

impl SeedError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
