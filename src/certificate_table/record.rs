use crate::errors::SeedError;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, fs, path::Path};

/// A hostname together with the PEM material the router serves for it.
/// `hostname` is the table's hash key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub hostname: String,
    pub cert: String,
    pub key: String,
}

impl CertificateRecord {
    pub fn new(
        hostname: impl Into<String>,
        cert: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            cert: cert.into(),
            key: key.into(),
        }
    }

    /// Reads both files in full. Contents are kept verbatim, empty files included.
    pub fn from_files(
        hostname: impl Into<String>,
        cert_path: impl AsRef<Path>,
        key_path: impl AsRef<Path>,
    ) -> Result<Self, SeedError> {
        let cert = read_text(cert_path.as_ref())?;
        let key = read_text(key_path.as_ref())?;

        Ok(Self::new(hostname, cert, key))
    }

    pub fn to_item(&self) -> Result<HashMap<String, AttributeValue>, serde_dynamo::Error> {
        serde_dynamo::to_item(self)
    }
}

// Keeps private keys out of logs and panic messages.
impl fmt::Debug for CertificateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateRecord")
            .field("hostname", &self.hostname)
            .field("cert", &format_args!("<{} bytes>", self.cert.len()))
            .field("key", &format_args!("<{} bytes>", self.key.len()))
            .finish()
    }
}

fn read_text(path: &Path) -> Result<String, SeedError> {
    fs::read_to_string(path).map_err(|e| SeedError::read(path, e))
}
