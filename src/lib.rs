//! Seeds a hostname's TLS certificate and private key into the DynamoDB
//! table the router reads them from, for local and test environments.

pub mod certificate_table;
pub mod config;
pub mod errors;
mod seeder;

pub use certificate_table::{CertificateRecord, CertificateTable};
pub use config::SeederConfig;
pub use errors::{PutError, SeedError};
pub use seeder::seed;
