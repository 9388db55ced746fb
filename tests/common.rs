#![allow(dead_code)]

use aws_sdk_dynamodb::{
    config::{retry::RetryConfig, BehaviorVersion, Credentials, Region},
    types::{
        AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput,
        ScalarAttributeType,
    },
    Client, Config,
};
use cert_seed::{CertificateRecord, CertificateTable};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Set to the DynamoDB Local endpoint (usually `http://localhost:8000`) to
/// run the tests that need a live store.
pub const LOCAL_ENDPOINT_VAR: &str = "DYNAMODB_LOCAL_ENDPOINT";

/// Client for DynamoDB Local, or `None` when no endpoint is configured.
pub async fn local_client() -> Option<Client> {
    let Ok(endpoint) = std::env::var(LOCAL_ENDPOINT_VAR) else {
        eprintln!("{LOCAL_ENDPOINT_VAR} is not set, skipping live store test");
        return None;
    };

    let config = aws_config::from_env()
        .endpoint_url(endpoint)
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("local", "local", None, None, "local"))
        .load()
        .await;

    Some(Client::new(&config))
}

/// A table whose endpoint refuses every connection.
pub fn unreachable_table() -> CertificateTable {
    let config = Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .endpoint_url("http://127.0.0.1:1")
        .credentials_provider(Credentials::new("test", "test", None, None, "test"))
        .retry_config(RetryConfig::disabled())
        .build();

    CertificateTable::new(Client::from_conf(config), "certificates")
}

pub async fn create_table(client: &Client, table_name: &str) {
    let _ = client.delete_table().table_name(table_name).send().await;

    client
        .create_table()
        .table_name(table_name)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("hostname")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .expect("Failed to build attribute definition"),
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("hostname")
                .key_type(KeyType::Hash)
                .build()
                .expect("Failed to build key schema element"),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(5)
                .write_capacity_units(5)
                .build()
                .expect("Failed to build provisioned throughput"),
        )
        .send()
        .await
        .expect("Failed to create table");
}

pub async fn item_count(client: &Client, table_name: &str) -> usize {
    client
        .scan()
        .table_name(table_name)
        .send()
        .await
        .expect("Failed to scan table")
        .items()
        .len()
}

pub async fn get_record(
    client: &Client,
    table_name: &str,
    hostname: &str,
) -> Option<CertificateRecord> {
    client
        .get_item()
        .table_name(table_name)
        .key("hostname", AttributeValue::S(hostname.to_string()))
        .consistent_read(true)
        .send()
        .await
        .expect("Failed to get item")
        .item
        .map(|item| serde_dynamo::from_item(item).expect("Failed to read item"))
}

pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[macro_export]
macro_rules! assert_err {
    ($cond:expr,) => {
        $crate::assert_err!($cond);
    };
    ($cond:expr) => {
        match $cond {
            Ok(t) => {
                panic!("assertion failed, expected Err(..), got Ok({:?})", t);
            },
            Err(e) => e,
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        match $cond {
            Ok(t) => {
                panic!("assertion failed, expected Err(..), got Ok({:?}): {}", t, format_args!($($arg)+));
            },
            Err(e) => e,
        }
    };
}
