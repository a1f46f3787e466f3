//! ContextRecord: connection parameters for one named context.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One context: where to connect, which nodes to target, and the TLS material.
///
/// `ca`, `cert` and `key` hold base64-encoded PEM; an empty string means absent.
/// `cert` and `key` are either both present or both absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRecord {
    /// Addresses of the API, first one preferred
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// Target nodes for commands issued through this context
    #[serde(default)]
    pub nodes: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca: String,

    #[serde(default, rename = "crt", skip_serializing_if = "String::is_empty")]
    pub cert: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ContextRecord {
    /// Assemble a record from raw inputs, enforcing the cert/key pairing.
    pub fn from_parts(
        endpoints: Vec<String>,
        nodes: Vec<String>,
        ca: String,
        cert: String,
        key: String,
    ) -> Result<Self, ApiError> {
        let record = Self {
            endpoints,
            nodes,
            ca,
            cert,
            key,
            metadata: BTreeMap::new(),
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.cert.is_empty() != self.key.is_empty() {
            return Err(ApiError::InvalidRecord(
                "certificate and key must be provided together".to_string(),
            ));
        }
        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        !self.cert.is_empty()
    }
}
