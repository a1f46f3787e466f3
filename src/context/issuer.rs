//! Credential issuance port used by `new`.
//!
//! The network client that talks to the API lives outside this crate. It is
//! expected to return the raw store payloads from the issuing service plus the
//! endpoints and nodes it was configured with.

use crate::error::ApiError;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfigRequest {
    /// Role names, already validated
    pub roles: Vec<String>,
    pub crt_ttl: Duration,
}

pub trait CredentialIssuer {
    /// Endpoints the client used to reach the issuing service.
    fn endpoints(&self) -> Vec<String>;

    /// Nodes the request is addressed to.
    fn target_nodes(&self) -> Vec<String>;

    /// One payload per responding node, each an encoded store.
    fn generate_client_configuration(
        &self,
        request: &ClientConfigRequest,
    ) -> Result<Vec<Vec<u8>>, ApiError>;
}

/// Issuer for builds without a network client.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableIssuer;

impl CredentialIssuer for UnavailableIssuer {
    fn endpoints(&self) -> Vec<String> {
        Vec::new()
    }

    fn target_nodes(&self) -> Vec<String> {
        Vec::new()
    }

    fn generate_client_configuration(
        &self,
        _request: &ClientConfigRequest,
    ) -> Result<Vec<Vec<u8>>, ApiError> {
        Err(ApiError::IssuerUnavailable(
            "no API client is configured for this build".to_string(),
        ))
    }
}
