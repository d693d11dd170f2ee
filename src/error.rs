use std::sync::Arc;

use thiserror::Error;

/// Failure reported by a [`RegistryClient`](crate::registry::client::RegistryClient)
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {status}: {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid registry URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// The request never completed, as opposed to the registry answering
    /// with a non-success status or an unreadable body
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Timeout(_))
    }
}

/// Error surfaced by the registry facade
///
/// Cloneable so that one failed load can be handed to every caller waiting
/// on the same key.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("Components registry is unavailable: {0}")]
    Unavailable(#[source] Arc<ClientError>),

    #[error("Components registry request failed: {0}")]
    Request(#[source] Arc<ClientError>),

    #[error("Lock poisoned")]
    LockPoisoned,
}

impl From<ClientError> for RegistryError {
    fn from(error: ClientError) -> Self {
        if error.is_transport() {
            RegistryError::Unavailable(Arc::new(error))
        } else {
            RegistryError::Request(Arc::new(error))
        }
    }
}
