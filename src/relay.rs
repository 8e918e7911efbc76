use async_trait::async_trait;
use reqwest::Client;

use crate::contact::{ContactFields, SubmitError};

/// Hosted relay that forwards posted form fields by email.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/Shayan.ali.shahh@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
        }
    }
}

/// Delivers a validated contact message somewhere a human will read it.
///
/// Futures are not `Send`: in the browser they wrap JS promises.
#[async_trait(?Send)]
pub trait ContactRelay {
    async fn deliver(&self, fields: &ContactFields) -> Result<(), SubmitError>;
}

/// Posts the fields as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone)]
pub struct FormRelay {
    config: RelayConfig,
    client: Client,
}

impl FormRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl Default for FormRelay {
    fn default() -> Self {
        Self::new(RelayConfig::default())
    }
}

#[async_trait(?Send)]
impl ContactRelay for FormRelay {
    async fn deliver(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        log::debug!("posting contact form to {}", self.config.endpoint);
        let response = self
            .client
            .post(&self.config.endpoint)
            .form(fields)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Rejected(status))
        }
    }
}
