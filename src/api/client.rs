use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use super::{ApiError, DraftRecord, ModelRecord, ModelsApi};
use crate::config::Config;
use crate::constants::{CLIENT_USER_AGENT, CREATE_MODEL_PATH, LIST_MODELS_PATH};

/// HTTP client for the models API.
///
/// Each call is a single attempt. No timeout is set, so requests rely on the
/// transport defaults.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    list_url: Url,
    create_url: Url,
}

impl ApiClient {
    /// Build a client from the API settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or auth token is malformed, or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = config.api_auth_token.as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidAuthToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .default_headers(headers)
            .build()?;

        Self::with_client(client, &config.api_base_url)
    }

    /// Use an existing reqwest client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let base = base_url.trim_end_matches('/');
        Ok(Self {
            client,
            list_url: Url::parse(&format!("{base}/{LIST_MODELS_PATH}"))?,
            create_url: Url::parse(&format!("{base}/{CREATE_MODEL_PATH}"))?,
        })
    }

    #[must_use]
    pub fn list_url(&self) -> &Url {
        &self.list_url
    }

    #[must_use]
    pub fn create_url(&self) -> &Url {
        &self.create_url
    }
}

#[async_trait]
impl ModelsApi for ApiClient {
    async fn list_models(&self) -> Result<Vec<ModelRecord>, ApiError> {
        debug!(url = %self.list_url, "Fetching models");

        let response = self.client.get(self.list_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                endpoint: LIST_MODELS_PATH,
                status: status.as_u16(),
            });
        }

        let models: Vec<ModelRecord> = response.json().await?;
        debug!(count = models.len(), "Fetched models");
        Ok(models)
    }

    async fn create_model(&self, draft: &DraftRecord) -> Result<(), ApiError> {
        debug!(url = %self.create_url, title = %draft.title, "Creating model");

        let response = self
            .client
            .post(self.create_url.clone())
            .json(&draft.to_payload())
            .send()
            .await?;

        // Only an exact 200 counts; 201 and friends are failures too.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                endpoint: CREATE_MODEL_PATH,
                status: status.as_u16(),
            });
        }

        info!(title = %draft.title, "Model created");
        Ok(())
    }
}
