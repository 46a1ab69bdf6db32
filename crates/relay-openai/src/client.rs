//! HTTP client for the OpenAI completions and image endpoints.

use crate::error::ProviderError;
use crate::traits::GenerativeClient;
use crate::wire::{
    ApiErrorBody, CompletionRequest, CompletionResponse, ImageRequest, ImageResponse,
};
use async_trait::async_trait;
use relay_config::{ImageModelConfig, OpenAiConfig, TextModelConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// OpenAI API client with connection pooling.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Creates a client from configuration. The configured timeout is the
    /// only deadline applied to provider calls.
    pub fn new(config: &OpenAiConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        decode_response(status, &raw)
    }
}

/// Decodes a response body, turning non-success statuses into
/// [`ProviderError::Api`] with the API's own message when it sent one.
fn decode_response<R: DeserializeOwned>(
    status: reqwest::StatusCode,
    raw: &str,
) -> Result<R, ProviderError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(raw)
            .map(|body| body.error.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(raw)?)
}

fn first_completion(response: CompletionResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or(ProviderError::Empty("completion choices"))
}

fn first_image_url(response: ImageResponse) -> Result<String, ProviderError> {
    response
        .data
        .into_iter()
        .find_map(|image| image.url)
        .ok_or(ProviderError::Empty("image URL"))
}

#[async_trait]
impl GenerativeClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        params: &TextModelConfig,
    ) -> Result<String, ProviderError> {
        let body = CompletionRequest {
            model: &params.model,
            prompt,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            frequency_penalty: params.frequency_penalty,
            presence_penalty: params.presence_penalty,
        };
        let response: CompletionResponse = self.post("completions", &body).await?;
        first_completion(response)
    }

    async fn create_image(
        &self,
        prompt: &str,
        params: &ImageModelConfig,
    ) -> Result<String, ProviderError> {
        let body = ImageRequest {
            prompt,
            n: params.n,
            size: &params.size,
        };
        let response: ImageResponse = self.post("images/generations", &body).await?;
        first_image_url(response)
    }
}
