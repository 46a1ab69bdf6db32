//! Generative provider trait definitions.

use crate::error::ProviderError;
use async_trait::async_trait;
use relay_config::{ImageModelConfig, TextModelConfig};

/// A provider of text completions and images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Completes `prompt` and returns the first choice's text.
    async fn complete(
        &self,
        prompt: &str,
        params: &TextModelConfig,
    ) -> Result<String, ProviderError>;

    /// Generates an image for `prompt` and returns its URL.
    async fn create_image(
        &self,
        prompt: &str,
        params: &ImageModelConfig,
    ) -> Result<String, ProviderError>;
}
