//! Request and result types shared with command handlers.

use relay_config::{ImageModelConfig, TextModelConfig};
use std::time::Duration;

/// Fixed parameters chosen by the issuing command.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationParams {
    /// Text completion parameters.
    Text(TextModelConfig),
    /// Image generation parameters.
    Image(ImageModelConfig),
}

/// One generation call issued by a command.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Qualified name of the issuing command.
    pub command: String,
    /// User-supplied prompt.
    pub prompt: String,
    /// Fixed parameters for the call.
    pub params: GenerationParams,
}

impl GenerationRequest {
    /// Builds a text completion request.
    pub fn text(
        command: impl Into<String>,
        prompt: impl Into<String>,
        params: TextModelConfig,
    ) -> Self {
        Self {
            command: command.into(),
            prompt: prompt.into(),
            params: GenerationParams::Text(params),
        }
    }

    /// Builds an image generation request.
    pub fn image(
        command: impl Into<String>,
        prompt: impl Into<String>,
        params: ImageModelConfig,
    ) -> Self {
        Self {
            command: command.into(),
            prompt: prompt.into(),
            params: GenerationParams::Image(params),
        }
    }
}

/// What the provider produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutput {
    /// Completion text.
    Text(String),
    /// URL of the generated image.
    Image(String),
}

/// A finished generation with its wall-clock duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Provider output.
    pub output: GenerationOutput,
    /// Time from dispatch to completion.
    pub elapsed: Duration,
}
