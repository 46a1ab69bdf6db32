//! Dispatches generation calls onto their own runtime task.

use crate::error::ProviderError;
use crate::traits::GenerativeClient;
use crate::types::{GenerationOutput, GenerationParams, GenerationRequest, GenerationResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Runs generation requests against a [`GenerativeClient`].
///
/// Each call is spawned on the tokio runtime and awaited through its join
/// handle, so the interaction task only parks while the provider works.
/// Calls are never retried or cancelled.
#[derive(Clone)]
pub struct Generator {
    client: Arc<dyn GenerativeClient>,
}

impl Generator {
    /// Creates a generator backed by `client`.
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Executes `request`, measuring elapsed time from dispatch.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ProviderError> {
        let client = Arc::clone(&self.client);
        let prompt = request.prompt.clone();
        let params = request.params.clone();
        let started = Instant::now();

        let handle = tokio::spawn(async move {
            match params {
                GenerationParams::Text(params) => client
                    .complete(&prompt, &params)
                    .await
                    .map(GenerationOutput::Text),
                GenerationParams::Image(params) => client
                    .create_image(&prompt, &params)
                    .await
                    .map(GenerationOutput::Image),
            }
        });

        let output = handle.await??;
        let elapsed = started.elapsed();
        debug!(
            command = %request.command,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Generation finished"
        );

        Ok(GenerationResult { output, elapsed })
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("client", &"<GenerativeClient>")
            .finish()
    }
}
