//! Integration tests for relay-openai crate.
//!
//! These exercise the generator through a hand-written client so the
//! off-task dispatch is observed without network access.

use async_trait::async_trait;
use relay_common::test_utils::init_test_logging;
use relay_config::{ImageModelConfig, TextModelConfig};
use relay_openai::{
    GenerationOutput, GenerationRequest, GenerativeClient, Generator, ProviderError,
};
use std::sync::Arc;
use std::time::Duration;

struct SlowClient {
    delay: Duration,
}

#[async_trait]
impl GenerativeClient for SlowClient {
    async fn complete(
        &self,
        prompt: &str,
        _params: &TextModelConfig,
    ) -> Result<String, ProviderError> {
        tokio::time::sleep(self.delay).await;
        Ok(prompt.to_uppercase())
    }

    async fn create_image(
        &self,
        _prompt: &str,
        _params: &ImageModelConfig,
    ) -> Result<String, ProviderError> {
        tokio::time::sleep(self.delay).await;
        Err(ProviderError::Empty("image URL"))
    }
}

#[tokio::test]
async fn test_elapsed_covers_provider_time() {
    init_test_logging();

    let generator = Generator::new(Arc::new(SlowClient {
        delay: Duration::from_millis(50),
    }));
    let request = GenerationRequest::text("ask babbage", "hello", TextModelConfig::default());
    let result = generator.generate(&request).await.unwrap();

    assert_eq!(result.output, GenerationOutput::Text("HELLO".to_string()));
    assert!(result.elapsed >= Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_generations_overlap() {
    let generator = Generator::new(Arc::new(SlowClient {
        delay: Duration::from_millis(200),
    }));
    let first = GenerationRequest::text("ask babbage", "a", TextModelConfig::default());
    let second = GenerationRequest::text("ask babbage", "b", TextModelConfig::default());

    let started = tokio::time::Instant::now();
    let (a, b) = tokio::join!(generator.generate(&first), generator.generate(&second));

    assert!(a.is_ok() && b.is_ok());
    let waited = started.elapsed();
    assert!(waited >= Duration::from_millis(200));
    assert!(waited < Duration::from_millis(400), "calls ran back to back: {waited:?}");
}

#[tokio::test]
async fn test_image_failure_is_returned() {
    let generator = Generator::new(Arc::new(SlowClient {
        delay: Duration::from_millis(1),
    }));
    let request = GenerationRequest::image("image generate", "cat", ImageModelConfig::default());
    let err = generator.generate(&request).await.unwrap_err();

    assert_eq!(err.to_string(), "provider returned no image URL");
}
