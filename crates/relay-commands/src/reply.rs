//! Reply formatting for command results and failures.

use crate::access::INSUFFICIENT_PERMISSIONS;
use poise::serenity_prelude as serenity;
use relay_common::{format_elapsed, format_retry_after, truncate_chars};
use relay_openai::{GenerationOutput, GenerationResult, ProviderError};
use std::time::Duration;

/// Discord's limit on embed descriptions.
pub const DESCRIPTION_LIMIT: usize = 4096;
/// Discord's limit on embed field values.
pub const FIELD_VALUE_LIMIT: usize = 1024;
/// Discord's limit on embed titles.
pub const TITLE_LIMIT: usize = 256;

/// A field inside an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Whether the field renders inline.
    pub inline: bool,
}

/// Embed payload, kept independent of serenity's builder so it can be
/// inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReply {
    /// Title line.
    pub title: Option<String>,
    /// Body text.
    pub description: Option<String>,
    /// Fields below the body.
    pub fields: Vec<EmbedField>,
    /// Footer text.
    pub footer: Option<String>,
    /// Image URL.
    pub image_url: Option<String>,
    /// Side colour.
    pub colour: serenity::Colour,
}

impl EmbedReply {
    fn new(colour: serenity::Colour) -> Self {
        Self {
            title: None,
            description: None,
            fields: Vec::new(),
            footer: None,
            image_url: None,
            colour,
        }
    }
}

/// A message sent back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Plain text content.
    pub content: Option<String>,
    /// Embed payload.
    pub embed: Option<EmbedReply>,
    /// Visible only to the caller.
    pub ephemeral: bool,
}

impl Reply {
    /// Formats a successful generation.
    #[must_use]
    pub fn generation(prompt: &str, result: &GenerationResult) -> Self {
        let mut embed = EmbedReply::new(serenity::Colour::BLUE);
        embed.footer = Some(format!("Processed in {}", format_elapsed(result.elapsed)));

        match &result.output {
            GenerationOutput::Text(text) => {
                embed.description = Some(truncate_chars(
                    &format!("Answer:\n{text}"),
                    DESCRIPTION_LIMIT,
                ));
                embed.fields.push(EmbedField {
                    name: "Prompt:".to_string(),
                    value: truncate_chars(prompt, FIELD_VALUE_LIMIT),
                    inline: false,
                });
            }
            GenerationOutput::Image(url) => {
                embed.title = Some(truncate_chars(
                    &format!("Generated image: {prompt}"),
                    TITLE_LIMIT,
                ));
                embed.image_url = Some(url.clone());
            }
        }

        Self {
            content: None,
            embed: Some(embed),
            ephemeral: false,
        }
    }

    /// Formats a failed provider call.
    #[must_use]
    pub fn provider_error(error: &ProviderError) -> Self {
        Self::ephemeral_text(format!("Error: {error}"))
    }

    /// Formats a cooldown rejection.
    #[must_use]
    pub fn cooldown(retry_after: Duration) -> Self {
        Self::error_embed(format!(
            "Cooldown: retry after {}s",
            format_retry_after(retry_after)
        ))
    }

    /// Formats a missing Discord permission.
    #[must_use]
    pub fn insufficient_permissions() -> Self {
        Self::error_embed(INSUFFICIENT_PERMISSIONS.to_string())
    }

    /// Formats an access-gate denial.
    #[must_use]
    pub fn denied(reason: &str) -> Self {
        Self::ephemeral_text(reason.to_string())
    }

    /// A private confirmation or notice.
    #[must_use]
    pub fn notice(text: impl Into<String>) -> Self {
        Self::ephemeral_text(text.into())
    }

    fn ephemeral_text(content: String) -> Self {
        Self {
            content: Some(content),
            embed: None,
            ephemeral: true,
        }
    }

    fn error_embed(description: String) -> Self {
        let mut embed = EmbedReply::new(serenity::Colour::RED);
        embed.description = Some(description);
        Self {
            content: None,
            embed: Some(embed),
            ephemeral: true,
        }
    }
}

impl From<EmbedReply> for serenity::CreateEmbed {
    fn from(embed: EmbedReply) -> Self {
        let mut builder = Self::new().colour(embed.colour);
        if let Some(title) = embed.title {
            builder = builder.title(title);
        }
        if let Some(description) = embed.description {
            builder = builder.description(description);
        }
        for field in embed.fields {
            builder = builder.field(field.name, field.value, field.inline);
        }
        if let Some(footer) = embed.footer {
            builder = builder.footer(serenity::CreateEmbedFooter::new(footer));
        }
        if let Some(url) = embed.image_url {
            builder = builder.image(url);
        }
        builder
    }
}

impl From<Reply> for poise::CreateReply {
    fn from(reply: Reply) -> Self {
        let mut builder = Self::default().ephemeral(reply.ephemeral);
        if let Some(content) = reply.content {
            builder = builder.content(content);
        }
        if let Some(embed) = reply.embed {
            builder = builder.embed(embed.into());
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_result(text: &str, elapsed: Duration) -> GenerationResult {
        GenerationResult {
            output: GenerationOutput::Text(text.to_string()),
            elapsed,
        }
    }

    #[test]
    fn test_text_answer_layout() {
        let reply = Reply::generation(
            "hello",
            &text_result("Hi! How can I help?", Duration::from_millis(1500)),
        );
        let embed = reply.embed.unwrap();

        assert!(!reply.ephemeral);
        assert_eq!(embed.description.as_deref(), Some("Answer:\nHi! How can I help?"));
        assert_eq!(
            embed.fields,
            vec![EmbedField {
                name: "Prompt:".to_string(),
                value: "hello".to_string(),
                inline: false,
            }]
        );
        assert_eq!(embed.footer.as_deref(), Some("Processed in 0:00:01"));
        assert_eq!(embed.colour, serenity::Colour::BLUE);
    }

    #[test]
    fn test_image_layout() {
        let result = GenerationResult {
            output: GenerationOutput::Image("https://img.example/cat.png".to_string()),
            elapsed: Duration::from_secs(65),
        };
        let embed = Reply::generation("a cat", &result).embed.unwrap();

        assert_eq!(embed.title.as_deref(), Some("Generated image: a cat"));
        assert_eq!(embed.image_url.as_deref(), Some("https://img.example/cat.png"));
        assert_eq!(embed.footer.as_deref(), Some("Processed in 0:01:05"));
        assert!(embed.fields.is_empty());
    }

    #[test]
    fn test_long_answer_fits_embed() {
        let long = "a".repeat(10_000);
        let embed = Reply::generation("p", &text_result(&long, Duration::ZERO))
            .embed
            .unwrap();

        assert_eq!(embed.description.unwrap().chars().count(), DESCRIPTION_LIMIT);
    }

    #[test]
    fn test_provider_error_is_private_text() {
        let reply = Reply::provider_error(&ProviderError::Empty("image URL"));

        assert!(reply.ephemeral);
        assert!(reply.embed.is_none());
        assert_eq!(reply.content.as_deref(), Some("Error: provider returned no image URL"));
    }

    #[test]
    fn test_permission_reply() {
        let reply = Reply::insufficient_permissions();
        let embed = reply.embed.unwrap();

        assert!(reply.ephemeral);
        assert_eq!(embed.description.as_deref(), Some("Insufficient permissions"));
        assert_eq!(embed.colour, serenity::Colour::RED);
    }
}
