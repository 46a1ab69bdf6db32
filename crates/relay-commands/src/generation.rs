//! Shared body of the generation commands.

use crate::error::CommandError;
use crate::framework::Context;
use crate::reply::Reply;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use relay_openai::{GenerationRequest, Generator};
use tracing::{error, info};

/// Runs `request` and formats the outcome. Provider failures become an
/// ephemeral error reply; this never fails.
pub async fn generate_reply(generator: &Generator, request: &GenerationRequest, author: &str) -> Reply {
    match generator.generate(request).await {
        Ok(result) => {
            info!("{} ran /{}: {}", author, request.command, request.prompt);
            Reply::generation(&request.prompt, &result)
        }
        Err(err) => {
            error!("/{} failed for {}: {}", request.command, author, err);
            Reply::provider_error(&err)
        }
    }
}

/// The answer side of an interaction that has already been deferred.
#[async_trait]
pub trait DeferredResponse: Send {
    /// Deletes the public "thinking" placeholder.
    async fn delete_placeholder(&mut self) -> Result<(), serenity::Error>;

    /// Sends `reply` as a follow-up.
    async fn follow_up(&mut self, reply: Reply) -> Result<(), serenity::Error>;
}

/// Sends `reply` after a defer.
///
/// Discord turns the first follow-up into an edit of the deferred
/// placeholder and drops its ephemeral flag, so ephemeral replies remove
/// the placeholder first and go out as a fresh private message.
pub async fn deliver<R>(response: &mut R, reply: Reply) -> Result<(), serenity::Error>
where
    R: DeferredResponse + ?Sized,
{
    if reply.ephemeral {
        response.delete_placeholder().await?;
    }
    response.follow_up(reply).await
}

struct Interaction<'a> {
    ctx: Context<'a>,
}

#[async_trait]
impl<'a> DeferredResponse for Interaction<'a> {
    async fn delete_placeholder(&mut self) -> Result<(), serenity::Error> {
        if let poise::Context::Application(app) = self.ctx {
            app.interaction
                .delete_response(self.ctx.serenity_context())
                .await?;
        }
        Ok(())
    }

    async fn follow_up(&mut self, reply: Reply) -> Result<(), serenity::Error> {
        self.ctx.send(reply.into()).await?;
        Ok(())
    }
}

/// Defers the interaction, runs `request` and sends the result.
pub async fn run_generation(ctx: Context<'_>, request: GenerationRequest) -> Result<(), CommandError> {
    ctx.defer().await?;

    let reply = generate_reply(&ctx.data().generator, &request, &ctx.author().name).await;
    deliver(&mut Interaction { ctx }, reply).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_openai::ProviderError;

    #[derive(Debug, PartialEq, Eq)]
    enum Step {
        Deleted,
        Sent { ephemeral: bool },
    }

    #[derive(Default)]
    struct Recorder {
        steps: Vec<Step>,
    }

    #[async_trait]
    impl DeferredResponse for Recorder {
        async fn delete_placeholder(&mut self) -> Result<(), serenity::Error> {
            self.steps.push(Step::Deleted);
            Ok(())
        }

        async fn follow_up(&mut self, reply: Reply) -> Result<(), serenity::Error> {
            self.steps.push(Step::Sent {
                ephemeral: reply.ephemeral,
            });
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_error_reply_replaces_placeholder() {
        let mut recorder = Recorder::default();
        let reply = Reply::provider_error(&ProviderError::Empty("image URL"));

        deliver(&mut recorder, reply).await.unwrap();

        assert_eq!(
            recorder.steps,
            [Step::Deleted, Step::Sent { ephemeral: true }]
        );
    }

    #[tokio::test]
    async fn test_public_reply_keeps_placeholder() {
        let mut recorder = Recorder::default();
        let reply = Reply::notice("done");
        let public = Reply {
            ephemeral: false,
            ..reply
        };

        deliver(&mut recorder, public).await.unwrap();

        assert_eq!(recorder.steps, [Step::Sent { ephemeral: false }]);
    }
}
