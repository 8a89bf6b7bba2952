use poise::{serenity_prelude as serenity, BoxFuture, Context, FrameworkError};

use thiserror::Error as ThisError;
use tracing::{error, error_span, Instrument};
use tracing_unwrap::ResultExt;

use crate::{utils::poise::ContextExt, PoiseData};

pub fn handle_framework_error(err: FrameworkError<'_, PoiseData, CommandError>) -> BoxFuture<()> {
    Box::pin(async {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);
                let _enter = span.enter();

                handle_error(error, ctx).in_current_span().await;
            }
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ctx,
                ..
            } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);
                let _enter = span.enter();

                error!(%missing_permissions, "bot is missing permissions");
            }
            _ => {
                poise::builtins::on_error(err)
                    .await
                    .expect_or_log("failed to handle framework error");
            }
        };
    })
}

async fn handle_error(err: CommandError, ctx: Context<'_, PoiseData, CommandError>) {
    error!("{err}");
    ctx.reply_ephemeral(err.to_string())
        .await
        .expect("sending error message should not fail");
}

#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("other serenity error: {0}")]
    Serenity(#[from] serenity::Error),

    #[error("backend request error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
