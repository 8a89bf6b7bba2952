use poise::PrefixFrameworkOptions;
use tracing::trace;

use crate::{
    commands,
    errors::{self, CommandError},
};

use super::data::PoiseData;

pub fn build(data: PoiseData) -> poise::Framework<PoiseData, CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            prefix_options: PrefixFrameworkOptions {
                prefix: data.config().bot.prefix().map(ToOwned::to_owned),
                ..Default::default()
            },
            on_error: errors::handle_framework_error,
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                let http = ctx.http.clone();

                let commands = framework.options().commands.as_ref();

                if let Some(guild_id) = data.config().bot.testing_server() {
                    poise::builtins::register_in_guild(&http, commands, *guild_id)
                        .await
                        .expect("registering commands in guild should not fail");
                }

                poise::builtins::register_globally(&http, commands)
                    .await
                    .expect("registering commands globally should not fail");

                trace!("finished setup, accepting commands");

                Ok(data)
            })
        })
        .build()
}
