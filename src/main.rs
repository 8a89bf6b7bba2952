#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod commands;

mod errors;

mod modcase;

mod utils;

use poise::serenity_prelude::{self as serenity, GatewayIntents};

#[allow(unused_imports)]
use tracing::{debug, info, trace};

mod framework;
use framework::data::PoiseData;

type DiscordToken = String;

#[tokio::main]
async fn main() {
    framework::logging::init_tracing();

    info!("casebot {}", env!("CARGO_PKG_VERSION"));

    let data = PoiseData::new();
    let config = data.config().clone();

    let framework = framework::poise::build(data);

    let mut client = serenity::Client::builder(config.bot.token(), GatewayIntents::all())
        .framework(framework)
        .await
        .expect("client should be valid");

    client
        .start()
        .await
        .expect("client should not return error");
}
