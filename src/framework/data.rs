use std::sync::Arc;

use tracing::{info, warn};
use tracing_unwrap::ResultExt;

use crate::modcase::ModCaseClient;

use super::{
    gate::{ConfigGate, ModerationGate},
    Config,
};

#[derive(Clone)]
pub struct PoiseData {
    config: Config,
    modcase: ModCaseClient,
    gate: Arc<dyn ModerationGate>,
}

impl PoiseData {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let config_file = if let Ok(path) = std::env::var("CASEBOT_TOML") {
            info!(path, "looking for config file with CASEBOT_TOML...");
            path
        } else {
            let path = "./casebot.toml".to_owned();
            warn!(path, "CASEBOT_TOML env unset, using default path");
            path
        };

        let config: Config = ::config::Config::builder()
            .add_source(::config::File::new(&config_file, ::config::FileFormat::Toml))
            .build()
            .expect_or_log("config file could not be loaded")
            .try_deserialize()
            .expect_or_log("configuration could not be parsed");

        info!("config loaded");

        let modcase = ModCaseClient::new(config.backend.url().clone(), config.backend_token());

        let gate = Arc::new(ConfigGate::new(config.guilds.clone()));

        Self {
            config,
            modcase,
            gate,
        }
    }

    pub(crate) const fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) const fn modcase(&self) -> &ModCaseClient {
        &self.modcase
    }

    pub(crate) fn gate(&self) -> &dyn ModerationGate {
        self.gate.as_ref()
    }
}
