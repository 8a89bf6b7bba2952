use poise::serenity_prelude::{GuildId, RoleId};
use serde::Deserialize;
use tracing_unwrap::OptionExt;
use url::Url;

use crate::DiscordToken;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub guilds: Vec<GuildEntry>,
}

impl Config {
    /// Token sent to the backend as the Authorization header. Deployments
    /// historically reuse the bot token when no separate backend
    /// credential is set.
    pub fn backend_token(&self) -> &str {
        self.backend.token().unwrap_or_else(|| self.bot.token())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct BotConfig {
    token: Option<DiscordToken>,
    pub testing_server: Option<GuildId>,
    prefix: Option<String>,
}

impl BotConfig {
    pub fn token(&self) -> &str {
        self.token
            .as_ref()
            .expect_or_log("no token in config or environment!")
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub const fn testing_server(&self) -> Option<&GuildId> {
        self.testing_server.as_ref()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct BackendConfig {
    url: Url,
    token: Option<String>,
    public_url: Option<Url>,
}

impl BackendConfig {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn public_url(&self) -> Option<&Url> {
        self.public_url.as_ref()
    }
}

/// A guild registered for moderation: its muted role, and the roles whose
/// holders may open cases.
#[derive(Deserialize, Debug, Clone)]
pub struct GuildEntry {
    id: GuildId,
    muted_role: Option<RoleId>,
    #[serde(default)]
    mod_roles: Vec<RoleId>,
    #[serde(default)]
    admin_roles: Vec<RoleId>,
}

impl GuildEntry {
    pub const fn id(&self) -> GuildId {
        self.id
    }

    pub const fn muted_role(&self) -> Option<RoleId> {
        self.muted_role
    }

    pub fn allows_roles(&self, roles: &[RoleId]) -> bool {
        roles
            .iter()
            .any(|role| self.mod_roles.contains(role) || self.admin_roles.contains(role))
    }
}
