use poise::serenity_prelude::{GuildId, RoleId};

use crate::{errors::CommandError, utils::Context};

use super::config::GuildEntry;

/// Whether a caller may use moderation commands in a guild.
///
/// Guild registration really lives in the backend's own storage; keeping
/// the check behind a trait lets commands run against any implementation.
pub trait ModerationGate: Send + Sync {
    fn allows(&self, guild: GuildId, roles: &[RoleId]) -> bool;
}

/// Gate backed by the `[[guilds]]` table of the config file.
#[derive(Debug, Clone)]
pub struct ConfigGate {
    guilds: Vec<GuildEntry>,
}

impl ConfigGate {
    pub fn new(guilds: Vec<GuildEntry>) -> Self {
        Self { guilds }
    }
}

impl ModerationGate for ConfigGate {
    fn allows(&self, guild: GuildId, roles: &[RoleId]) -> bool {
        self.guilds
            .iter()
            .find(|entry| entry.id() == guild)
            .is_some_and(|entry| entry.muted_role().is_some() && entry.allows_roles(roles))
    }
}

/// poise check: the guild must be registered with a muted role, and the
/// caller must hold one of its admin or moderator roles.
pub async fn registered_guild_mod_only(ctx: Context<'_>) -> Result<bool, CommandError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(false);
    };

    let Some(member) = ctx.author_member().await else {
        return Ok(false);
    };

    Ok(ctx.data().gate().allows(guild_id, &member.roles))
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::{GuildId, RoleId};

    use super::{ConfigGate, ModerationGate};

    fn gate() -> ConfigGate {
        let config: super::super::Config = ::config::Config::builder()
            .add_source(::config::File::from_str(
                r#"
                [bot]
                token = "discord-token"

                [backend]
                url = "http://masz-backend/"

                [[guilds]]
                id = 10
                muted_role = 100
                mod_roles = [200]
                admin_roles = [300]

                [[guilds]]
                id = 11
                mod_roles = [200]
                "#,
                ::config::FileFormat::Toml,
            ))
            .build()
            .expect("hard-coded config should build")
            .try_deserialize()
            .expect("hard-coded config should parse");

        ConfigGate::new(config.guilds)
    }

    #[test]
    fn mod_and_admin_roles_allowed() {
        let gate = gate();

        assert!(gate.allows(GuildId::new(10), &[RoleId::new(200)]));
        assert!(gate.allows(GuildId::new(10), &[RoleId::new(300)]));
        assert!(gate.allows(GuildId::new(10), &[RoleId::new(1), RoleId::new(200)]));
    }

    #[test]
    fn other_roles_denied() {
        let gate = gate();

        assert!(!gate.allows(GuildId::new(10), &[RoleId::new(1)]));
        assert!(!gate.allows(GuildId::new(10), &[]));
    }

    #[test]
    fn unregistered_guild_denied() {
        assert!(!gate().allows(GuildId::new(12), &[RoleId::new(200)]));
    }

    #[test]
    fn guild_without_muted_role_denied() {
        assert!(!gate().allows(GuildId::new(11), &[RoleId::new(200)]));
    }
}
