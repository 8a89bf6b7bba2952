use crate::{
    commands::LogCommands,
    modcase::{CaseOutcome, NewModCase},
    utils::{poise::CommandResult, Context},
};
use poise::serenity_prelude::Member;
use tracing::{error, instrument};
use url::Url;

const NO_REASON: &str = "Please provide a reason.";

/// mute a member. this also creates a modcase.
///
/// usage: mute <username|userid|usermention> <reason>
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    check = "crate::framework::gate::registered_guild_mod_only",
    required_bot_permissions = "SEND_MESSAGES"
)]
pub async fn mute(
    ctx: Context<'_>,
    #[description = "member to mute"] member: Member,
    #[rest]
    #[description = "reason to mute"]
    reason: String,
) -> CommandResult {
    ctx.log_command().await;
    _mute(ctx, member, reason).await?;
    Ok(())
}

async fn _mute(ctx: Context<'_>, member: Member, reason: String) -> CommandResult {
    if ctx.defer().await.is_err() {
        error!("failed to defer - lag will cause errors!");
    }

    if reason_missing(&reason) {
        ctx.say(NO_REASON).await?;
        return Ok(());
    }

    let guild_id = ctx.guild_id().expect("mute is a guild-only command");
    let case = NewModCase::mute(ctx.author().id, member.user.id, &reason);

    let outcome = ctx.data().modcase().create(guild_id, &case).await?;

    ctx.say(case_reply(
        &outcome,
        ctx.data().config().backend.public_url(),
    ))
    .await?;

    Ok(())
}

fn reason_missing(reason: &str) -> bool {
    reason.trim().is_empty()
}

fn case_reply(outcome: &CaseOutcome, info_url: Option<&Url>) -> String {
    match outcome {
        CaseOutcome::Created(case) => format!(
            "Case #{} created and user muted.\nFollow this link for more information: {}",
            case.id(),
            info_url.map_or_else(|| "URL not set.".to_owned(), Url::to_string),
        ),
        CaseOutcome::Unauthorized => "You are not allowed to do this.".to_owned(),
        CaseOutcome::Failed { status, body } => {
            format!("Something went wrong.\nCode: {status}\nText: {body}")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::modcase::CaseOutcome;
    use url::Url;

    #[test]
    fn reason_missing() {
        for reason in ["", " ", "   ", "\n\t"] {
            assert!(super::reason_missing(reason), "{reason:?} should be missing");
        }

        assert!(!super::reason_missing("spamming"));
        assert_eq!(super::NO_REASON, "Please provide a reason.");
    }

    #[test]
    fn created_reply() {
        let outcome = CaseOutcome::Created(
            serde_json::from_value(serde_json::json!({ "caseid": 42 }))
                .expect("hard-coded body should parse"),
        );
        let info_url = Url::parse("https://mod.example.com/info").expect("hard-coded url");

        assert_eq!(
            super::case_reply(&outcome, Some(&info_url)),
            "Case #42 created and user muted.\n\
             Follow this link for more information: https://mod.example.com/info"
        );
    }

    #[test]
    fn created_reply_without_info_url() {
        let outcome = CaseOutcome::Created(
            serde_json::from_value(serde_json::json!({ "caseid": 42 }))
                .expect("hard-coded body should parse"),
        );

        assert_eq!(
            super::case_reply(&outcome, None),
            "Case #42 created and user muted.\n\
             Follow this link for more information: URL not set."
        );
    }

    #[test]
    fn unauthorized_reply() {
        assert_eq!(
            super::case_reply(&CaseOutcome::Unauthorized, None),
            "You are not allowed to do this."
        );
    }

    #[test]
    fn failed_reply() {
        let outcome = CaseOutcome::Failed {
            status: 500,
            body: "boom".to_owned(),
        };

        assert_eq!(
            super::case_reply(&outcome, None),
            "Something went wrong.\nCode: 500\nText: boom"
        );
    }
}
