//! Client for the moderation backend's internal case API.
//!
//! Muting a member opens a modcase: the backend assigns the case id and
//! applies the punishment, this module only delivers the request and maps
//! the status code.

use poise::serenity_prelude::{GuildId, UserId};
use reqwest::{header::AUTHORIZATION, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

/// Longest case title the backend accepts.
const TITLE_MAX_CHARS: usize = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Punishment {
    Mute,
}

impl Punishment {
    const fn type_code(self) -> u8 {
        match self {
            Self::Mute => 1,
        }
    }
}

/// A new case as the backend's wire format expects it. Built per
/// invocation and discarded after the request returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewModCase {
    title: String,
    description: String,
    #[serde(rename = "modid")]
    moderator_id: u64,
    #[serde(rename = "userid")]
    user_id: u64,
    punishment: Punishment,
    labels: Vec<String>,
    #[serde(rename = "PunishmentType")]
    punishment_type: u8,
    #[serde(rename = "PunishmentActive")]
    active: bool,
}

impl NewModCase {
    pub fn new(punishment: Punishment, moderator: UserId, user: UserId, reason: &str) -> Self {
        Self {
            title: truncate_chars(reason, TITLE_MAX_CHARS).to_owned(),
            description: reason.to_owned(),
            moderator_id: moderator.get(),
            user_id: user.get(),
            punishment,
            labels: Vec::new(),
            punishment_type: punishment.type_code(),
            active: true,
        }
    }

    pub fn mute(moderator: UserId, user: UserId, reason: &str) -> Self {
        Self::new(Punishment::Mute, moderator, user, reason)
    }
}

/// Cuts `text` after `max` characters, not bytes, so multi-byte input
/// cannot be split mid-code-point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CaseCreated {
    #[serde(rename = "caseid")]
    case_id: u64,
}

impl CaseCreated {
    pub const fn id(self) -> u64 {
        self.case_id
    }
}

/// What the backend said about a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Created(CaseCreated),
    Unauthorized,
    Failed { status: u16, body: String },
}

/// Holds the backend base url and the static Authorization token, so
/// commands never read process-wide state and tests can point it at a
/// local backend.
#[derive(Debug, Clone)]
pub struct ModCaseClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl ModCaseClient {
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    fn cases_url(&self, guild: GuildId) -> Url {
        self.base_url
            .join(&format!("internalapi/v1/guilds/{guild}/modcases"))
            .expect("case path should be a valid url")
    }

    /// Issues the single POST for a new case. Transport failures and a
    /// malformed 201 body propagate; everything the backend actually said
    /// comes back as a [`CaseOutcome`]. No retries.
    pub async fn create(
        &self,
        guild: GuildId,
        case: &NewModCase,
    ) -> Result<CaseOutcome, reqwest::Error> {
        let response = self
            .http
            .post(self.cases_url(guild))
            .header(AUTHORIZATION, self.token.as_str())
            .json(case)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => Ok(CaseOutcome::Created(response.json().await?)),
            StatusCode::UNAUTHORIZED => Ok(CaseOutcome::Unauthorized),
            status => Ok(CaseOutcome::Failed {
                status: status.as_u16(),
                body: response.text().await?,
            }),
        }
    }
}
