//! Discord API wire models and the session identity derived from them.

use serde::{Deserialize, Serialize};

use crate::server::{error::AppError, model::api::UserDto, util::parse::parse_u64_from_string};

/// Discord's "Manage Guild" permission bit.
pub const MANAGE_GUILD: u64 = 1 << 5;

/// Profile returned from Discord's `/users/@me` endpoint.
#[derive(Debug, Deserialize)]
pub struct DiscordUser {
    /// Discord user ID, encoded as a decimal string on the wire.
    pub id: String,
    pub username: String,
    /// Avatar hash for constructing avatar URLs.
    pub avatar: Option<String>,
}

/// Partial guild returned from Discord's `/users/@me/guilds` endpoint.
///
/// Contains the minimal guild data needed to decide whether the caller may
/// manage the guild and to render it in the server list.
#[derive(Debug, Deserialize)]
pub struct PartialGuild {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    /// Caller's permission bits in this guild, encoded as a decimal string.
    pub permissions: String,
}

impl PartialGuild {
    /// Whether the caller holds the Manage Guild permission bit.
    ///
    /// An unparsable permissions payload counts as no permission.
    pub fn can_manage(&self) -> bool {
        self.permissions
            .parse::<u64>()
            .map(|bits| bits & MANAGE_GUILD == MANAGE_GUILD)
            .unwrap_or(false)
    }
}

/// Authenticated identity stored in the server-side session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub username: String,
    pub avatar: Option<String>,
}

impl SessionUser {
    /// Converts the wire profile into the session identity.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Successfully converted identity
    /// - `Err(AppError::InternalErr(ParseStringId))` - Discord returned a
    ///   non-numeric user ID
    pub fn from_api(user: DiscordUser) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_u64_from_string(user.id)?,
            username: user.username,
            avatar: user.avatar,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            avatar: self.avatar,
        }
    }
}

/// Manageable guild stored in the session.
///
/// Only guilds where the caller holds Manage Guild survive the OAuth
/// callback filter, so presence in this list is the management-rights check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionGuild {
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
}

impl SessionGuild {
    /// Converts a wire guild into its session representation.
    pub fn from_api(guild: PartialGuild) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_u64_from_string(guild.id)?,
            name: guild.name,
            icon: guild.icon,
        })
    }
}
