//! Business accounts.

use serde_with::skip_serializing_none;

use crate::{
    objects::{Chat, Location, Sticker, User},
    prelude::*,
};

/// The bot's connection with a business account.
///
/// See also: <https://core.telegram.org/bots/api#businessconnection>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BusinessConnection {
    pub id: String,
    pub user: User,

    /// Identifier of a private chat with the user who created the business connection.
    pub user_chat_id: i64,

    pub date: i64,

    /// The bot can act on behalf of the business account in chats that were active in the last 24 hours.
    pub can_reply: bool,

    pub is_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BusinessMessagesDeleted {
    pub business_connection_id: String,

    /// Information about a chat in the business account. The bot may not have access to the chat
    /// or the corresponding user.
    pub chat: Chat,

    pub message_ids: Vec<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct BusinessIntro {
    pub title: Option<String>,
    pub message: Option<String>,
    pub sticker: Option<Sticker>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct BusinessLocation {
    pub address: String,
    pub location: Option<Location>,
}

/// Opening interval, in minutes since the start of the week (Monday 00:00) in the business time zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BusinessOpeningHoursInterval {
    /// From 0 to 7 * 24 * 60.
    pub opening_minute: i32,

    /// From 0 to 8 * 24 * 60.
    pub closing_minute: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BusinessOpeningHours {
    /// Unique name of the time zone.
    pub time_zone_name: String,

    pub opening_hours: Vec<BusinessOpeningHoursInterval>,
}
