use serde_with::skip_serializing_none;

use crate::{objects::PhotoSize, prelude::*};

/// This object represents a Telegram user or bot.
///
/// See also: <https://core.telegram.org/bots/api#user>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,

    /// [IETF language tag][1] of the user's language.
    ///
    /// [1]: https://en.wikipedia.org/wiki/IETF_language_tag
    pub language_code: Option<String>,

    pub is_premium: Option<bool>,
    pub added_to_attachment_menu: Option<bool>,

    /// Returned only in `getMe`.
    pub can_join_groups: Option<bool>,

    /// Returned only in `getMe`.
    pub can_read_all_group_messages: Option<bool>,

    /// Returned only in `getMe`.
    pub supports_inline_queries: Option<bool>,

    /// Returned only in `getMe`.
    pub can_connect_to_business: Option<bool>,
}

/// [Profile pictures][1] of a user.
///
/// [1]: https://core.telegram.org/bots/api#userprofilephotos
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct UserProfilePhotos {
    pub total_count: i32,

    /// Requested profile pictures, in up to 4 sizes each.
    pub photos: Vec<Vec<PhotoSize>>,
}

/// <https://core.telegram.org/bots/api#birthdate>
#[skip_serializing_none]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Birthdate {
    pub day: u8,
    pub month: u8,
    pub year: Option<u16>,
}
