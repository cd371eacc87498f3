//! Forum topics.

use serde_with::skip_serializing_none;

use crate::prelude::*;

/// <https://core.telegram.org/bots/api#forumtopic>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ForumTopic {
    pub message_thread_id: i32,
    pub name: String,

    /// Color of the topic icon in RGB format.
    pub icon_color: i32,

    pub icon_custom_emoji_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ForumTopicCreated {
    pub name: String,
    pub icon_color: i32,
    pub icon_custom_emoji_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ForumTopicEdited {
    pub name: Option<String>,

    /// An empty string if the icon was removed.
    pub icon_custom_emoji_id: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ForumTopicClosed {}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ForumTopicReopened {}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GeneralForumTopicHidden {}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GeneralForumTopicUnhidden {}

/// Icon colors accepted by [`crate::methods::CreateForumTopic`].
pub mod icon_color {
    pub const BLUE: i32 = 0x6F_B9_F0;
    pub const YELLOW: i32 = 0xFF_D6_7E;
    pub const VIOLET: i32 = 0xCB_86_DB;
    pub const GREEN: i32 = 0x8E_EE_98;
    pub const ROSE: i32 = 0xFF_93_B2;
    pub const RED: i32 = 0xFB_6F_5F;
}
