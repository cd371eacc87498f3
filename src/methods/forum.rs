//! Forum topics. The bot must be an administrator with `can_manage_topics`, unless it created the topic.

use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    methods::Method,
    objects::{ChatId, ForumTopic, Sticker},
    prelude::*,
};

/// Get custom emoji stickers which can be used as a forum topic icon by any user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GetForumTopicIconStickers {}

impl Method for GetForumTopicIconStickers {
    const NAME: &'static str = "getForumTopicIconStickers";

    type Response = Vec<Sticker>;
}

/// Create a topic in a forum supergroup chat.
///
/// See also: <https://core.telegram.org/bots/api#createforumtopic>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct CreateForumTopic {
    pub chat_id: ChatId,

    /// Topic name, 1-128 characters.
    pub name: String,

    /// One of [`crate::objects::icon_color`].
    pub icon_color: Option<i32>,

    pub icon_custom_emoji_id: Option<String>,
}

impl Method for CreateForumTopic {
    const NAME: &'static str = "createForumTopic";

    type Response = ForumTopic;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct EditForumTopic {
    pub chat_id: ChatId,
    pub message_thread_id: i32,

    /// If not specified or empty, the current name of the topic will be kept.
    pub name: Option<String>,

    /// Pass an empty string to remove the icon.
    pub icon_custom_emoji_id: Option<String>,
}

impl Method for EditForumTopic {
    const NAME: &'static str = "editForumTopic";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct CloseForumTopic {
    pub chat_id: ChatId,
    pub message_thread_id: i32,
}

impl Method for CloseForumTopic {
    const NAME: &'static str = "closeForumTopic";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct ReopenForumTopic {
    pub chat_id: ChatId,
    pub message_thread_id: i32,
}

impl Method for ReopenForumTopic {
    const NAME: &'static str = "reopenForumTopic";

    type Response = bool;
}

/// Delete a forum topic along with all its messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct DeleteForumTopic {
    pub chat_id: ChatId,
    pub message_thread_id: i32,
}

impl Method for DeleteForumTopic {
    const NAME: &'static str = "deleteForumTopic";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct UnpinAllForumTopicMessages {
    pub chat_id: ChatId,
    pub message_thread_id: i32,
}

impl Method for UnpinAllForumTopicMessages {
    const NAME: &'static str = "unpinAllForumTopicMessages";

    type Response = bool;
}

/// Edit the name of the 'General' topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct EditGeneralForumTopic {
    pub chat_id: ChatId,
    pub name: String,
}

impl Method for EditGeneralForumTopic {
    const NAME: &'static str = "editGeneralForumTopic";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct CloseGeneralForumTopic {
    pub chat_id: ChatId,
}

impl Method for CloseGeneralForumTopic {
    const NAME: &'static str = "closeGeneralForumTopic";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct ReopenGeneralForumTopic {
    pub chat_id: ChatId,
}

impl Method for ReopenGeneralForumTopic {
    const NAME: &'static str = "reopenGeneralForumTopic";

    type Response = bool;
}

/// Hide the 'General' topic. The topic will be automatically closed if it was open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct HideGeneralForumTopic {
    pub chat_id: ChatId,
}

impl Method for HideGeneralForumTopic {
    const NAME: &'static str = "hideGeneralForumTopic";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct UnhideGeneralForumTopic {
    pub chat_id: ChatId,
}

impl Method for UnhideGeneralForumTopic {
    const NAME: &'static str = "unhideGeneralForumTopic";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct UnpinAllGeneralForumTopicMessages {
    pub chat_id: ChatId,
}

impl Method for UnpinAllGeneralForumTopicMessages {
    const NAME: &'static str = "unpinAllGeneralForumTopicMessages";

    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::icon_color;

    #[test]
    fn test_create_forum_topic_ok() -> Result {
        let request = CreateForumTopic::builder()
            .chat_id(-100_i64)
            .name("Announcements")
            .icon_color(icon_color::GREEN)
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            // language=json
            serde_json::json!({"chat_id": -100, "name": "Announcements", "icon_color": 9_367_192}),
        );
        Ok(())
    }
}
