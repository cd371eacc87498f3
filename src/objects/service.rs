//! Service message payloads.

use serde_with::skip_serializing_none;

use crate::{
    objects::{PhotoSize, User},
    prelude::*,
};

/// A change in auto-delete timer settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MessageAutoDeleteTimerChanged {
    /// New auto-delete time for messages in the chat, in seconds.
    pub message_auto_delete_time: i32,
}

/// Users shared with the bot via a [`crate::objects::KeyboardButtonRequestUsers`] button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct UsersShared {
    pub request_id: i32,
    pub users: Vec<SharedUser>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct SharedUser {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub photo: Option<Vec<PhotoSize>>,
}

/// A chat shared with the bot via a [`crate::objects::KeyboardButtonRequestChat`] button.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatShared {
    pub request_id: i32,
    pub chat_id: i64,
    pub title: Option<String>,
    pub username: Option<String>,
    pub photo: Option<Vec<PhotoSize>>,
}

/// The user allowed the bot to write messages.
///
/// See also: <https://core.telegram.org/bots/api#writeaccessallowed>.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct WriteAccessAllowed {
    /// The access was granted after the user accepted an explicit request from a Web App.
    pub from_request: Option<bool>,

    /// Name of the Web App, if the access was granted when the Web App was launched from a link.
    pub web_app_name: Option<String>,

    /// The access was granted when the bot was added to the attachment or side menu.
    pub from_attachment_menu: Option<bool>,
}

/// A user in the chat triggered another user's proximity alert while sharing Live Location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ProximityAlertTriggered {
    pub traveler: User,
    pub watcher: User,

    /// The distance between the users, in meters.
    pub distance: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct VideoChatScheduled {
    /// Unix time when the video chat is supposed to be started by a chat administrator.
    pub start_date: i64,
}

/// Placeholder, currently holds no information.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct VideoChatStarted {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct VideoChatEnded {
    /// Video chat duration in seconds.
    pub duration: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct VideoChatParticipantsInvited {
    pub users: Vec<User>,
}

/// Data sent from a [Web App][1] to the bot.
///
/// [1]: https://core.telegram.org/bots/webapps
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct WebAppData {
    pub data: String,

    /// Text of the `web_app` keyboard button from which the Web App was opened.
    pub button_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_empty_marker_is_object_ok() -> Result {
        assert_eq!(encode(&VideoChatStarted {})?, serde_json::json!({}));
        assert_eq!(decode_str::<VideoChatStarted>("{}")?, VideoChatStarted {});
        Ok(())
    }

    #[test]
    fn test_users_shared_ok() -> Result {
        // language=json
        let shared: UsersShared =
            decode_str(r#"{"request_id": 7, "users": [{"user_id": 42, "username": "ada"}]}"#)?;
        assert_eq!(shared.users[0].user_id, 42);
        assert_eq!(shared.users[0].username.as_deref(), Some("ada"));
        assert!(shared.users[0].photo.is_none());
        Ok(())
    }
}
