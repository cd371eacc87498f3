//! Chat administration and callback queries.

use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    methods::Method,
    objects::{ChatFullInfo, ChatId, ChatInviteLink, ChatMember, ChatPermissions, InputFile},
    prelude::*,
};

/// Ban a user in a group, a supergroup or a channel.
///
/// See also: <https://core.telegram.org/bots/api#banchatmember>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct BanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,

    /// If the user is banned for more than 366 days or less than 30 seconds, they are banned forever.
    pub until_date: Option<i64>,

    /// Delete all messages from the chat for the user that is being removed.
    pub revoke_messages: Option<bool>,
}

impl Method for BanChatMember {
    const NAME: &'static str = "banChatMember";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,

    /// Do nothing if the user is not banned.
    pub only_if_banned: Option<bool>,
}

impl Method for UnbanChatMember {
    const NAME: &'static str = "unbanChatMember";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    pub use_independent_chat_permissions: Option<bool>,
    pub until_date: Option<i64>,
}

impl Method for RestrictChatMember {
    const NAME: &'static str = "restrictChatMember";

    type Response = bool;
}

/// Promote or demote a user. Pass `false` for all boolean parameters to demote a user.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct PromoteChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub is_anonymous: Option<bool>,
    pub can_manage_chat: Option<bool>,
    pub can_delete_messages: Option<bool>,
    pub can_manage_video_chats: Option<bool>,
    pub can_restrict_members: Option<bool>,
    pub can_promote_members: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_post_stories: Option<bool>,
    pub can_edit_stories: Option<bool>,
    pub can_delete_stories: Option<bool>,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_pin_messages: Option<bool>,
    pub can_manage_topics: Option<bool>,
}

impl Method for PromoteChatMember {
    const NAME: &'static str = "promoteChatMember";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SetChatAdministratorCustomTitle {
    pub chat_id: ChatId,
    pub user_id: i64,

    /// 0-16 characters, emoji are not allowed.
    pub custom_title: String,
}

impl Method for SetChatAdministratorCustomTitle {
    const NAME: &'static str = "setChatAdministratorCustomTitle";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct BanChatSenderChat {
    pub chat_id: ChatId,
    pub sender_chat_id: i64,
}

impl Method for BanChatSenderChat {
    const NAME: &'static str = "banChatSenderChat";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct UnbanChatSenderChat {
    pub chat_id: ChatId,
    pub sender_chat_id: i64,
}

impl Method for UnbanChatSenderChat {
    const NAME: &'static str = "unbanChatSenderChat";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct SetChatPermissions {
    pub chat_id: ChatId,
    pub permissions: ChatPermissions,
    pub use_independent_chat_permissions: Option<bool>,
}

impl Method for SetChatPermissions {
    const NAME: &'static str = "setChatPermissions";

    type Response = bool;
}

/// Generate a new primary invite link for a chat; any previously generated primary link is revoked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct ExportChatInviteLink {
    pub chat_id: ChatId,
}

impl Method for ExportChatInviteLink {
    const NAME: &'static str = "exportChatInviteLink";

    type Response = String;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct CreateChatInviteLink {
    pub chat_id: ChatId,

    /// Invite link name; 0-32 characters.
    pub name: Option<String>,

    pub expire_date: Option<i64>,

    /// 1-99999.
    pub member_limit: Option<i32>,

    /// Users joining the chat via the link need to be approved by chat administrators.
    /// If `true`, `member_limit` can't be specified.
    pub creates_join_request: Option<bool>,
}

impl Method for CreateChatInviteLink {
    const NAME: &'static str = "createChatInviteLink";

    type Response = ChatInviteLink;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct EditChatInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
    pub name: Option<String>,
    pub expire_date: Option<i64>,
    pub member_limit: Option<i32>,
    pub creates_join_request: Option<bool>,
}

impl Method for EditChatInviteLink {
    const NAME: &'static str = "editChatInviteLink";

    type Response = ChatInviteLink;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct RevokeChatInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
}

impl Method for RevokeChatInviteLink {
    const NAME: &'static str = "revokeChatInviteLink";

    type Response = ChatInviteLink;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct ApproveChatJoinRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Method for ApproveChatJoinRequest {
    const NAME: &'static str = "approveChatJoinRequest";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct DeclineChatJoinRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Method for DeclineChatJoinRequest {
    const NAME: &'static str = "declineChatJoinRequest";

    type Response = bool;
}

/// Set a new profile photo for the chat. Photos can't be changed for private chats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct SetChatPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
}

impl Method for SetChatPhoto {
    const NAME: &'static str = "setChatPhoto";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct DeleteChatPhoto {
    pub chat_id: ChatId,
}

impl Method for DeleteChatPhoto {
    const NAME: &'static str = "deleteChatPhoto";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SetChatTitle {
    pub chat_id: ChatId,

    /// 1-128 characters.
    pub title: String,
}

impl Method for SetChatTitle {
    const NAME: &'static str = "setChatTitle";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SetChatDescription {
    pub chat_id: ChatId,

    /// 0-255 characters.
    pub description: Option<String>,
}

impl Method for SetChatDescription {
    const NAME: &'static str = "setChatDescription";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct PinChatMessage {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_id: i32,

    /// Notifications are always disabled in channels and private chats.
    pub disable_notification: Option<bool>,
}

impl Method for PinChatMessage {
    const NAME: &'static str = "pinChatMessage";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct UnpinChatMessage {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,

    /// If not specified, the most recent pinned message (by sending date) will be unpinned.
    pub message_id: Option<i32>,
}

impl Method for UnpinChatMessage {
    const NAME: &'static str = "unpinChatMessage";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct UnpinAllChatMessages {
    pub chat_id: ChatId,
}

impl Method for UnpinAllChatMessages {
    const NAME: &'static str = "unpinAllChatMessages";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl Method for LeaveChat {
    const NAME: &'static str = "leaveChat";

    type Response = bool;
}

/// Get up-to-date information about the chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl Method for GetChat {
    const NAME: &'static str = "getChat";

    type Response = ChatFullInfo;
}

/// Get a list of administrators in a chat, which aren't bots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl Method for GetChatAdministrators {
    const NAME: &'static str = "getChatAdministrators";

    type Response = Vec<ChatMember>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct GetChatMemberCount {
    pub chat_id: ChatId,
}

impl Method for GetChatMemberCount {
    const NAME: &'static str = "getChatMemberCount";

    type Response = i32;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Method for GetChatMember {
    const NAME: &'static str = "getChatMember";

    type Response = ChatMember;
}

/// Set a new group sticker set for a supergroup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SetChatStickerSet {
    pub chat_id: ChatId,
    pub sticker_set_name: String,
}

impl Method for SetChatStickerSet {
    const NAME: &'static str = "setChatStickerSet";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct DeleteChatStickerSet {
    pub chat_id: ChatId,
}

impl Method for DeleteChatStickerSet {
    const NAME: &'static str = "deleteChatStickerSet";

    type Response = bool;
}

/// Send answers to callback queries sent from [inline keyboards][1].
///
/// The answer will be displayed to the user as a notification at the top of the chat screen
/// or as an alert.
///
/// [1]: https://core.telegram.org/bots/features#inline-keyboards
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,

    /// Text of the notification. If not specified, nothing will be shown to the user, 0-200 characters.
    pub text: Option<String>,

    pub show_alert: Option<bool>,
    pub url: Option<String>,

    /// The maximum amount of time in seconds that the result of the callback query may be cached client-side.
    pub cache_time: Option<i32>,
}

impl Method for AnswerCallbackQuery {
    const NAME: &'static str = "answerCallbackQuery";

    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restrict_chat_member_ok() -> Result {
        let request = RestrictChatMember::builder()
            .chat_id(-100_i64)
            .user_id(42)
            .permissions(ChatPermissions::builder().can_send_messages(false).build())
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            // language=json
            serde_json::json!({
                "chat_id": -100,
                "user_id": 42,
                "permissions": {"can_send_messages": false},
            }),
        );
        Ok(())
    }

    #[test]
    fn test_get_chat_administrators_response_ok() -> Result {
        // language=json
        let administrators = GetChatAdministrators::decode_response(serde_json::json!([
            {
                "status": "creator",
                "user": {"id": 1, "is_bot": false, "first_name": "Ada"},
                "is_anonymous": false
            }
        ]))?;
        assert!(matches!(administrators.as_slice(), [ChatMember::Owner(_)]));
        Ok(())
    }

    #[test]
    fn test_answer_callback_query_ok() -> Result {
        let request = AnswerCallbackQuery::builder()
            .callback_query_id("1")
            .text("Done")
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            serde_json::json!({"callback_query_id": "1", "text": "Done"}),
        );
        Ok(())
    }
}
