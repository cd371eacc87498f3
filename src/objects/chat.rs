use std::fmt::{Display, Formatter};

use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    codec::deserialize_first_match,
    objects::{
        Birthdate, BusinessIntro, BusinessLocation, BusinessOpeningHours, Location, Message,
        ReactionType, User,
    },
    prelude::*,
};

/// Unique identifier for the target chat or username of the target channel (in the format `@channelusername`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum ChatId {
    Integer(i64),
    Username(String),
}

deserialize_first_match!(ChatId { Integer, Username });

impl From<i64> for ChatId {
    fn from(chat_id: i64) -> Self {
        Self::Integer(chat_id)
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_owned())
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(chat_id) => Display::fmt(chat_id, f),
            Self::Username(username) => Display::fmt(username, f),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,

    /// Private chat with the inline query sender, only seen in inline queries.
    Sender,
}

/// This object represents a chat.
///
/// See also: <https://core.telegram.org/bots/api#chat>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Chat {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: ChatType,

    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_forum: Option<bool>,
}

/// Full information about a chat, as returned by `getChat`.
///
/// See also: <https://core.telegram.org/bots/api#chatfullinfo>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct ChatFullInfo {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: ChatType,

    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_forum: Option<bool>,

    /// Identifier of the accent color for the chat name and backgrounds of the chat photo,
    /// reply header, and link preview.
    pub accent_color_id: i32,

    pub max_reaction_count: i32,
    pub photo: Option<ChatPhoto>,
    pub active_usernames: Option<Vec<String>>,
    pub birthdate: Option<Birthdate>,
    pub business_intro: Option<BusinessIntro>,
    pub business_location: Option<BusinessLocation>,
    pub business_opening_hours: Option<BusinessOpeningHours>,
    pub personal_chat: Option<Chat>,

    /// If omitted, then all emoji reactions are allowed.
    pub available_reactions: Option<Vec<ReactionType>>,

    pub background_custom_emoji_id: Option<String>,
    pub profile_accent_color_id: Option<i32>,
    pub profile_background_custom_emoji_id: Option<String>,
    pub emoji_status_custom_emoji_id: Option<String>,
    pub emoji_status_expiration_date: Option<i64>,
    pub bio: Option<String>,
    pub has_private_forwards: Option<bool>,
    pub has_restricted_voice_and_video_messages: Option<bool>,
    pub join_to_send_messages: Option<bool>,
    pub join_by_request: Option<bool>,
    pub description: Option<String>,
    pub invite_link: Option<String>,
    pub pinned_message: Option<Box<Message>>,
    pub permissions: Option<ChatPermissions>,

    /// Minimum allowed delay between consecutive messages sent by each unprivileged user, in seconds.
    pub slow_mode_delay: Option<i32>,

    pub unrestrict_boost_count: Option<i32>,
    pub message_auto_delete_time: Option<i32>,
    pub has_aggressive_anti_spam_enabled: Option<bool>,
    pub has_hidden_members: Option<bool>,
    pub has_protected_content: Option<bool>,
    pub has_visible_history: Option<bool>,
    pub sticker_set_name: Option<String>,
    pub can_set_sticker_set: Option<bool>,
    pub custom_emoji_sticker_set_name: Option<String>,
    pub linked_chat_id: Option<i64>,
    pub location: Option<ChatLocation>,
}

/// <https://core.telegram.org/bots/api#chatphoto>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

/// Actions that non-administrator users are allowed to take in a chat.
///
/// See also: <https://core.telegram.org/bots/api#chatpermissions>.
#[skip_serializing_none]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct ChatPermissions {
    pub can_send_messages: Option<bool>,
    pub can_send_audios: Option<bool>,
    pub can_send_documents: Option<bool>,
    pub can_send_photos: Option<bool>,
    pub can_send_videos: Option<bool>,
    pub can_send_video_notes: Option<bool>,
    pub can_send_voice_notes: Option<bool>,
    pub can_send_polls: Option<bool>,
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
    pub can_manage_topics: Option<bool>,
}

/// <https://core.telegram.org/bots/api#chatlocation>
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ChatLocation {
    /// Can't be a live location.
    pub location: Location,

    pub address: String,
}

/// <https://core.telegram.org/bots/api#chatinvitelink>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatInviteLink {
    /// If the link was created by another chat administrator, then the second part of the link
    /// will be replaced with `…`.
    pub invite_link: String,

    pub creator: User,
    pub creates_join_request: bool,
    pub is_primary: bool,
    pub is_revoked: bool,
    pub name: Option<String>,
    pub expire_date: Option<i64>,
    pub member_limit: Option<i32>,
    pub pending_join_request_count: Option<i32>,
}

/// Rights of an administrator in a chat.
///
/// See also: <https://core.telegram.org/bots/api#chatadministratorrights>.
#[skip_serializing_none]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct ChatAdministratorRights {
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,

    /// Channels only.
    pub can_post_messages: Option<bool>,

    /// Channels only.
    pub can_edit_messages: Option<bool>,

    /// Groups and supergroups only.
    pub can_pin_messages: Option<bool>,

    /// Supergroups only.
    pub can_manage_topics: Option<bool>,
}

/// <https://core.telegram.org/bots/api#chatmemberupdated>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    pub from: User,
    pub date: i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    pub invite_link: Option<ChatInviteLink>,
    pub via_join_request: Option<bool>,
    pub via_chat_folder_invite_link: Option<bool>,
}

/// <https://core.telegram.org/bots/api#chatjoinrequest>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,

    /// Identifier of a private chat with the user, usable for 5 minutes to send messages
    /// until the join request is processed.
    pub user_chat_id: i64,

    pub date: i64,
    pub bio: Option<String>,
    pub invite_link: Option<ChatInviteLink>,
}

/// Information about one [member of a chat][1], dispatched on its `status`.
///
/// [1]: https://core.telegram.org/bots/api#chatmember
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
#[must_use]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),

    Administrator(ChatMemberAdministrator),
    Member(ChatMemberMember),
    Restricted(ChatMemberRestricted),
    Left(ChatMemberLeft),

    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

impl ChatMember {
    pub const fn user(&self) -> &User {
        match self {
            Self::Owner(member) => &member.user,
            Self::Administrator(member) => &member.user,
            Self::Member(member) => &member.user,
            Self::Restricted(member) => &member.user,
            Self::Left(member) => &member.user,
            Self::Banned(member) => &member.user,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    pub custom_title: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatMemberAdministrator {
    pub user: User,

    /// `true`, if the bot is allowed to edit administrator privileges of that user.
    pub can_be_edited: bool,

    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_pin_messages: Option<bool>,
    pub can_manage_topics: Option<bool>,
    pub custom_title: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatMemberMember {
    pub user: User,

    /// Date when the user's subscription will expire.
    pub until_date: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_send_messages: bool,
    pub can_send_audios: bool,
    pub can_send_documents: bool,
    pub can_send_photos: bool,
    pub can_send_videos: bool,
    pub can_send_video_notes: bool,
    pub can_send_voice_notes: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_manage_topics: bool,

    /// `0` means restricted forever.
    pub until_date: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatMemberLeft {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatMemberBanned {
    pub user: User,

    /// `0` means banned forever.
    pub until_date: i64,
}

/// Type of action to broadcast with `sendChatAction`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    ChooseSticker,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}
