use bon::Builder;
use serde::{Deserializer, de};
use serde_with::skip_serializing_none;

use crate::{
    codec::deserialize_first_match,
    objects::{
        Animation, Audio, Chat, ChatBackground, ChatBoostAdded, ChatId, ChatShared, Contact, Dice,
        Document, ForumTopicClosed, ForumTopicCreated, ForumTopicEdited, ForumTopicReopened, Game,
        GeneralForumTopicHidden, GeneralForumTopicUnhidden, Giveaway, GiveawayCompleted,
        GiveawayCreated, GiveawayWinners, InlineKeyboardMarkup, Invoice, Location,
        MessageAutoDeleteTimerChanged, PaidMediaInfo, PassportData, PhotoSize, Poll,
        ProximityAlertTriggered, RefundedPayment, Sticker, Story, SuccessfulPayment, User,
        UsersShared, Venue, Video, VideoChatEnded, VideoChatParticipantsInvited, VideoChatScheduled,
        VideoChatStarted, VideoNote, Voice, WebAppData, WriteAccessAllowed,
    },
    prelude::*,
};

/// This object represents a [message][1].
///
/// [1]: https://core.telegram.org/bots/api#message
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct Message {
    /// Unique message identifier inside this chat.
    #[serde(rename = "message_id")]
    pub id: i32,

    /// Unique identifier of a message thread to which the message belongs, supergroups only.
    pub message_thread_id: Option<i32>,

    /// Sender of the message, empty for messages sent to channels.
    pub from: Option<User>,

    /// Sender of the message when sent on behalf of a chat.
    pub sender_chat: Option<Chat>,

    pub sender_boost_count: Option<i32>,
    pub sender_business_bot: Option<User>,

    /// Date the message was sent in Unix time.
    ///
    /// It is always a positive number, representing a valid date.
    pub date: i64,

    pub business_connection_id: Option<String>,
    pub chat: Chat,
    pub forward_origin: Option<Box<MessageOrigin>>,
    pub is_topic_message: Option<bool>,
    pub is_automatic_forward: Option<bool>,

    /// Note that the message in this field will not contain further `reply_to_message` fields
    /// even if it itself is a reply.
    pub reply_to_message: Option<Box<Message>>,

    pub external_reply: Option<Box<ExternalReplyInfo>>,
    pub quote: Option<TextQuote>,
    pub reply_to_story: Option<Box<Story>>,
    pub via_bot: Option<User>,
    pub edit_date: Option<i64>,
    pub has_protected_content: Option<bool>,
    pub is_from_offline: Option<bool>,
    pub media_group_id: Option<String>,
    pub author_signature: Option<String>,

    /// Actual UTF-8 text of the message.
    pub text: Option<String>,

    pub entities: Option<Vec<MessageEntity>>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    pub effect_id: Option<String>,

    /// For backward compatibility, when this field is set, the `document` field will also be set.
    pub animation: Option<Box<Animation>>,

    pub audio: Option<Box<Audio>>,
    pub document: Option<Box<Document>>,
    pub paid_media: Option<Box<PaidMediaInfo>>,

    /// Available sizes of the photo.
    pub photo: Option<Vec<PhotoSize>>,

    pub sticker: Option<Box<Sticker>>,
    pub story: Option<Box<Story>>,
    pub video: Option<Box<Video>>,
    pub video_note: Option<Box<VideoNote>>,
    pub voice: Option<Box<Voice>>,
    pub caption: Option<String>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub has_media_spoiler: Option<bool>,
    pub contact: Option<Box<Contact>>,
    pub dice: Option<Dice>,
    pub game: Option<Box<Game>>,
    pub poll: Option<Box<Poll>>,

    /// For backward compatibility, when this field is set, the `location` field will also be set.
    pub venue: Option<Box<Venue>>,

    pub location: Option<Location>,
    pub new_chat_members: Option<Vec<User>>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<String>,
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    pub delete_chat_photo: Option<bool>,
    pub group_chat_created: Option<bool>,
    pub supergroup_chat_created: Option<bool>,
    pub channel_chat_created: Option<bool>,
    pub message_auto_delete_timer_changed: Option<MessageAutoDeleteTimerChanged>,
    pub migrate_to_chat_id: Option<i64>,
    pub migrate_from_chat_id: Option<i64>,

    /// Note that the message in this field will not contain further `reply_to_message` fields
    /// even if it itself is a reply.
    pub pinned_message: Option<Box<MaybeInaccessibleMessage>>,

    pub invoice: Option<Box<Invoice>>,
    pub successful_payment: Option<Box<SuccessfulPayment>>,
    pub refunded_payment: Option<Box<RefundedPayment>>,
    pub users_shared: Option<UsersShared>,
    pub chat_shared: Option<Box<ChatShared>>,
    pub connected_website: Option<String>,
    pub write_access_allowed: Option<WriteAccessAllowed>,
    pub passport_data: Option<Box<PassportData>>,
    pub proximity_alert_triggered: Option<Box<ProximityAlertTriggered>>,
    pub boost_added: Option<ChatBoostAdded>,
    pub chat_background_set: Option<Box<ChatBackground>>,
    pub forum_topic_created: Option<ForumTopicCreated>,
    pub forum_topic_edited: Option<ForumTopicEdited>,
    pub forum_topic_closed: Option<ForumTopicClosed>,
    pub forum_topic_reopened: Option<ForumTopicReopened>,
    pub general_forum_topic_hidden: Option<GeneralForumTopicHidden>,
    pub general_forum_topic_unhidden: Option<GeneralForumTopicUnhidden>,
    pub giveaway_created: Option<GiveawayCreated>,
    pub giveaway: Option<Box<Giveaway>>,
    pub giveaway_winners: Option<Box<GiveawayWinners>>,
    pub giveaway_completed: Option<Box<GiveawayCompleted>>,
    pub video_chat_scheduled: Option<VideoChatScheduled>,
    pub video_chat_started: Option<VideoChatStarted>,
    pub video_chat_ended: Option<VideoChatEnded>,
    pub video_chat_participants_invited: Option<VideoChatParticipantsInvited>,
    pub web_app_data: Option<WebAppData>,

    /// `login_url` buttons are represented as ordinary `url` buttons.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// <https://core.telegram.org/bots/api#messageid>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct MessageId {
    #[serde(rename = "message_id")]
    pub id: i32,
}

/// A message that was deleted or is otherwise inaccessible to the bot.
///
/// See also: <https://core.telegram.org/bots/api#inaccessiblemessage>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct InaccessibleMessage {
    pub chat: Chat,

    #[serde(rename = "message_id")]
    pub id: i32,

    /// Always `0`, which is what tells it apart from a regular message.
    #[serde(deserialize_with = "deserialize_zero_date")]
    pub date: i64,
}

fn deserialize_zero_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match i64::deserialize(deserializer)? {
        0 => Ok(0),
        date => Err(de::Error::invalid_value(de::Unexpected::Signed(date), &"0")),
    }
}

/// <https://core.telegram.org/bots/api#maybeinaccessiblemessage>
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum MaybeInaccessibleMessage {
    /// Goes first: a regular message shape would also accept `"date": 0`.
    Inaccessible(InaccessibleMessage),

    Message(Box<Message>),
}

deserialize_first_match!(MaybeInaccessibleMessage { Inaccessible, Message });

impl MaybeInaccessibleMessage {
    pub fn chat(&self) -> &Chat {
        match self {
            Self::Inaccessible(message) => &message.chat,
            Self::Message(message) => &message.chat,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Inaccessible(message) => message.id,
            Self::Message(message) => message.id,
        }
    }
}

/// This object represents one [special entity][1] in a text message.
///
/// [1]: https://core.telegram.org/bots/api#messageentity
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityType,

    /// Offset in [UTF-16 code units][1] to the start of the entity.
    ///
    /// [1]: https://core.telegram.org/api/entities#entity-length
    pub offset: i32,

    /// Length of the entity in UTF-16 code units.
    pub length: i32,

    /// For `text_link` only.
    pub url: Option<String>,

    /// For `text_mention` only.
    pub user: Option<User>,

    /// For `pre` only.
    pub language: Option<String>,

    /// For `custom_emoji` only.
    pub custom_emoji_id: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    ExpandableBlockquote,
    Code,
    Pre,
    TextLink,
    TextMention,
    CustomEmoji,
}

/// Part of a message that is quoted by another one.
///
/// See also: <https://core.telegram.org/bots/api#textquote>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct TextQuote {
    pub text: String,
    pub entities: Option<Vec<MessageEntity>>,

    /// Approximate quote position in the original message in UTF-16 code units.
    pub position: i32,

    pub is_manual: Option<bool>,
}

/// A message being replied to, which may come from another chat or forum topic.
///
/// See also: <https://core.telegram.org/bots/api#externalreplyinfo>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ExternalReplyInfo {
    pub origin: MessageOrigin,
    pub chat: Option<Chat>,
    pub message_id: Option<i32>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    pub animation: Option<Box<Animation>>,
    pub audio: Option<Box<Audio>>,
    pub document: Option<Box<Document>>,
    pub paid_media: Option<Box<PaidMediaInfo>>,
    pub photo: Option<Vec<PhotoSize>>,
    pub sticker: Option<Box<Sticker>>,
    pub story: Option<Box<Story>>,
    pub video: Option<Box<Video>>,
    pub video_note: Option<Box<VideoNote>>,
    pub voice: Option<Box<Voice>>,
    pub has_media_spoiler: Option<bool>,
    pub contact: Option<Box<Contact>>,
    pub dice: Option<Dice>,
    pub game: Option<Box<Game>>,
    pub giveaway: Option<Box<Giveaway>>,
    pub giveaway_winners: Option<Box<GiveawayWinners>>,
    pub invoice: Option<Box<Invoice>>,
    pub location: Option<Location>,
    pub poll: Option<Box<Poll>>,
    pub venue: Option<Box<Venue>>,
}

/// Describes reply parameters for the message that is being sent.
///
/// See also: <https://core.telegram.org/bots/api#replyparameters>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct ReplyParameters {
    pub message_id: i32,

    /// If not specified, the chat of the original message is used.
    pub chat_id: Option<ChatId>,

    pub allow_sending_without_reply: Option<bool>,

    /// Quoted part of the message to be replied to, 0-1024 characters after entities parsing.
    pub quote: Option<String>,

    pub quote_parse_mode: Option<ParseMode>,
    pub quote_entities: Option<Vec<MessageEntity>>,
    pub quote_position: Option<i32>,
}

impl From<MessageId> for ReplyParameters {
    fn from(message_id: MessageId) -> Self {
        Self::builder().message_id(message_id.id).build()
    }
}

/// Origin of a forwarded message, dispatched on its `type`.
///
/// See also: <https://core.telegram.org/bots/api#messageorigin>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum MessageOrigin {
    User(MessageOriginUser),
    HiddenUser(MessageOriginHiddenUser),
    Chat(MessageOriginChat),
    Channel(MessageOriginChannel),
}

impl MessageOrigin {
    pub const fn date(&self) -> i64 {
        match self {
            Self::User(origin) => origin.date,
            Self::HiddenUser(origin) => origin.date,
            Self::Chat(origin) => origin.date,
            Self::Channel(origin) => origin.date,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MessageOriginUser {
    pub date: i64,
    pub sender_user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MessageOriginHiddenUser {
    pub date: i64,
    pub sender_user_name: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MessageOriginChat {
    pub date: i64,
    pub sender_chat: Chat,

    /// For messages originally sent by an anonymous chat administrator, original message author signature.
    pub author_signature: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MessageOriginChannel {
    pub date: i64,
    pub chat: Chat,
    pub message_id: i32,
    pub author_signature: Option<String>,
}

/// Text [formatting][1] options.
///
/// [1]: https://core.telegram.org/bots/api#formatting-options
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum ParseMode {
    /// [MarkdownV2 style][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#markdownv2-style
    MarkdownV2,

    /// [HTML style][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#html-style
    #[serde(rename = "HTML")]
    Html,

    /// Legacy [Markdown style][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#markdown-style
    Markdown,
}

/// Describes the [options][1] used for link preview generation.
///
/// [1]: https://core.telegram.org/bots/api#linkpreviewoptions
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct LinkPreviewOptions {
    /// `true`, if the link preview is disabled
    pub is_disabled: Option<bool>,

    /// URL to use for the link preview.
    ///
    /// If empty, then the first URL found in the message text will be used
    pub url: Option<String>,

    pub prefer_small_media: Option<bool>,
    pub prefer_large_media: Option<bool>,

    /// `true`, if the link preview must be shown above the message text;
    /// otherwise, the link preview will be shown below the message text
    pub show_above_text: Option<bool>,
}

impl LinkPreviewOptions {
    pub const DISABLED: Self = Self {
        is_disabled: Some(true),
        url: None,
        prefer_small_media: None,
        prefer_large_media: None,
        show_above_text: None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{decode, decode_str, encode},
        objects::ChatType,
    };

    // language=json
    const MESSAGE: &str = r#"{
        "message_id": 42,
        "from": {"id": 1, "is_bot": false, "first_name": "Ada"},
        "chat": {"id": 1, "type": "private", "first_name": "Ada"},
        "date": 1700000000,
        "text": "/start hello",
        "entities": [{"type": "bot_command", "offset": 0, "length": 6}]
    }"#;

    #[test]
    fn test_decode_message_ok() -> Result {
        let message: Message = decode_str(MESSAGE)?;
        assert_eq!(message.id, 42);
        assert_eq!(message.chat.kind, ChatType::Private);
        assert_eq!(message.text.as_deref(), Some("/start hello"));
        assert_eq!(message.entities.as_ref().unwrap()[0].kind, MessageEntityType::BotCommand);
        assert_eq!(message.photo, None);
        Ok(())
    }

    #[test]
    fn test_message_round_trip_ok() -> Result {
        let message: Message = decode_str(MESSAGE)?;
        assert_eq!(decode::<Message>(encode(&message)?)?, message);
        Ok(())
    }

    #[test]
    fn test_message_builder_omits_unset_fields_ok() -> Result {
        let chat: Chat = decode_str(r#"{"id": -100, "type": "channel", "title": "News"}"#)?;
        let message = Message::builder().id(1).date(1_700_000_000).chat(chat).text("hi").build();
        let value = encode(&message)?;
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(!object.contains_key("from"));
        assert!(!object.contains_key("reply_to_message"));
        Ok(())
    }

    #[test]
    fn test_maybe_inaccessible_message_ok() -> Result {
        // language=json
        let message: MaybeInaccessibleMessage =
            decode_str(r#"{"chat": {"id": 1, "type": "private"}, "message_id": 5, "date": 0}"#)?;
        assert!(matches!(
            message,
            MaybeInaccessibleMessage::Inaccessible(InaccessibleMessage { id: 5, .. }),
        ));

        let message: MaybeInaccessibleMessage = decode_str(MESSAGE)?;
        assert!(matches!(message, MaybeInaccessibleMessage::Message(_)));
        assert_eq!(message.id(), 42);
        Ok(())
    }

    #[test]
    fn test_inaccessible_message_date_ok() -> Result {
        // language=json
        let json = r#"{"chat": {"id": 1, "type": "private"}, "message_id": 5, "date": 0}"#;
        let message: InaccessibleMessage = decode_str(json)?;
        assert_eq!(encode(&message)?["date"], serde_json::json!(0));

        // language=json
        let json = r#"{"chat": {"id": 1, "type": "private"}, "message_id": 5, "date": 1700000000}"#;
        let error = decode_str::<InaccessibleMessage>(json).unwrap_err();
        assert!(error.to_string().contains("expected 0"), "{error}");
        Ok(())
    }

    #[test]
    fn test_maybe_inaccessible_message_fails() {
        // language=json
        let result =
            decode_str::<MaybeInaccessibleMessage>(r#"{"message_id": 5, "text": "orphan"}"#);
        let error = result.unwrap_err();
        assert!(
            error.to_string().contains("no variant of MaybeInaccessibleMessage matched"),
            "{error}",
        );
    }

    #[test]
    fn test_message_origin_by_type_ok() -> Result {
        // language=json
        let origin: MessageOrigin =
            decode_str(r#"{"type": "hidden_user", "date": 1, "sender_user_name": "Anonymous"}"#)?;
        assert_eq!(
            origin,
            MessageOrigin::HiddenUser(MessageOriginHiddenUser {
                date: 1,
                sender_user_name: "Anonymous".into(),
            }),
        );
        assert_eq!(
            encode(&origin)?,
            serde_json::json!({"type": "hidden_user", "date": 1, "sender_user_name": "Anonymous"}),
        );
        Ok(())
    }

    #[test]
    fn test_parse_mode_ok() -> Result {
        assert_eq!(encode(&ParseMode::Html)?, serde_json::json!("HTML"));
        assert_eq!(encode(&ParseMode::MarkdownV2)?, serde_json::json!("MarkdownV2"));
        Ok(())
    }

    #[test]
    fn test_link_preview_disabled_ok() -> Result {
        assert_eq!(
            encode(&LinkPreviewOptions::DISABLED)?,
            serde_json::json!({"is_disabled": true}),
        );
        Ok(())
    }
}
