use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    methods::Method,
    objects::{
        ChatAction, ChatId, InputFileOrString, InputMedia, InputPaidMedia, InputPollOption,
        LinkPreviewOptions, Message, MessageEntity, MessageId, ParseMode, PollType, ReactionType,
        ReplyMarkup, ReplyParameters,
    },
    prelude::*,
};

/// [Send a message][1].
///
/// [1]: https://core.telegram.org/bots/api#sendmessage
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendMessage {
    /// Unique identifier of the business connection on behalf of which the message will be sent.
    pub business_connection_id: Option<String>,

    pub chat_id: ChatId,

    /// Unique identifier for the target message thread (topic) of the forum; for forum supergroups only.
    pub message_thread_id: Option<i32>,

    /// Text of the message to be sent, 1-4096 characters after entities parsing.
    pub text: String,

    pub parse_mode: Option<ParseMode>,

    /// Can be specified instead of `parse_mode`.
    pub entities: Option<Vec<MessageEntity>>,

    pub link_preview_options: Option<LinkPreviewOptions>,

    /// Sends the message silently. Users will receive a notification with no sound.
    pub disable_notification: Option<bool>,

    /// Protects the contents of the sent message from forwarding and saving.
    pub protect_content: Option<bool>,

    /// Unique identifier of the message effect to be added to the message; for private chats only.
    pub message_effect_id: Option<String>,

    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendMessage {
    const NAME: &'static str = "sendMessage";

    type Response = Message;
}

/// Forward a message of any kind. Service messages and messages with protected content can't be forwarded.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,

    /// Chat where the original message was sent.
    pub from_chat_id: ChatId,

    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_id: i32,
}

impl Method for ForwardMessage {
    const NAME: &'static str = "forwardMessage";

    type Response = Message;
}

/// Forward multiple messages. Album grouping is kept for forwarded messages.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct ForwardMessages {
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub from_chat_id: ChatId,

    /// 1-100 identifiers of messages in the chat `from_chat_id`, in strictly increasing order.
    pub message_ids: Vec<i32>,

    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
}

impl Method for ForwardMessages {
    const NAME: &'static str = "forwardMessages";

    type Response = Vec<MessageId>;
}

/// Copy a message without a link to the original message.
///
/// See also: <https://core.telegram.org/bots/api#copymessage>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct CopyMessage {
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub from_chat_id: ChatId,
    pub message_id: i32,

    /// New caption for media. If not specified, the original caption is kept.
    pub caption: Option<String>,

    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for CopyMessage {
    const NAME: &'static str = "copyMessage";

    type Response = MessageId;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct CopyMessages {
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub from_chat_id: ChatId,
    pub message_ids: Vec<i32>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub remove_caption: Option<bool>,
}

impl Method for CopyMessages {
    const NAME: &'static str = "copyMessages";

    type Response = Vec<MessageId>;
}

/// [Send a photo][1].
///
/// [1]: https://core.telegram.org/bots/api#sendphoto
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into), on(InputFileOrString, into))]
#[must_use]
pub struct SendPhoto {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,

    /// Pass a `file_id` to send a photo that exists on the Telegram servers, or an HTTP URL
    /// for Telegram to get a photo from the Internet.
    pub photo: InputFileOrString,

    /// Photo caption, 0-1024 characters after entities parsing.
    pub caption: Option<String>,

    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub has_spoiler: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendPhoto {
    const NAME: &'static str = "sendPhoto";

    type Response = Message;
}

/// Send an audio file to be displayed in the music player. Audio must be in the `.MP3` or `.M4A` format.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into), on(InputFileOrString, into))]
#[must_use]
pub struct SendAudio {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub audio: InputFileOrString,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,

    /// Duration of the audio in seconds.
    pub duration: Option<i32>,

    pub performer: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<InputFileOrString>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendAudio {
    const NAME: &'static str = "sendAudio";

    type Response = Message;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into), on(InputFileOrString, into))]
#[must_use]
pub struct SendDocument {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub document: InputFileOrString,
    pub thumbnail: Option<InputFileOrString>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub disable_content_type_detection: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendDocument {
    const NAME: &'static str = "sendDocument";

    type Response = Message;
}

/// Send a video file. Telegram clients support MPEG4 videos; other formats may be sent as a document.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into), on(InputFileOrString, into))]
#[must_use]
pub struct SendVideo {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub video: InputFileOrString,
    pub duration: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub thumbnail: Option<InputFileOrString>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub has_spoiler: Option<bool>,
    pub supports_streaming: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendVideo {
    const NAME: &'static str = "sendVideo";

    type Response = Message;
}

/// Send an animation file (GIF or H.264/MPEG-4 AVC video without sound).
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into), on(InputFileOrString, into))]
#[must_use]
pub struct SendAnimation {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub animation: InputFileOrString,
    pub duration: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub thumbnail: Option<InputFileOrString>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub has_spoiler: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendAnimation {
    const NAME: &'static str = "sendAnimation";

    type Response = Message;
}

/// Send an audio file to be displayed as a playable voice message, encoded with OPUS, MP3 or M4A.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into), on(InputFileOrString, into))]
#[must_use]
pub struct SendVoice {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub voice: InputFileOrString,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: Option<i32>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendVoice {
    const NAME: &'static str = "sendVoice";

    type Response = Message;
}

/// Send a rounded square MPEG4 video of up to 1 minute long.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into), on(InputFileOrString, into))]
#[must_use]
pub struct SendVideoNote {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,

    /// Sending video notes by a URL is currently unsupported.
    pub video_note: InputFileOrString,

    pub duration: Option<i32>,

    /// Video width and height, i.e. diameter of the video message.
    pub length: Option<i32>,

    pub thumbnail: Option<InputFileOrString>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendVideoNote {
    const NAME: &'static str = "sendVideoNote";

    type Response = Message;
}

/// Send paid media to channel chats.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendPaidMedia {
    pub chat_id: ChatId,

    /// The number of Telegram Stars that must be paid to buy access to the media.
    pub star_count: i32,

    /// At most 10 items.
    pub media: Vec<InputPaidMedia>,

    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendPaidMedia {
    const NAME: &'static str = "sendPaidMedia";

    type Response = Message;
}

/// Send a group of photos, videos, documents or audios as an album.
///
/// Documents and audio files can be only grouped in an album with messages of the same type.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendMediaGroup {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,

    /// 2-10 items.
    pub media: Vec<InputMedia>,

    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
}

impl Method for SendMediaGroup {
    const NAME: &'static str = "sendMediaGroup";

    type Response = Vec<Message>;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendLocation {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: Option<f64>,

    /// Period in seconds during which the location will be updated, 60-86400, or `0x7FFFFFFF`
    /// for live locations that can be edited indefinitely.
    pub live_period: Option<i32>,

    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendLocation {
    const NAME: &'static str = "sendLocation";

    type Response = Message;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendVenue {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendVenue {
    const NAME: &'static str = "sendVenue";

    type Response = Message;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendContact {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub vcard: Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendContact {
    const NAME: &'static str = "sendContact";

    type Response = Message;
}

/// [Send a native poll][1].
///
/// [1]: https://core.telegram.org/bots/api#sendpoll
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendPoll {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,

    /// Poll question, 1-300 characters.
    pub question: String,

    pub question_parse_mode: Option<ParseMode>,
    pub question_entities: Option<Vec<MessageEntity>>,

    /// 2-10 answer options.
    pub options: Vec<InputPollOption>,

    /// Defaults to `true`.
    pub is_anonymous: Option<bool>,

    #[serde(rename = "type")]
    pub kind: Option<PollType>,

    pub allows_multiple_answers: Option<bool>,

    /// 0-based identifier of the correct answer option, required for polls in quiz mode.
    pub correct_option_id: Option<i32>,

    pub explanation: Option<String>,
    pub explanation_parse_mode: Option<ParseMode>,
    pub explanation_entities: Option<Vec<MessageEntity>>,

    /// Amount of time in seconds the poll will be active after creation, 5-600.
    pub open_period: Option<i32>,

    /// Can't be used together with `open_period`.
    pub close_date: Option<i64>,

    pub is_closed: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendPoll {
    const NAME: &'static str = "sendPoll";

    type Response = Message;
}

/// Send an animated emoji that will display a random value.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendDice {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,

    /// Defaults to 🎲.
    pub emoji: Option<String>,

    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendDice {
    const NAME: &'static str = "sendDice";

    type Response = Message;
}

/// Tell the user that something is happening on the bot's side.
///
/// The status is set for 5 seconds or less, until a message arrives from the bot.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendChatAction {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,
    pub action: ChatAction,
}

impl Method for SendChatAction {
    const NAME: &'static str = "sendChatAction";

    type Response = bool;
}

/// Change the chosen reactions on a message.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct SetMessageReaction {
    pub chat_id: ChatId,
    pub message_id: i32,

    /// Bots can't use paid reactions. Omit to remove the reactions.
    pub reaction: Option<Vec<ReactionType>>,

    /// Set the reaction with a big animation.
    pub is_big: Option<bool>,
}

impl Method for SetMessageReaction {
    const NAME: &'static str = "setMessageReaction";

    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{InlineKeyboardButton, InputMediaPhoto};

    #[test]
    fn test_send_message_minimal_ok() -> Result {
        let request =
            SendMessage::builder().chat_id(ChatId::Integer(42)).text("hi").build().to_request()?;
        assert_eq!(request.method, "sendMessage");
        let keys: Vec<&str> = request.parameters.keys().map(String::as_str).collect();
        assert_eq!(keys, ["chat_id", "text"]);
        assert_eq!(request.parameters["chat_id"], 42);
        assert_eq!(request.parameters["text"], "hi");
        Ok(())
    }

    #[test]
    fn test_send_message_full_ok() -> Result {
        let request = SendMessage::builder()
            .chat_id("@channel")
            .text("<b>Hello</b>")
            .parse_mode(ParseMode::Html)
            .link_preview_options(LinkPreviewOptions::DISABLED)
            .reply_parameters(ReplyParameters::builder().message_id(7).build())
            .reply_markup(InlineKeyboardButton::with_callback_data("Unsubscribe", "/unsubscribe 1"))
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            // language=json
            serde_json::json!({
                "chat_id": "@channel",
                "text": "<b>Hello</b>",
                "parse_mode": "HTML",
                "link_preview_options": {"is_disabled": true},
                "reply_parameters": {"message_id": 7},
                "reply_markup": {
                    "inline_keyboard": [
                        [{"text": "Unsubscribe", "callback_data": "/unsubscribe 1"}],
                    ],
                },
            }),
        );
        Ok(())
    }

    #[test]
    fn test_send_photo_ok() -> Result {
        let request = SendPhoto::builder()
            .chat_id(42_i64)
            .photo("https://example.org/cat.jpg")
            .caption("Cat")
            .build()
            .to_request()?;
        assert_eq!(request.parameters["photo"], "https://example.org/cat.jpg");
        Ok(())
    }

    #[test]
    fn test_send_media_group_ok() -> Result {
        let request = SendMediaGroup::builder()
            .chat_id(42_i64)
            .media(vec![
                InputMediaPhoto::builder().media("a").build().into(),
                InputMediaPhoto::builder().media("b").has_spoiler(true).build().into(),
            ])
            .build()
            .to_request()?;
        assert_eq!(
            request.parameters["media"],
            // language=json
            serde_json::json!([
                {"type": "photo", "media": "a"},
                {"type": "photo", "media": "b", "has_spoiler": true},
            ]),
        );
        Ok(())
    }

    #[test]
    fn test_send_poll_type_ok() -> Result {
        let request = SendPoll::builder()
            .chat_id(42_i64)
            .question("2 + 2?")
            .options(vec!["3".into(), "4".into()])
            .kind(PollType::Quiz)
            .correct_option_id(1)
            .build()
            .to_request()?;
        assert_eq!(request.parameters["type"], "quiz");
        assert_eq!(
            request.parameters["options"],
            serde_json::json!([{"text": "3"}, {"text": "4"}]),
        );
        Ok(())
    }

    #[test]
    fn test_send_message_response_ok() -> Result {
        // language=json
        let message = SendMessage::decode_response(serde_json::json!({
            "message_id": 1,
            "date": 1700000000,
            "chat": {"id": 42, "type": "private"},
            "text": "hi"
        }))?;
        assert_eq!(message.id, 1);
        assert_eq!(message.text.as_deref(), Some("hi"));
        Ok(())
    }
}
