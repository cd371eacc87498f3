//! Updating messages.
//!
//! Edits of messages sent by the bot return the edited [`Message`], edits of inline messages
//! return `true`.

use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    Either,
    methods::Method,
    objects::{
        ChatId, InlineKeyboardMarkup, InputMedia, LinkPreviewOptions, Message, MessageEntity,
        ParseMode, Poll,
    },
    prelude::*,
};

/// Edit text and [game][1] messages.
///
/// Either `chat_id` and `message_id`, or `inline_message_id` must be set.
///
/// [1]: https://core.telegram.org/bots/api#games
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct EditMessageText {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageText {
    const NAME: &'static str = "editMessageText";

    type Response = Either<Message, bool>;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct EditMessageCaption {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageCaption {
    const NAME: &'static str = "editMessageCaption";

    type Response = Either<Message, bool>;
}

/// Edit animation, audio, document, photo, or video messages.
///
/// When an inline message is edited, a new file can't be uploaded.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct EditMessageMedia {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub media: InputMedia,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageMedia {
    const NAME: &'static str = "editMessageMedia";

    type Response = Either<Message, bool>;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct EditMessageLiveLocation {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,

    /// New period in seconds during which the location can be updated, starting from the message send date.
    pub live_period: Option<i32>,

    pub horizontal_accuracy: Option<f64>,
    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageLiveLocation {
    const NAME: &'static str = "editMessageLiveLocation";

    type Response = Either<Message, bool>;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct StopMessageLiveLocation {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for StopMessageLiveLocation {
    const NAME: &'static str = "stopMessageLiveLocation";

    type Response = Either<Message, bool>;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct EditMessageReplyMarkup {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,

    /// Omit to remove the inline keyboard.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageReplyMarkup {
    const NAME: &'static str = "editMessageReplyMarkup";

    type Response = Either<Message, bool>;
}

/// Stop a poll which was sent by the bot.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct StopPoll {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_id: i32,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for StopPoll {
    const NAME: &'static str = "stopPoll";

    type Response = Poll;
}

/// Delete a message, including service messages.
///
/// A message can only be deleted if it was sent less than 48 hours ago.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i32,
}

impl Method for DeleteMessage {
    const NAME: &'static str = "deleteMessage";

    type Response = bool;
}

/// Delete multiple messages simultaneously. Messages that can't be found are skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct DeleteMessages {
    pub chat_id: ChatId,

    /// 1-100 identifiers of messages to delete.
    pub message_ids: Vec<i32>,
}

impl Method for DeleteMessages {
    const NAME: &'static str = "deleteMessages";

    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_edit_response_ok() -> Result {
        let response = EditMessageText::decode_response(Value::Bool(true))?;
        assert_eq!(response, Either::Right(true));
        Ok(())
    }

    #[test]
    fn test_chat_edit_response_ok() -> Result {
        // language=json
        let response = EditMessageReplyMarkup::decode_response(serde_json::json!({
            "message_id": 3,
            "date": 1700000000,
            "chat": {"id": 42, "type": "private"}
        }))?;
        assert_eq!(response.left().map(|message| message.id), Some(3));
        Ok(())
    }

    #[test]
    fn test_inline_message_id_only_ok() -> Result {
        let request = EditMessageText::builder()
            .inline_message_id("AAA")
            .text("Updated")
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            serde_json::json!({"inline_message_id": "AAA", "text": "Updated"}),
        );
        Ok(())
    }
}
