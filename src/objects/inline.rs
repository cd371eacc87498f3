//! Inline mode.

use bon::Builder;
use serde::{Deserializer, Serializer, de};
use serde_with::skip_serializing_none;

use crate::{
    codec::{Trial, deserialize_first_match, discriminant, serialize_tagged},
    objects::{
        ChatType, InlineKeyboardMarkup, LabeledPrice, LinkPreviewOptions, Location, MessageEntity,
        ParseMode, User, WebAppInfo,
    },
    prelude::*,
};

/// An incoming inline query.
///
/// See also: <https://core.telegram.org/bots/api#inlinequery>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct InlineQuery {
    pub id: String,
    pub from: User,

    /// Text of the query, up to 256 characters.
    pub query: String,

    /// Offset of the results to be returned, can be controlled by the bot.
    pub offset: String,

    /// Type of the chat from which the inline query was sent.
    pub chat_type: Option<ChatType>,

    /// Only for bots that request user location.
    pub location: Option<Location>,
}

/// A button to be shown above inline query results.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultsButton {
    pub text: String,
    pub web_app: Option<WebAppInfo>,

    /// [Deep-linking][1] parameter for the `/start` message sent to the bot when the user presses the button.
    ///
    /// [1]: https://core.telegram.org/bots/features#deep-linking
    pub start_parameter: Option<String>,
}

/// A result of an inline query that was chosen by the user and sent to their chat partner.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    pub location: Option<Location>,

    /// Available only if there is an inline keyboard attached to the message.
    pub inline_message_id: Option<String>,

    pub query: String,
}

/// An inline message sent by a Web App on behalf of a user.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct SentWebAppMessage {
    pub inline_message_id: Option<String>,
}

/// One result of an inline query.
///
/// Dispatched on `type`. Cached results share their `type` with the URL-based ones and are
/// told apart by the required `*_file_id` or `*_url` field, URL-based first.
///
/// See also: <https://core.telegram.org/bots/api#inlinequeryresult>.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum InlineQueryResult {
    CachedAudio(InlineQueryResultCachedAudio),
    CachedDocument(InlineQueryResultCachedDocument),
    CachedGif(InlineQueryResultCachedGif),
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    CachedPhoto(InlineQueryResultCachedPhoto),
    CachedSticker(InlineQueryResultCachedSticker),
    CachedVideo(InlineQueryResultCachedVideo),
    CachedVoice(InlineQueryResultCachedVoice),
    Article(InlineQueryResultArticle),
    Audio(InlineQueryResultAudio),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
    Document(InlineQueryResultDocument),
    Gif(InlineQueryResultGif),
    Location(InlineQueryResultLocation),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Photo(InlineQueryResultPhoto),
    Venue(InlineQueryResultVenue),
    Video(InlineQueryResultVideo),
    Voice(InlineQueryResultVoice),
}

impl InlineQueryResult {
    const TYPES: &'static [&'static str] = &[
        "article",
        "audio",
        "contact",
        "document",
        "game",
        "gif",
        "location",
        "mpeg4_gif",
        "photo",
        "sticker",
        "venue",
        "video",
        "voice",
    ];

    /// Value of the `type` discriminant.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Article(_) => "article",
            Self::Audio(_) | Self::CachedAudio(_) => "audio",
            Self::Contact(_) => "contact",
            Self::Document(_) | Self::CachedDocument(_) => "document",
            Self::Game(_) => "game",
            Self::Gif(_) | Self::CachedGif(_) => "gif",
            Self::Location(_) => "location",
            Self::Mpeg4Gif(_) | Self::CachedMpeg4Gif(_) => "mpeg4_gif",
            Self::Photo(_) | Self::CachedPhoto(_) => "photo",
            Self::CachedSticker(_) => "sticker",
            Self::Venue(_) => "venue",
            Self::Video(_) | Self::CachedVideo(_) => "video",
            Self::Voice(_) | Self::CachedVoice(_) => "voice",
        }
    }
}

impl Serialize for InlineQueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.type_name();
        match self {
            Self::CachedAudio(result) => serialize_tagged(serializer, "type", tag, result),
            Self::CachedDocument(result) => serialize_tagged(serializer, "type", tag, result),
            Self::CachedGif(result) => serialize_tagged(serializer, "type", tag, result),
            Self::CachedMpeg4Gif(result) => serialize_tagged(serializer, "type", tag, result),
            Self::CachedPhoto(result) => serialize_tagged(serializer, "type", tag, result),
            Self::CachedSticker(result) => serialize_tagged(serializer, "type", tag, result),
            Self::CachedVideo(result) => serialize_tagged(serializer, "type", tag, result),
            Self::CachedVoice(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Article(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Audio(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Contact(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Game(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Document(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Gif(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Location(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Mpeg4Gif(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Photo(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Venue(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Video(result) => serialize_tagged(serializer, "type", tag, result),
            Self::Voice(result) => serialize_tagged(serializer, "type", tag, result),
        }
    }
}

impl<'de> Deserialize<'de> for InlineQueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let trial = Trial::new("InlineQueryResult", &value);
        let trial = match discriminant::<D::Error>(&value, "type")? {
            "article" => trial.or(Self::Article),
            "audio" => trial.or(Self::Audio).or(Self::CachedAudio),
            "contact" => trial.or(Self::Contact),
            "document" => trial.or(Self::Document).or(Self::CachedDocument),
            "game" => trial.or(Self::Game),
            "gif" => trial.or(Self::Gif).or(Self::CachedGif),
            "location" => trial.or(Self::Location),
            "mpeg4_gif" => trial.or(Self::Mpeg4Gif).or(Self::CachedMpeg4Gif),
            "photo" => trial.or(Self::Photo).or(Self::CachedPhoto),
            "sticker" => trial.or(Self::CachedSticker),
            "venue" => trial.or(Self::Venue),
            "video" => trial.or(Self::Video).or(Self::CachedVideo),
            "voice" => trial.or(Self::Voice).or(Self::CachedVoice),
            unknown => return Err(de::Error::unknown_variant(unknown, Self::TYPES)),
        };
        trial.finish()
    }
}

macro_rules! impl_from_result {
    ($($variant:ident($result:ident)),+ $(,)?) => {
        $(
            impl From<$result> for InlineQueryResult {
                fn from(result: $result) -> Self {
                    Self::$variant(result)
                }
            }
        )+
    };
}

impl_from_result!(
    CachedAudio(InlineQueryResultCachedAudio),
    CachedDocument(InlineQueryResultCachedDocument),
    CachedGif(InlineQueryResultCachedGif),
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    CachedPhoto(InlineQueryResultCachedPhoto),
    CachedSticker(InlineQueryResultCachedSticker),
    CachedVideo(InlineQueryResultCachedVideo),
    CachedVoice(InlineQueryResultCachedVoice),
    Article(InlineQueryResultArticle),
    Audio(InlineQueryResultAudio),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
    Document(InlineQueryResultDocument),
    Gif(InlineQueryResultGif),
    Location(InlineQueryResultLocation),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Photo(InlineQueryResultPhoto),
    Venue(InlineQueryResultVenue),
    Video(InlineQueryResultVideo),
    Voice(InlineQueryResultVoice),
);

/// A link to an article or web page.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultArticle {
    /// Unique identifier for this result, 1-64 bytes.
    pub id: String,

    pub title: String,
    pub input_message_content: InputMessageContent,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub url: Option<String>,

    /// Pass `true` if you don't want the URL to be shown in the message.
    pub hide_url: Option<bool>,

    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: Option<i32>,
    pub thumbnail_height: Option<i32>,
}

/// A link to a photo. By default, this photo will be sent by the user with optional caption.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultPhoto {
    pub id: String,

    /// A valid URL of the photo. Photo must be in JPEG format, size must not exceed 5MB.
    pub photo_url: String,

    pub thumbnail_url: String,
    pub photo_width: Option<i32>,
    pub photo_height: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,

    /// Content of the message to be sent instead of the photo.
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,
    pub gif_width: Option<i32>,
    pub gif_height: Option<i32>,
    pub gif_duration: Option<i32>,
    pub thumbnail_url: String,

    /// `image/jpeg`, `image/gif`, or `video/mp4`. Defaults to `image/jpeg`.
    pub thumbnail_mime_type: Option<String>,

    pub title: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a video animation (H.264/MPEG-4 AVC video without sound).
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultMpeg4Gif {
    pub id: String,
    pub mpeg4_url: String,
    pub mpeg4_width: Option<i32>,
    pub mpeg4_height: Option<i32>,
    pub mpeg4_duration: Option<i32>,
    pub thumbnail_url: String,
    pub thumbnail_mime_type: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a page containing an embedded video player or a video file.
///
/// If the result contains an embedded video (e.g., YouTube), `input_message_content` must be set.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,

    /// `text/html` or `video/mp4`.
    pub mime_type: String,

    pub thumbnail_url: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub video_width: Option<i32>,
    pub video_height: Option<i32>,
    pub video_duration: Option<i32>,
    pub description: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultAudio {
    pub id: String,
    pub audio_url: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub performer: Option<String>,
    pub audio_duration: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultVoice {
    pub id: String,
    pub voice_url: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub voice_duration: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a file. Currently, only `.PDF` and `.ZIP` files can be sent using this method.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultDocument {
    pub id: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub document_url: String,

    /// `application/pdf` or `application/zip`.
    pub mime_type: String,

    pub description: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: Option<i32>,
    pub thumbnail_height: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,

    /// The radius of uncertainty for the location, measured in meters; 0-1500.
    pub horizontal_accuracy: Option<f64>,

    /// Period in seconds during which the location can be updated.
    pub live_period: Option<i32>,

    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: Option<i32>,
    pub thumbnail_height: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultVenue {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: Option<i32>,
    pub thumbnail_height: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultContact {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,

    /// Additional data about the contact in the form of a vCard, 0-2048 bytes.
    pub vcard: Option<String>,

    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: Option<i32>,
    pub thumbnail_height: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultGame {
    pub id: String,
    pub game_short_name: String,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultCachedPhoto {
    pub id: String,

    /// A valid file identifier of the photo.
    pub photo_file_id: String,

    pub title: Option<String>,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultCachedGif {
    pub id: String,
    pub gif_file_id: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultCachedMpeg4Gif {
    pub id: String,
    pub mpeg4_file_id: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultCachedSticker {
    pub id: String,
    pub sticker_file_id: String,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultCachedDocument {
    pub id: String,
    pub title: String,
    pub document_file_id: String,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultCachedVideo {
    pub id: String,
    pub video_file_id: String,
    pub title: String,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultCachedVoice {
    pub id: String,
    pub voice_file_id: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineQueryResultCachedAudio {
    pub id: String,
    pub audio_file_id: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// The content of a message to be sent as a result of an inline query.
///
/// The content carries no discriminant. Candidates are tried in declared order, so the venue
/// precedes the location it is a superset of.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
    Contact(InputContactMessageContent),
    Invoice(InputInvoiceMessageContent),
}

deserialize_first_match!(InputMessageContent { Text, Venue, Location, Contact, Invoice });

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(content: InputTextMessageContent) -> Self {
        Self::Text(content)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InputTextMessageContent {
    /// Text of the message to be sent, 1-4096 characters.
    pub message_text: String,

    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub link_preview_options: Option<LinkPreviewOptions>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: Option<f64>,
    pub live_period: Option<i32>,
    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub vcard: Option<String>,
}

/// Content of an invoice message to be sent as the result of an inline query.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InputInvoiceMessageContent {
    pub title: String,
    pub description: String,

    /// Bot-defined invoice payload, 1-128 bytes. This will not be displayed to the user.
    pub payload: String,

    /// Pass an empty string for payments in Telegram Stars.
    pub provider_token: Option<String>,

    /// Three-letter ISO 4217 currency code, `XTR` for payments in Telegram Stars.
    pub currency: String,

    pub prices: Vec<LabeledPrice>,
    pub max_tip_amount: Option<i32>,
    pub suggested_tip_amounts: Option<Vec<i32>>,
    pub provider_data: Option<String>,
    pub photo_url: Option<String>,
    pub photo_size: Option<i32>,
    pub photo_width: Option<i32>,
    pub photo_height: Option<i32>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    pub send_phone_number_to_provider: Option<bool>,
    pub send_email_to_provider: Option<bool>,
    pub is_flexible: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_cached_photo_ok() -> Result {
        // language=json
        let result: InlineQueryResult =
            decode_str(r#"{"type": "photo", "id": "1", "photo_file_id": "AgAD"}"#)?;
        let InlineQueryResult::CachedPhoto(photo) = &result else {
            panic!("expected a cached photo, got {result:?}");
        };
        assert_eq!(photo.photo_file_id, "AgAD");
        Ok(())
    }

    #[test]
    fn test_fresh_photo_ok() -> Result {
        // language=json
        let result: InlineQueryResult = decode_str(
            r#"{
                "type": "photo",
                "id": "1",
                "photo_url": "https://example.org/a.jpg",
                "thumbnail_url": "https://example.org/t.jpg"
            }"#,
        )?;
        assert!(matches!(result, InlineQueryResult::Photo(_)));
        Ok(())
    }

    #[test]
    fn test_discriminant_beats_shape_ok() -> Result {
        // Shaped like a cached sticker as well, but the discriminant says `voice`.
        // language=json
        let result: InlineQueryResult = decode_str(
            r#"{
                "type": "voice",
                "id": "1",
                "voice_file_id": "v",
                "sticker_file_id": "s",
                "title": "T"
            }"#,
        )?;
        assert!(matches!(result, InlineQueryResult::CachedVoice(_)));
        Ok(())
    }

    #[test]
    fn test_unknown_type_fails() {
        // language=json
        let error =
            decode_str::<InlineQueryResult>(r#"{"type": "hologram", "id": "1"}"#).unwrap_err();
        assert!(error.to_string().contains("unknown variant `hologram`"), "{error}");
    }

    #[test]
    fn test_shared_type_exhausted_fails() {
        // language=json
        let error = decode_str::<InlineQueryResult>(r#"{"type": "gif", "id": "1"}"#).unwrap_err();
        assert!(error.to_string().contains("no variant of InlineQueryResult matched"), "{error}");
    }

    #[test]
    fn test_encode_writes_type_ok() -> Result {
        let result = InlineQueryResult::from(
            InlineQueryResultArticle::builder()
                .id("1")
                .title("Hello")
                .input_message_content(
                    InputTextMessageContent::builder().message_text("Hi").build().into(),
                )
                .build(),
        );
        assert_eq!(
            encode(&result)?,
            // language=json
            serde_json::json!({
                "type": "article",
                "id": "1",
                "title": "Hello",
                "input_message_content": {"message_text": "Hi"},
            }),
        );
        Ok(())
    }

    #[test]
    fn test_round_trip_ok() -> Result {
        let result = InlineQueryResult::from(
            InlineQueryResultCachedDocument::builder()
                .id("1")
                .title("Report")
                .document_file_id("BQAD")
                .build(),
        );
        assert_eq!(decode_str::<InlineQueryResult>(&encode(&result)?.to_string())?, result);
        Ok(())
    }

    #[test]
    fn test_venue_precedes_location_ok() -> Result {
        // Also a valid location.
        // language=json
        let content: InputMessageContent = decode_str(
            r#"{"latitude": 52.37, "longitude": 4.89, "title": "Dam", "address": "Dam 1"}"#,
        )?;
        assert!(matches!(content, InputMessageContent::Venue(_)));

        // language=json
        let content: InputMessageContent = decode_str(r#"{"latitude": 52.37, "longitude": 4.89}"#)?;
        assert!(matches!(content, InputMessageContent::Location(_)));
        Ok(())
    }

    #[test]
    fn test_input_message_content_exhausted_fails() {
        // language=json
        let error = decode_str::<InputMessageContent>(r#"{"title": "Invoice without prices"}"#)
            .unwrap_err();
        assert!(error.to_string().contains("no variant of InputMessageContent matched"), "{error}");
    }
}
