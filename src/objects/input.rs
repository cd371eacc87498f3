//! Files and media to be sent.

use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    codec::deserialize_first_match,
    objects::{MessageEntity, ParseMode},
    prelude::*,
};

/// The contents of a file to be uploaded.
///
/// Uploads are posted as `multipart/form-data`, which this crate does not produce, so the
/// placeholder carries no data and encodes as an empty object. Decoding accepts nothing but
/// the empty object, so any other object falls through to the next union candidate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[must_use]
pub struct InputFile {}

/// A file to be sent: either an upload, or a string referring to a file.
///
/// The string is a `file_id` of a file that exists on the Telegram servers, an HTTP URL for
/// Telegram to fetch, or `attach://<name>` pointing to a multipart part.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum InputFileOrString {
    Upload(InputFile),
    Reference(String),
}

deserialize_first_match!(InputFileOrString { Upload, Reference });

impl From<InputFile> for InputFileOrString {
    fn from(file: InputFile) -> Self {
        Self::Upload(file)
    }
}

impl From<String> for InputFileOrString {
    fn from(reference: String) -> Self {
        Self::Reference(reference)
    }
}

impl From<&str> for InputFileOrString {
    fn from(reference: &str) -> Self {
        Self::Reference(reference.to_owned())
    }
}

/// The content of a media message to be sent, dispatched on `type`.
///
/// See also: <https://core.telegram.org/bots/api#inputmedia>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum InputMedia {
    Animation(InputMediaAnimation),
    Document(InputMediaDocument),
    Audio(InputMediaAudio),
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(media: InputMediaPhoto) -> Self {
        Self::Photo(media)
    }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(media: InputMediaVideo) -> Self {
        Self::Video(media)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(InputFileOrString, into))]
#[must_use]
pub struct InputMediaPhoto {
    pub media: InputFileOrString,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub has_spoiler: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(InputFileOrString, into))]
#[must_use]
pub struct InputMediaVideo {
    pub media: InputFileOrString,

    /// Ignored if the file is not uploaded using `multipart/form-data`.
    pub thumbnail: Option<InputFileOrString>,

    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
    pub supports_streaming: Option<bool>,
    pub has_spoiler: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(InputFileOrString, into))]
#[must_use]
pub struct InputMediaAnimation {
    pub media: InputFileOrString,
    pub thumbnail: Option<InputFileOrString>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
    pub has_spoiler: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(InputFileOrString, into))]
#[must_use]
pub struct InputMediaAudio {
    pub media: InputFileOrString,
    pub thumbnail: Option<InputFileOrString>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: Option<i32>,
    pub performer: Option<String>,
    pub title: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(InputFileOrString, into))]
#[must_use]
pub struct InputMediaDocument {
    pub media: InputFileOrString,
    pub thumbnail: Option<InputFileOrString>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,

    /// Disables automatic server-side content type detection for uploaded files.
    pub disable_content_type_detection: Option<bool>,
}

/// Paid media to be sent, dispatched on `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum InputPaidMedia {
    Photo(InputPaidMediaPhoto),
    Video(InputPaidMediaVideo),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(InputFileOrString, into))]
#[must_use]
pub struct InputPaidMediaPhoto {
    pub media: InputFileOrString,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(InputFileOrString, into))]
#[must_use]
pub struct InputPaidMediaVideo {
    pub media: InputFileOrString,
    pub thumbnail: Option<InputFileOrString>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
    pub supports_streaming: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_file_or_string_ok() -> Result {
        assert_eq!(decode_str::<InputFileOrString>("{}")?, InputFileOrString::Upload(InputFile {}));
        assert_eq!(
            decode_str::<InputFileOrString>(r#""attach://photo""#)?,
            InputFileOrString::Reference("attach://photo".to_owned()),
        );
        assert_eq!(encode(&InputFileOrString::from("AgADBAAD"))?, serde_json::json!("AgADBAAD"));
        Ok(())
    }

    #[test]
    fn test_file_or_string_fails() {
        let error = decode_str::<InputFileOrString>("42").unwrap_err();
        assert!(error.to_string().contains("no variant of InputFileOrString matched"), "{error}");

        // language=json
        let error = decode_str::<InputFileOrString>(r#"{"file_id": "x"}"#).unwrap_err();
        assert!(error.to_string().contains("no variant of InputFileOrString matched"), "{error}");
    }

    #[test]
    fn test_input_media_ok() -> Result {
        let media = InputMedia::from(
            InputMediaPhoto::builder().media("https://example.org/cat.jpg").caption("Cat").build(),
        );
        assert_eq!(
            encode(&media)?,
            // language=json
            serde_json::json!({
                "type": "photo",
                "media": "https://example.org/cat.jpg",
                "caption": "Cat",
            }),
        );

        // language=json
        let decoded: InputMedia =
            decode_str(r#"{"type": "video", "media": "id", "supports_streaming": true}"#)?;
        let InputMedia::Video(video) = decoded else {
            panic!("expected a video, got {decoded:?}");
        };
        assert_eq!(video.supports_streaming, Some(true));
        Ok(())
    }

    #[test]
    fn test_input_paid_media_ok() -> Result {
        let media = InputPaidMedia::Photo(InputPaidMediaPhoto::builder().media("id").build());
        assert_eq!(encode(&media)?, serde_json::json!({"type": "photo", "media": "id"}));
        Ok(())
    }
}
