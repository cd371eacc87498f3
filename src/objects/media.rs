//! Files, media and locations found inside messages.

use serde_with::skip_serializing_none;

use crate::{objects::Chat, prelude::*};

/// One size of a photo or a [file][1] / [sticker][2] thumbnail.
///
/// [1]: https://core.telegram.org/bots/api#document
/// [2]: https://core.telegram.org/bots/api#sticker
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PhotoSize {
    /// Identifier for this file, which can be used to download or reuse the file.
    pub file_id: String,

    /// Unique identifier for this file, which is supposed to be the same over time and for
    /// different bots. Can't be used to download or reuse the file.
    pub file_unique_id: String,

    pub width: i32,
    pub height: i32,
    pub file_size: Option<i64>,
}

/// Animation file (GIF or H.264/MPEG-4 AVC video without sound).
///
/// See also: <https://core.telegram.org/bots/api#animation>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Animation {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,

    /// Duration of the video in seconds as defined by the sender.
    pub duration: i32,

    pub thumbnail: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// <https://core.telegram.org/bots/api#audio>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Audio {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i32,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,

    /// Thumbnail of the album cover to which the music file belongs.
    pub thumbnail: Option<PhotoSize>,
}

/// General file, as opposed to photos, voice messages and audio files.
///
/// See also: <https://core.telegram.org/bots/api#document>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    pub thumbnail: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// <https://core.telegram.org/bots/api#video>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Video {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    pub thumbnail: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// Round [video message][1].
///
/// [1]: https://telegram.org/blog/video-messages-and-telescope
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct VideoNote {
    pub file_id: String,
    pub file_unique_id: String,

    /// Video width and height (diameter of the video message) as defined by the sender.
    pub length: i32,

    pub duration: i32,
    pub thumbnail: Option<PhotoSize>,
    pub file_size: Option<i64>,
}

/// <https://core.telegram.org/bots/api#voice>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Voice {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i32,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// A file ready to be downloaded.
///
/// The file can be downloaded via `https://api.telegram.org/file/bot<token>/<file_path>`.
/// The link is guaranteed to be valid for at least 1 hour.
///
/// See also: <https://core.telegram.org/bots/api#file>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: Option<i64>,
    pub file_path: Option<String>,
}

/// <https://core.telegram.org/bots/api#story>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Story {
    pub chat: Chat,
    pub id: i64,
}

/// <https://core.telegram.org/bots/api#contact>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub user_id: Option<i64>,

    /// Additional data about the contact in the form of a [vCard][1].
    ///
    /// [1]: https://en.wikipedia.org/wiki/VCard
    pub vcard: Option<String>,
}

/// Animated emoji that displays a random value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Dice {
    pub emoji: String,

    /// 1-6 for «🎲», «🎯» and «🎳» base emoji, 1-5 for «🏀» and «⚽», and 1-64 for «🎰».
    pub value: i32,
}

/// Point on the map.
///
/// See also: <https://core.telegram.org/bots/api#location>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,

    /// The radius of uncertainty for the location, measured in meters; 0-1500.
    pub horizontal_accuracy: Option<f64>,

    /// For live locations only.
    pub live_period: Option<i32>,

    /// For live locations only.
    pub heading: Option<i32>,

    /// For live locations only.
    pub proximity_alert_radius: Option<i32>,
}

/// <https://core.telegram.org/bots/api#venue>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Venue {
    /// Can't be a live location.
    pub location: Location,

    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
}

/// Paid media added to a message.
///
/// See also: <https://core.telegram.org/bots/api#paidmediainfo>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PaidMediaInfo {
    pub star_count: i32,
    pub paid_media: Vec<PaidMedia>,
}

/// <https://core.telegram.org/bots/api#paidmedia>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum PaidMedia {
    /// The media isn't available before the payment.
    Preview(PaidMediaPreview),

    Photo(PaidMediaPhoto),
    Video(PaidMediaVideo),
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PaidMediaPreview {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PaidMediaPhoto {
    pub photo: Vec<PhotoSize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PaidMediaVideo {
    pub video: Video,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, decode_str, encode};

    #[test]
    fn test_paid_media_by_type_ok() -> Result {
        // language=json
        let info: PaidMediaInfo = decode_str(
            r#"{
                "star_count": 10,
                "paid_media": [
                    {"type": "preview", "width": 640},
                    {
                        "type": "photo",
                        "photo": [{"file_id": "a", "file_unique_id": "b", "width": 1, "height": 1}]
                    }
                ]
            }"#,
        )?;
        assert_eq!(
            info.paid_media[0],
            PaidMedia::Preview(PaidMediaPreview {
                width: Some(640),
                ..PaidMediaPreview::default()
            }),
        );
        assert!(matches!(&info.paid_media[1], PaidMedia::Photo(photo) if photo.photo.len() == 1));
        assert_eq!(decode::<PaidMediaInfo>(encode(&info)?)?, info);
        Ok(())
    }

    #[test]
    fn test_empty_preview_ok() -> Result {
        // The preview carries nothing but its discriminant.
        let media: PaidMedia = decode_str(r#"{"type": "preview"}"#)?;
        assert_eq!(media, PaidMedia::Preview(PaidMediaPreview::default()));
        assert_eq!(encode(&media)?, serde_json::json!({"type": "preview"}));
        Ok(())
    }

    #[test]
    fn test_venue_round_trip_ok() -> Result {
        // language=json
        let venue: Venue = decode_str(
            r#"{
                "location": {"latitude": 52.37, "longitude": 4.89},
                "title": "Dam Square",
                "address": "Dam, Amsterdam"
            }"#,
        )?;
        assert_eq!(venue.location.horizontal_accuracy, None);
        assert_eq!(decode::<Venue>(encode(&venue)?)?, venue);
        Ok(())
    }
}
