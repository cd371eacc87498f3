//! Stickers and sticker sets.

use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    objects::{File, InputFileOrString, PhotoSize},
    prelude::*,
};

/// This object represents a sticker.
///
/// See also: <https://core.telegram.org/bots/api#sticker>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,

    /// The type of the sticker is independent of its format.
    #[serde(rename = "type")]
    pub kind: StickerType,

    pub width: i32,
    pub height: i32,
    pub is_animated: bool,
    pub is_video: bool,
    pub thumbnail: Option<PhotoSize>,
    pub emoji: Option<String>,
    pub set_name: Option<String>,
    pub premium_animation: Option<File>,
    pub mask_position: Option<MaskPosition>,
    pub custom_emoji_id: Option<String>,

    /// The sticker must be repainted to a text color in messages.
    pub needs_repainting: Option<bool>,

    pub file_size: Option<i64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum StickerType {
    Regular,
    Mask,
    CustomEmoji,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum StickerFormat {
    /// `.WEBP` or `.PNG`.
    Static,

    /// `.TGS`.
    Animated,

    /// `.WEBM`.
    Video,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub sticker_type: StickerType,
    pub stickers: Vec<Sticker>,
    pub thumbnail: Option<PhotoSize>,
}

/// The part of the face relative to which the mask should be placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

/// The position on faces where a mask should be placed by default.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct MaskPosition {
    pub point: MaskPoint,

    /// Shift by X-axis measured in widths of the mask scaled to the face size, from left to right.
    pub x_shift: f64,

    /// Shift by Y-axis measured in heights of the mask scaled to the face size, from top to bottom.
    pub y_shift: f64,

    pub scale: f64,
}

/// A sticker to be added to a sticker set.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(InputFileOrString, into))]
#[must_use]
pub struct InputSticker {
    pub sticker: InputFileOrString,
    pub format: StickerFormat,

    /// 1-20 emoji associated with the sticker.
    pub emoji_list: Vec<String>,

    /// For `mask` stickers only.
    pub mask_position: Option<MaskPosition>,

    /// For `regular` and `custom_emoji` stickers only; 0-20 search keywords.
    pub keywords: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_str;

    #[test]
    fn test_sticker_ok() -> Result {
        // language=json
        let sticker: Sticker = decode_str(
            r#"{
                "file_id": "a",
                "file_unique_id": "b",
                "type": "mask",
                "width": 512,
                "height": 512,
                "is_animated": false,
                "is_video": false,
                "mask_position": {"point": "eyes", "x_shift": -0.5, "y_shift": 0.25, "scale": 1.5}
            }"#,
        )?;
        assert_eq!(sticker.kind, StickerType::Mask);
        assert_eq!(sticker.mask_position.map(|position| position.point), Some(MaskPoint::Eyes));
        Ok(())
    }
}
