use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    methods::Method,
    objects::{
        ChatId, File, InputFile, InputFileOrString, InputSticker, MaskPosition, Message,
        ReplyMarkup, ReplyParameters, Sticker, StickerFormat, StickerSet, StickerType,
    },
    prelude::*,
};

/// Send a static `.WEBP`, [animated][1] `.TGS`, or [video][2] `.WEBM` sticker.
///
/// [1]: https://telegram.org/blog/animated-stickers
/// [2]: https://telegram.org/blog/video-stickers-better-reactions
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into), on(InputFileOrString, into))]
#[must_use]
pub struct SendSticker {
    pub business_connection_id: Option<String>,
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,

    /// Video and animated stickers can't be sent via an HTTP URL.
    pub sticker: InputFileOrString,

    /// Emoji associated with the sticker; only for just uploaded stickers.
    pub emoji: Option<String>,

    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendSticker {
    const NAME: &'static str = "sendSticker";

    type Response = Message;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct GetStickerSet {
    pub name: String,
}

impl Method for GetStickerSet {
    const NAME: &'static str = "getStickerSet";

    type Response = StickerSet;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct GetCustomEmojiStickers {
    /// At most 200 custom emoji identifiers can be specified.
    pub custom_emoji_ids: Vec<String>,
}

impl Method for GetCustomEmojiStickers {
    const NAME: &'static str = "getCustomEmojiStickers";

    type Response = Vec<Sticker>;
}

/// Upload a file with a sticker for later use in the sticker set methods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct UploadStickerFile {
    /// User identifier of sticker file owner.
    pub user_id: i64,

    pub sticker: InputFile,
    pub sticker_format: StickerFormat,
}

impl Method for UploadStickerFile {
    const NAME: &'static str = "uploadStickerFile";

    type Response = File;
}

/// Create a new sticker set owned by a user. The bot will be able to edit the sticker set thus created.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct CreateNewStickerSet {
    pub user_id: i64,

    /// Short name of sticker set, to be used in `t.me/addstickers/` URLs.
    ///
    /// Must end in `_by_<bot_username>`.
    pub name: String,

    pub title: String,

    /// 1-50 initial stickers.
    pub stickers: Vec<InputSticker>,

    /// By default, a regular sticker set is created.
    pub sticker_type: Option<StickerType>,

    /// For custom emoji sticker sets only.
    pub needs_repainting: Option<bool>,
}

impl Method for CreateNewStickerSet {
    const NAME: &'static str = "createNewStickerSet";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct AddStickerToSet {
    pub user_id: i64,
    pub name: String,
    pub sticker: InputSticker,
}

impl Method for AddStickerToSet {
    const NAME: &'static str = "addStickerToSet";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetStickerPositionInSet {
    /// File identifier of the sticker.
    pub sticker: String,

    /// New sticker position in the set, zero-based.
    pub position: i32,
}

impl Method for SetStickerPositionInSet {
    const NAME: &'static str = "setStickerPositionInSet";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct DeleteStickerFromSet {
    pub sticker: String,
}

impl Method for DeleteStickerFromSet {
    const NAME: &'static str = "deleteStickerFromSet";

    type Response = bool;
}

/// Replace an existing sticker in a sticker set with a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct ReplaceStickerInSet {
    pub user_id: i64,
    pub name: String,
    pub old_sticker: String,
    pub sticker: InputSticker,
}

impl Method for ReplaceStickerInSet {
    const NAME: &'static str = "replaceStickerInSet";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetStickerEmojiList {
    pub sticker: String,
    pub emoji_list: Vec<String>,
}

impl Method for SetStickerEmojiList {
    const NAME: &'static str = "setStickerEmojiList";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetStickerKeywords {
    pub sticker: String,
    pub keywords: Option<Vec<String>>,
}

impl Method for SetStickerKeywords {
    const NAME: &'static str = "setStickerKeywords";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetStickerMaskPosition {
    pub sticker: String,

    /// Omit to remove the mask position.
    pub mask_position: Option<MaskPosition>,
}

impl Method for SetStickerMaskPosition {
    const NAME: &'static str = "setStickerMaskPosition";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetStickerSetTitle {
    pub name: String,
    pub title: String,
}

impl Method for SetStickerSetTitle {
    const NAME: &'static str = "setStickerSetTitle";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(InputFileOrString, into))]
#[must_use]
pub struct SetStickerSetThumbnail {
    pub name: String,
    pub user_id: i64,

    /// Omit to drop the thumbnail, in which case the first sticker is used.
    pub thumbnail: Option<InputFileOrString>,

    pub format: StickerFormat,
}

impl Method for SetStickerSetThumbnail {
    const NAME: &'static str = "setStickerSetThumbnail";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetCustomEmojiStickerSetThumbnail {
    pub name: String,
    pub custom_emoji_id: Option<String>,
}

impl Method for SetCustomEmojiStickerSetThumbnail {
    const NAME: &'static str = "setCustomEmojiStickerSetThumbnail";

    type Response = bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct DeleteStickerSet {
    pub name: String,
}

impl Method for DeleteStickerSet {
    const NAME: &'static str = "deleteStickerSet";

    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sticker_to_set_ok() -> Result {
        let sticker = InputSticker::builder()
            .sticker("attach://sticker")
            .format(StickerFormat::Static)
            .emoji_list(vec!["🙂".to_owned()])
            .build();
        let request = AddStickerToSet::builder()
            .user_id(42)
            .name("faces_by_test_bot")
            .sticker(sticker)
            .build()
            .to_request()?;
        assert_eq!(
            request.parameters["sticker"],
            // language=json
            serde_json::json!({
                "sticker": "attach://sticker",
                "format": "static",
                "emoji_list": ["🙂"],
            }),
        );
        Ok(())
    }
}
