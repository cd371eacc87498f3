//! Keyboards and other reply markup.

use bon::Builder;
use monostate::MustBeBool;
use serde_with::skip_serializing_none;

use crate::{
    codec::deserialize_first_match,
    objects::{ChatAdministratorRights, MaybeInaccessibleMessage, PollType, True, User},
    prelude::*,
};

/// Additional interface options attached to a message.
///
/// None of the four shapes carries a discriminant, so they are told apart by their required
/// fields, in this order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    RemoveKeyboard(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

deserialize_first_match!(ReplyMarkup { InlineKeyboard, ReplyKeyboard, RemoveKeyboard, ForceReply });

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::ReplyKeyboard(markup)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        Self::RemoveKeyboard(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

/// Converts a button into a single-button inline keyboard.
impl From<InlineKeyboardButton> for ReplyMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        InlineKeyboardMarkup::single_button(button).into()
    }
}

/// This object represents an [inline keyboard][1] that appears right next to the message it belongs to.
///
/// [1]: https://core.telegram.org/bots/features#inline-keyboards
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn single_button(button: InlineKeyboardButton) -> Self {
        Self { inline_keyboard: vec![vec![button]] }
    }

    pub fn single_row(row: Vec<InlineKeyboardButton>) -> Self {
        Self { inline_keyboard: vec![row] }
    }
}

impl From<Vec<Vec<InlineKeyboardButton>>> for InlineKeyboardMarkup {
    fn from(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard }
    }
}

/// This object represents [one button of an inline keyboard][1].
///
/// Exactly one of the optional fields must be used to specify the type of the button.
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardbutton
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InlineKeyboardButton {
    /// Label text on the button.
    pub text: String,

    /// HTTP or `tg://` URL to be opened when the button is pressed.
    ///
    /// Links `tg://user?id=<user_id>` can be used to mention a user by their identifier
    /// without using a username, if this is allowed by their privacy settings.
    pub url: Option<String>,

    /// Data to be sent in a callback query to the bot when the button is pressed, 1-64 bytes.
    pub callback_data: Option<String>,

    pub web_app: Option<WebAppInfo>,
    pub login_url: Option<LoginUrl>,
    pub switch_inline_query: Option<String>,
    pub switch_inline_query_current_chat: Option<String>,
    pub switch_inline_query_chosen_chat: Option<SwitchInlineQueryChosenChat>,

    /// Must always be the first button in the first row.
    pub callback_game: Option<CallbackGame>,

    /// Must always be the first button in the first row and can only be used in invoice messages.
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    pub fn with_url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::builder().text(text).url(url).build()
    }

    pub fn with_callback_data(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self::builder().text(text).callback_data(callback_data).build()
    }
}

/// A [custom keyboard][1] with reply options.
///
/// [1]: https://core.telegram.org/bots/features#keyboards
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub is_persistent: Option<bool>,
    pub resize_keyboard: Option<bool>,
    pub one_time_keyboard: Option<bool>,

    /// The placeholder to be shown in the input field when the keyboard is active; 1-64 characters.
    pub input_field_placeholder: Option<String>,

    pub selective: Option<bool>,
}

/// One button of the reply keyboard.
///
/// See also: <https://core.telegram.org/bots/api#keyboardbutton>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct KeyboardButton {
    /// If none of the optional fields are used, it will be sent as a message when the button is pressed.
    pub text: String,

    pub request_users: Option<KeyboardButtonRequestUsers>,
    pub request_chat: Option<KeyboardButtonRequestChat>,
    pub request_contact: Option<bool>,
    pub request_location: Option<bool>,
    pub request_poll: Option<KeyboardButtonPollType>,
    pub web_app: Option<WebAppInfo>,
}

impl From<&str> for KeyboardButton {
    fn from(text: &str) -> Self {
        Self::builder().text(text).build()
    }
}

/// <https://core.telegram.org/bots/api#keyboardbuttonrequestusers>
#[skip_serializing_none]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct KeyboardButtonRequestUsers {
    /// Must be unique within the message.
    pub request_id: i32,

    pub user_is_bot: Option<bool>,
    pub user_is_premium: Option<bool>,
    pub max_quantity: Option<i32>,
    pub request_name: Option<bool>,
    pub request_username: Option<bool>,
    pub request_photo: Option<bool>,
}

/// <https://core.telegram.org/bots/api#keyboardbuttonrequestchat>
#[skip_serializing_none]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct KeyboardButtonRequestChat {
    pub request_id: i32,
    pub chat_is_channel: bool,
    pub chat_is_forum: Option<bool>,
    pub chat_has_username: Option<bool>,
    pub chat_is_created: Option<bool>,
    pub user_administrator_rights: Option<ChatAdministratorRights>,
    pub bot_administrator_rights: Option<ChatAdministratorRights>,
    pub bot_is_member: Option<bool>,
    pub request_title: Option<bool>,
    pub request_username: Option<bool>,
    pub request_photo: Option<bool>,
}

#[skip_serializing_none]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct KeyboardButtonPollType {
    /// If omitted, the user will be allowed to create a poll of any type.
    #[serde(rename = "type")]
    pub kind: Option<PollType>,
}

/// Removes the current custom keyboard and displays the default letter-keyboard.
///
/// See also: <https://core.telegram.org/bots/api#replykeyboardremove>.
#[skip_serializing_none]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: True,
    pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self { remove_keyboard: MustBeBool::<true>, selective: None }
    }
}

/// Displays a reply interface to the user, as if they had selected the bot's message and tapped «Reply».
///
/// See also: <https://core.telegram.org/bots/api#forcereply>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ForceReply {
    pub force_reply: True,
    pub input_field_placeholder: Option<String>,
    pub selective: Option<bool>,
}

impl Default for ForceReply {
    fn default() -> Self {
        Self { force_reply: MustBeBool::<true>, input_field_placeholder: None, selective: None }
    }
}

/// <https://core.telegram.org/bots/api#loginurl>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct LoginUrl {
    /// An HTTPS URL to be opened with user authorization data added to the query string.
    pub url: String,

    pub forward_text: Option<String>,
    pub bot_username: Option<String>,
    pub request_write_access: Option<bool>,
}

/// <https://core.telegram.org/bots/api#switchinlinequerychosenchat>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SwitchInlineQueryChosenChat {
    pub query: Option<String>,
    pub allow_user_chats: Option<bool>,
    pub allow_bot_chats: Option<bool>,
    pub allow_group_chats: Option<bool>,
    pub allow_channel_chats: Option<bool>,
}

/// Placeholder, currently holds no information.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct CallbackGame {}

/// Describes a [Web App][1].
///
/// [1]: https://core.telegram.org/bots/webapps
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct WebAppInfo {
    pub url: String,
}

/// An incoming callback query from a callback button in an [inline keyboard][1].
///
/// [1]: https://core.telegram.org/bots/features#inline-keyboards
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,

    /// Not available if the message is too old.
    pub message: Option<MaybeInaccessibleMessage>,

    pub inline_message_id: Option<String>,

    /// Global identifier, uniquely corresponding to the chat to which the message with the
    /// callback button was sent. Useful for high scores in games.
    pub chat_instance: String,

    pub data: Option<String>,
    pub game_short_name: Option<String>,
}
