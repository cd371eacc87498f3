use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    methods::Method,
    objects::{
        BotCommand, BotCommandScope, BotDescription, BotName, BotShortDescription,
        BusinessConnection, ChatAdministratorRights, ChatId, File, MenuButton, User, UserChatBoosts,
        UserProfilePhotos,
    },
    prelude::*,
};

/// A simple method for testing your bot's authentication token.
///
/// See also: <https://core.telegram.org/bots/api#getme>.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GetMe {}

impl Method for GetMe {
    const NAME: &'static str = "getMe";

    type Response = User;
}

/// Log out from the cloud Bot API server before launching the bot locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct LogOut {}

impl Method for LogOut {
    const NAME: &'static str = "logOut";

    type Response = bool;
}

/// Close the bot instance before moving it from one local server to another.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Close {}

impl Method for Close {
    const NAME: &'static str = "close";

    type Response = bool;
}

/// Change the list of the bot's commands.
///
/// See also: <https://core.telegram.org/bots/api#setmycommands>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetMyCommands {
    /// At most 100 commands can be specified.
    pub commands: Vec<BotCommand>,

    pub scope: Option<BotCommandScope>,

    /// If empty, commands will be applied to all users from the given scope, for whose language
    /// there are no dedicated commands.
    pub language_code: Option<String>,
}

impl Method for SetMyCommands {
    const NAME: &'static str = "setMyCommands";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct DeleteMyCommands {
    pub scope: Option<BotCommandScope>,
    pub language_code: Option<String>,
}

impl Method for DeleteMyCommands {
    const NAME: &'static str = "deleteMyCommands";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct GetMyCommands {
    pub scope: Option<BotCommandScope>,
    pub language_code: Option<String>,
}

impl Method for GetMyCommands {
    const NAME: &'static str = "getMyCommands";

    type Response = Vec<BotCommand>;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetMyName {
    /// New bot name; 0-64 characters. Pass an empty string to remove the dedicated name for the given language.
    pub name: Option<String>,

    pub language_code: Option<String>,
}

impl Method for SetMyName {
    const NAME: &'static str = "setMyName";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct GetMyName {
    pub language_code: Option<String>,
}

impl Method for GetMyName {
    const NAME: &'static str = "getMyName";

    type Response = BotName;
}

/// Change the bot's description, which is shown in the chat with the bot if the chat is empty.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetMyDescription {
    pub description: Option<String>,
    pub language_code: Option<String>,
}

impl Method for SetMyDescription {
    const NAME: &'static str = "setMyDescription";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct GetMyDescription {
    pub language_code: Option<String>,
}

impl Method for GetMyDescription {
    const NAME: &'static str = "getMyDescription";

    type Response = BotDescription;
}

/// Change the bot's short description, which is shown on the bot's profile page.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetMyShortDescription {
    pub short_description: Option<String>,
    pub language_code: Option<String>,
}

impl Method for SetMyShortDescription {
    const NAME: &'static str = "setMyShortDescription";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct GetMyShortDescription {
    pub language_code: Option<String>,
}

impl Method for GetMyShortDescription {
    const NAME: &'static str = "getMyShortDescription";

    type Response = BotShortDescription;
}

/// Change the bot's menu button in a private chat, or the default menu button.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct SetChatMenuButton {
    /// If not specified, default bot's menu button will be changed.
    pub chat_id: Option<i64>,

    pub menu_button: Option<MenuButton>,
}

impl Method for SetChatMenuButton {
    const NAME: &'static str = "setChatMenuButton";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct GetChatMenuButton {
    pub chat_id: Option<i64>,
}

impl Method for GetChatMenuButton {
    const NAME: &'static str = "getChatMenuButton";

    type Response = MenuButton;
}

/// Change the default administrator rights requested by the bot when it's added as an administrator.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct SetMyDefaultAdministratorRights {
    pub rights: Option<ChatAdministratorRights>,

    /// Change the default administrator rights of the bot in channels instead of groups and supergroups.
    pub for_channels: Option<bool>,
}

impl Method for SetMyDefaultAdministratorRights {
    const NAME: &'static str = "setMyDefaultAdministratorRights";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct GetMyDefaultAdministratorRights {
    pub for_channels: Option<bool>,
}

impl Method for GetMyDefaultAdministratorRights {
    const NAME: &'static str = "getMyDefaultAdministratorRights";

    type Response = ChatAdministratorRights;
}

/// Get a list of profile pictures for a user.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct GetUserProfilePhotos {
    pub user_id: i64,

    /// Sequential number of the first photo to be returned. By default, all photos are returned.
    pub offset: Option<u32>,

    /// Values between 1-100 are accepted. Defaults to 100.
    pub limit: Option<u32>,
}

impl Method for GetUserProfilePhotos {
    const NAME: &'static str = "getUserProfilePhotos";

    type Response = UserProfilePhotos;
}

/// Get basic information about a file and prepare it for downloading.
///
/// The file can then be downloaded via `<root URL>/file/bot<token>/<file_path>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct GetFile {
    pub file_id: String,
}

impl Method for GetFile {
    const NAME: &'static str = "getFile";

    type Response = File;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct GetBusinessConnection {
    pub business_connection_id: String,
}

impl Method for GetBusinessConnection {
    const NAME: &'static str = "getBusinessConnection";

    type Response = BusinessConnection;
}

/// Get the list of boosts added to a chat by a user. Requires administrator rights in the chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(ChatId, into))]
#[must_use]
pub struct GetUserChatBoosts {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Method for GetUserChatBoosts {
    const NAME: &'static str = "getUserChatBoosts";

    type Response = UserChatBoosts;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_my_commands_ok() -> Result {
        let request = SetMyCommands::builder()
            .commands(vec![BotCommand::new("start", "Start the bot")])
            .scope(BotCommandScope::AllPrivateChats)
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            // language=json
            serde_json::json!({
                "commands": [{"command": "start", "description": "Start the bot"}],
                "scope": {"type": "all_private_chats"},
            }),
        );
        Ok(())
    }

    #[test]
    fn test_get_me_response_ok() -> Result {
        // language=json
        let me = GetMe::decode_response(serde_json::json!({
            "id": 42,
            "is_bot": true,
            "first_name": "Test",
            "username": "test_bot",
            "can_join_groups": true
        }))?;
        assert_eq!(me.id, 42);
        assert_eq!(me.username.as_deref(), Some("test_bot"));
        Ok(())
    }
}
