//! Bot commands, names, descriptions and the menu button.

use bon::Builder;

use crate::{
    objects::{ChatId, WebAppInfo},
    prelude::*,
};

/// A bot command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct BotCommand {
    /// Text of the command; 1-32 characters. Can contain only lowercase English letters, digits and underscores.
    pub command: String,

    /// Description of the command; 1-256 characters.
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self { command: command.into(), description: description.into() }
    }
}

/// The scope to which bot commands are applied, dispatched on `type`.
///
/// See also: <https://core.telegram.org/bots/api#botcommandscope>.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum BotCommandScope {
    /// Used if no commands with a narrower scope are specified for the user.
    #[default]
    Default,

    AllPrivateChats,
    AllGroupChats,
    AllChatAdministrators,
    Chat { chat_id: ChatId },
    ChatAdministrators { chat_id: ChatId },
    ChatMember { chat_id: ChatId, user_id: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BotName {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BotDescription {
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BotShortDescription {
    pub short_description: String,
}

/// The bot's menu button in a private chat, dispatched on `type`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum MenuButton {
    /// Opens the bot's list of commands.
    Commands,

    /// Launches a Web App.
    WebApp { text: String, web_app: WebAppInfo },

    /// No specific value for the menu button was set.
    #[default]
    Default,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_scope_encode_ok() -> Result {
        assert_eq!(encode(&BotCommandScope::Default)?, serde_json::json!({"type": "default"}));
        assert_eq!(
            encode(&BotCommandScope::ChatMember { chat_id: "@channel".into(), user_id: 42 })?,
            // language=json
            serde_json::json!({"type": "chat_member", "chat_id": "@channel", "user_id": 42}),
        );
        Ok(())
    }

    #[test]
    fn test_scope_decode_ok() -> Result {
        // language=json
        let scope: BotCommandScope =
            decode_str(r#"{"type": "chat_administrators", "chat_id": -100}"#)?;
        assert_eq!(scope, BotCommandScope::ChatAdministrators { chat_id: ChatId::Integer(-100) });
        Ok(())
    }

    #[test]
    fn test_menu_button_ok() -> Result {
        // language=json
        let button: MenuButton = decode_str(
            r#"{"type": "web_app", "text": "Open", "web_app": {"url": "https://example.org"}}"#,
        )?;
        let MenuButton::WebApp { text, web_app } = button else {
            panic!("expected a web app button");
        };
        assert_eq!(text, "Open");
        assert_eq!(web_app.url, "https://example.org");
        assert_eq!(decode_str::<MenuButton>(r#"{"type": "commands"}"#)?, MenuButton::Commands);
        Ok(())
    }
}
