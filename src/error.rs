use std::time::Duration;

use url::Url;

use crate::response::ResponseParameters;

/// Everything that can go wrong while assembling a request or decoding a response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The raw value did not match the target type.
    ///
    /// For unions, the source message names the union: `no variant of ReplyMarkup matched`.
    #[error("failed to decode `{type_name}`: {source}")]
    Decode {
        type_name: &'static str,

        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode `{type_name}`: {source}")]
    Encode {
        type_name: &'static str,

        #[source]
        source: serde_json::Error,
    },

    /// Method parameters must serialize into a JSON object.
    #[error("parameters of `{method}` did not encode into an object")]
    NotAnObject { method: &'static str },

    /// Telegram responded with `"ok": false`.
    #[error("Bot API error {error_code}: {description}")]
    Api {
        error_code: i32,
        description: String,
        parameters: Option<ResponseParameters>,
    },

    #[error("invalid Bot API URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("`{0}` is not a Bot API method name")]
    InvalidMethodName(String),

    #[error("the bot token is malformed")]
    MalformedToken,

    #[error("`{0}` cannot be used as the Bot API root URL")]
    CannotBeABase(Url),
}

impl Error {
    /// How long to wait before repeating the request, if Telegram asked to back off.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Api {
                parameters: Some(ResponseParameters { retry_after: Some(secs), .. }),
                ..
            } => Some(Duration::from_secs(u64::from(*secs))),
            _ => None,
        }
    }

    /// New identifier of a group that has been migrated to a supergroup.
    pub const fn migrate_to_chat_id(&self) -> Option<i64> {
        match self {
            Self::Api { parameters: Some(parameters), .. } => parameters.migrate_to_chat_id,
            _ => None,
        }
    }
}
