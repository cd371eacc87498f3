//! Bot API [methods][1].
//!
//! Each method is a struct with a builder. Unset optional parameters are left out of the
//! [`Request`], so Telegram applies its own defaults.
//!
//! [1]: https://core.telegram.org/bots/api#available-methods

mod chat;
mod editing;
mod forum;
mod games;
mod inline;
mod messages;
mod passport;
mod payments;
mod settings;
mod stickers;
mod updates;

use serde::de::DeserializeOwned;
use serde_json::Map;

pub use self::{
    chat::*,
    editing::*,
    forum::*,
    games::*,
    inline::*,
    messages::*,
    passport::*,
    payments::*,
    settings::*,
    stickers::*,
    updates::*,
};
use crate::{codec, prelude::*, response::Response};

/// Telegram bot API method.
pub trait Method: Serialize {
    /// Method name.
    const NAME: &'static str;

    /// Type of the `result` field in a successful response.
    type Response: DeserializeOwned;

    /// Assemble the method name and its parameters.
    #[instrument(skip_all, fields(method = Self::NAME))]
    fn to_request(&self) -> Result<Request> {
        match codec::encode(self)? {
            Value::Object(parameters) => {
                trace!(n_parameters = parameters.len(), "Assembled the request");
                Ok(Request { method: Self::NAME, parameters })
            }
            _ => Err(Error::NotAnObject { method: Self::NAME }),
        }
    }

    /// Decode the `result` field of a successful response.
    fn decode_response(result: Value) -> Result<Self::Response> {
        codec::decode(result)
    }

    /// Decode the whole response body, turning `"ok": false` into [`Error::Api`].
    #[instrument(skip_all, fields(method = Self::NAME))]
    fn parse_response(body: &[u8]) -> Result<Self::Response> {
        let result = codec::decode_slice::<Response>(body)?.into_result()?;
        Self::decode_response(result)
    }
}

/// Method name and its parameters, ready to be posted.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Request {
    pub method: &'static str,

    /// Only the parameters that were set.
    pub parameters: Map<String, Value>,
}

impl Request {
    pub const CONTENT_TYPE: &'static str = "application/json; charset=utf-8";

    /// JSON body to be posted to [`crate::Bot::method_url`].
    pub fn to_body(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.parameters)
            .map_err(|source| Error::Encode { type_name: self.method, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Bare(i32);

    impl Method for Bare {
        const NAME: &'static str = "bare";
        type Response = bool;
    }

    #[test]
    fn test_not_an_object_fails() {
        assert!(matches!(Bare(42).to_request(), Err(Error::NotAnObject { method: "bare" })));
    }

    #[test]
    fn test_parameterless_method_ok() -> Result {
        let request = GetMe::default().to_request()?;
        assert_eq!(request.method, "getMe");
        assert_eq!(request.to_body()?, b"{}");
        Ok(())
    }

    #[test]
    fn test_body_omits_unset_parameters_ok() -> Result {
        let request = SendMessage::builder().chat_id(42_i64).text("hi").build().to_request()?;
        // language=json
        assert_eq!(request.to_body()?, br#"{"chat_id":42,"text":"hi"}"#);
        Ok(())
    }

    #[test]
    fn test_decode_response_ok() -> Result {
        assert!(DeleteWebhook::decode_response(Value::Bool(true))?);
        assert!(matches!(GetMe::decode_response(Value::Bool(true)), Err(Error::Decode { .. })));
        Ok(())
    }

    #[test]
    fn test_parse_response_ok() -> Result {
        // language=json
        let body = br#"{"ok": true, "result": {"id": 42, "is_bot": true, "first_name": "Bot"}}"#;
        let me = GetMe::parse_response(body)?;
        assert_eq!(me.id, 42);
        assert!(me.is_bot);
        Ok(())
    }

    #[test]
    fn test_parse_response_api_error() {
        // language=json
        let body =
            br#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#;
        let error = SendMessage::parse_response(body).unwrap_err();
        assert!(matches!(error, Error::Api { error_code: 400, .. }));
        assert_eq!(error.to_string(), "Bot API error 400: Bad Request: chat not found");
    }
}
