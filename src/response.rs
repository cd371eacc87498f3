//! Bot API [response][1] envelope.
//!
//! [1]: https://core.telegram.org/bots/api#making-requests

use monostate::MustBeBool;
use serde_with::skip_serializing_none;

use crate::prelude::*;

/// Either the `result` of a successful request, or the error description.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
#[must_use]
pub enum Response<T = Value> {
    Ok {
        ok: MustBeBool<true>,
        result: T,
    },

    Err {
        ok: MustBeBool<false>,
        error_code: i32,
        description: String,
        parameters: Option<ResponseParameters>,
    },
}

impl<T> Response<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Ok { result, .. } => Ok(result),
            Self::Err { error_code, description, parameters, .. } => {
                debug!(error_code, description = description.as_str(), "Bot API error");
                Err(Error::Api { error_code, description, parameters })
            }
        }
    }
}

impl<T> From<Response<T>> for Result<T> {
    fn from(response: Response<T>) -> Self {
        response.into_result()
    }
}

/// [Why a request was unsuccessful][1], and how it can be repeated.
///
/// [1]: https://core.telegram.org/bots/api#responseparameters
#[skip_serializing_none]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    pub migrate_to_chat_id: Option<i64>,

    /// Seconds left to wait before the request can be repeated.
    pub retry_after: Option<u32>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::codec::decode_str;

    #[test]
    fn test_response_ok() -> Result {
        // language=json
        let response: Response<u32> = decode_str(r#"{"ok": true, "result": 42}"#)?;
        assert_eq!(response.into_result()?, 42);
        Ok(())
    }

    #[test]
    fn test_too_many_requests_ok() -> Result {
        // language=json
        let response: Response = decode_str(
            r#"{
                "ok": false,
                "error_code": 429,
                "description": "Too Many Requests: retry after 5",
                "parameters": {"retry_after": 5}
            }"#,
        )?;
        let error = response.into_result().unwrap_err();
        assert_eq!(error.retry_after(), Some(Duration::from_secs(5)));
        assert_eq!(error.migrate_to_chat_id(), None);
        Ok(())
    }

    #[test]
    fn test_migrated_ok() -> Result {
        // language=json
        let response: Response = decode_str(
            r#"{
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: group chat was upgraded to a supergroup chat",
                "parameters": {"migrate_to_chat_id": -1001234567890}
            }"#,
        )?;
        let error = Result::from(response).unwrap_err();
        assert_eq!(error.migrate_to_chat_id(), Some(-1_001_234_567_890));
        assert_eq!(error.retry_after(), None);
        Ok(())
    }

    #[test]
    fn test_ok_mismatch_fails() {
        // language=json
        assert!(decode_str::<Response>(r#"{"ok": true, "description": "nope"}"#).is_err());
    }
}
