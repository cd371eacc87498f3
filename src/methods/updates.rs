use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    methods::Method,
    objects::{AllowedUpdate, InputFile, Update, WebhookInfo},
    prelude::*,
};

/// Use this method to receive incoming updates using long polling. Returns an `Array` of `Update` objects.
///
/// See also: <https://core.telegram.org/bots/api#getupdates>.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct GetUpdates {
    /// Identifier of the first update to be returned.
    pub offset: Option<i64>,

    /// Limits the number of updates to be retrieved. Values between 1-100 are accepted. Defaults to 100.
    pub limit: Option<u32>,

    /// Timeout in seconds for long polling.
    ///
    /// Defaults to 0, i.e. usual short polling.
    /// Should be positive, short polling should be used for testing purposes only.
    #[serde(rename = "timeout")]
    pub timeout_secs: Option<u64>,

    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";

    type Response = Vec<Update>;
}

/// Specify a URL and receive incoming updates via an outgoing webhook.
///
/// See also: <https://core.telegram.org/bots/api#setwebhook>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetWebhook {
    /// HTTPS URL to send updates to. Use an empty string to remove webhook integration.
    pub url: String,

    /// Public key certificate, so that the root certificate in use can be checked.
    pub certificate: Option<InputFile>,

    pub ip_address: Option<String>,

    /// The maximum allowed number of simultaneous HTTPS connections to the webhook; 1-100.
    pub max_connections: Option<u32>,

    pub allowed_updates: Option<Vec<AllowedUpdate>>,
    pub drop_pending_updates: Option<bool>,

    /// Sent in the `X-Telegram-Bot-Api-Secret-Token` header in every webhook request, 1-256 characters.
    pub secret_token: Option<String>,
}

impl Method for SetWebhook {
    const NAME: &'static str = "setWebhook";

    type Response = bool;
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct DeleteWebhook {
    pub drop_pending_updates: Option<bool>,
}

impl Method for DeleteWebhook {
    const NAME: &'static str = "deleteWebhook";

    type Response = bool;
}

/// Get current webhook status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GetWebhookInfo {}

impl Method for GetWebhookInfo {
    const NAME: &'static str = "getWebhookInfo";

    type Response = WebhookInfo;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_str;

    #[test]
    fn test_only_offset_ok() -> Result {
        // language=json
        let request = decode_str::<GetUpdates>(r#"{"offset": 5}"#)?.to_request()?;
        assert_eq!(request.method, "getUpdates");
        assert_eq!(request.parameters.len(), 1);
        assert_eq!(request.parameters["offset"], 5);
        Ok(())
    }

    #[test]
    fn test_get_updates_builder_ok() -> Result {
        let request = GetUpdates::builder()
            .offset(100)
            .timeout_secs(60)
            .allowed_updates(vec![AllowedUpdate::Message, AllowedUpdate::CallbackQuery])
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            // language=json
            serde_json::json!({
                "offset": 100,
                "timeout": 60,
                "allowed_updates": ["message", "callback_query"],
            }),
        );
        Ok(())
    }

    #[test]
    fn test_webhook_info_ok() -> Result {
        // language=json
        let info = GetWebhookInfo::decode_response(serde_json::json!({
            "url": "",
            "has_custom_certificate": false,
            "pending_update_count": 3
        }))?;
        assert_eq!(info.pending_update_count, 3);
        assert!(info.last_error_message.is_none());
        Ok(())
    }
}
