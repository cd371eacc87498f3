use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    methods::Method,
    objects::{
        ChatId, InlineKeyboardMarkup, LabeledPrice, Message, ReplyParameters, ShippingOption,
        StarTransactions,
    },
    prelude::*,
};

/// [Send an invoice][1].
///
/// [1]: https://core.telegram.org/bots/api#sendinvoice
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(ChatId, into))]
#[must_use]
pub struct SendInvoice {
    pub chat_id: ChatId,
    pub message_thread_id: Option<i32>,

    /// Product name, 1-32 characters.
    pub title: String,

    /// Product description, 1-255 characters.
    pub description: String,

    /// Bot-defined invoice payload, 1-128 bytes. This will not be displayed to the user.
    pub payload: String,

    /// Payment provider token. Pass an empty string for payments in Telegram Stars.
    pub provider_token: Option<String>,

    /// Three-letter ISO 4217 currency code. Pass `XTR` for payments in Telegram Stars.
    pub currency: String,

    /// Must contain exactly one item for payments in Telegram Stars.
    pub prices: Vec<LabeledPrice>,

    pub max_tip_amount: Option<i32>,
    pub suggested_tip_amounts: Option<Vec<i32>>,

    /// If left empty, forwarded copies of the sent message will have a Pay button.
    pub start_parameter: Option<String>,

    /// JSON-serialized data about the invoice, which will be shared with the payment provider.
    pub provider_data: Option<String>,

    pub photo_url: Option<String>,
    pub photo_size: Option<i32>,
    pub photo_width: Option<i32>,
    pub photo_height: Option<i32>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    pub send_phone_number_to_provider: Option<bool>,
    pub send_email_to_provider: Option<bool>,

    /// The final price depends on the shipping method.
    pub is_flexible: Option<bool>,

    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    /// If empty, one 'Pay `total price`' button will be shown. If not empty, the first button must be a Pay button.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for SendInvoice {
    const NAME: &'static str = "sendInvoice";

    type Response = Message;
}

/// Create a link for an invoice.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct CreateInvoiceLink {
    pub title: String,
    pub description: String,
    pub payload: String,
    pub provider_token: Option<String>,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub max_tip_amount: Option<i32>,
    pub suggested_tip_amounts: Option<Vec<i32>>,
    pub provider_data: Option<String>,
    pub photo_url: Option<String>,
    pub photo_size: Option<i32>,
    pub photo_width: Option<i32>,
    pub photo_height: Option<i32>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    pub send_phone_number_to_provider: Option<bool>,
    pub send_email_to_provider: Option<bool>,
    pub is_flexible: Option<bool>,
}

impl Method for CreateInvoiceLink {
    const NAME: &'static str = "createInvoiceLink";

    type Response = String;
}

/// Reply to a shipping query sent for an invoice with a flexible price.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct AnswerShippingQuery {
    pub shipping_query_id: String,

    /// Whether delivery to the specified address is possible.
    pub ok: bool,

    /// Required if `ok` is `true`.
    pub shipping_options: Option<Vec<ShippingOption>>,

    /// Required if `ok` is `false`.
    pub error_message: Option<String>,
}

impl Method for AnswerShippingQuery {
    const NAME: &'static str = "answerShippingQuery";

    type Response = bool;
}

/// Respond to a pre-checkout query within 10 seconds.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct AnswerPreCheckoutQuery {
    pub pre_checkout_query_id: String,
    pub ok: bool,
    pub error_message: Option<String>,
}

impl Method for AnswerPreCheckoutQuery {
    const NAME: &'static str = "answerPreCheckoutQuery";

    type Response = bool;
}

/// Get the bot's Telegram Star transactions in chronological order.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct GetStarTransactions {
    pub offset: Option<u32>,

    /// Values between 1-100 are accepted. Defaults to 100.
    pub limit: Option<u32>,
}

impl Method for GetStarTransactions {
    const NAME: &'static str = "getStarTransactions";

    type Response = StarTransactions;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct RefundStarPayment {
    pub user_id: i64,
    pub telegram_payment_charge_id: String,
}

impl Method for RefundStarPayment {
    const NAME: &'static str = "refundStarPayment";

    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_invoice_ok() -> Result {
        let request = SendInvoice::builder()
            .chat_id(42_i64)
            .title("Subscription")
            .description("One month")
            .payload("sub:42")
            .provider_token("")
            .currency("XTR")
            .prices(vec![LabeledPrice::new("Month", 100)])
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            // language=json
            serde_json::json!({
                "chat_id": 42,
                "title": "Subscription",
                "description": "One month",
                "payload": "sub:42",
                "provider_token": "",
                "currency": "XTR",
                "prices": [{"label": "Month", "amount": 100}],
            }),
        );
        Ok(())
    }

    #[test]
    fn test_answer_pre_checkout_query_ok() -> Result {
        let request = AnswerPreCheckoutQuery::builder()
            .pre_checkout_query_id("1")
            .ok(true)
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            serde_json::json!({"pre_checkout_query_id": "1", "ok": true}),
        );
        Ok(())
    }
}
