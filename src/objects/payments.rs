//! Payments and Telegram Stars.

use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{objects::User, prelude::*};

/// A portion of the price for goods or services.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct LabeledPrice {
    pub label: String,

    /// Price of the product in the smallest units of the currency.
    pub amount: i32,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i32) -> Self {
        Self { label: label.into(), amount }
    }
}

/// Basic information about an invoice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Invoice {
    pub title: String,
    pub description: String,

    /// Unique bot deep-linking parameter that can be used to generate this invoice.
    pub start_parameter: String,

    pub currency: String,
    pub total_amount: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ShippingAddress {
    /// Two-letter ISO 3166-1 alpha-2 country code.
    pub country_code: String,

    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct OrderInfo {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<LabeledPrice>,
}

/// Basic information about a successful payment.
///
/// See also: <https://core.telegram.org/bots/api#successfulpayment>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: i32,
    pub invoice_payload: String,
    pub shipping_option_id: Option<String>,
    pub order_info: Option<OrderInfo>,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct RefundedPayment {
    /// Currently, always `XTR`.
    pub currency: String,

    pub total_amount: i32,
    pub invoice_payload: String,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ShippingQuery {
    pub id: String,
    pub from: User,
    pub invoice_payload: String,
    pub shipping_address: ShippingAddress,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PreCheckoutQuery {
    pub id: String,
    pub from: User,
    pub currency: String,
    pub total_amount: i32,
    pub invoice_payload: String,
    pub shipping_option_id: Option<String>,
    pub order_info: Option<OrderInfo>,
}

/// State of a revenue withdrawal operation, dispatched on `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum RevenueWithdrawalState {
    Pending,

    Succeeded {
        date: i64,

        /// An HTTPS URL that can be used to see transaction details.
        url: String,
    },

    Failed,
}

/// The source of a transaction, or its recipient for outgoing transactions, dispatched on `type`.
///
/// See also: <https://core.telegram.org/bots/api#transactionpartner>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum TransactionPartner {
    /// A withdrawal transaction with Fragment.
    Fragment(TransactionPartnerFragment),

    /// A transaction with a user.
    User(TransactionPartnerUser),

    /// A withdrawal transaction to the Telegram Ads platform.
    TelegramAds,

    /// A transaction with an unknown source or recipient.
    Other,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct TransactionPartnerFragment {
    pub withdrawal_state: Option<RevenueWithdrawalState>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct TransactionPartnerUser {
    pub user: User,
}

/// A Telegram Star transaction.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct StarTransaction {
    /// Coincides with `telegram_payment_charge_id` of [`SuccessfulPayment`] for successful incoming payments.
    pub id: String,

    pub amount: i32,
    pub date: i64,

    /// Only for incoming transactions.
    pub source: Option<TransactionPartner>,

    /// Only for outgoing transactions.
    pub receiver: Option<TransactionPartner>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct StarTransactions {
    pub transactions: Vec<StarTransaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_star_transactions_ok() -> Result {
        // language=json
        let transactions: StarTransactions = decode_str(
            r#"{
                "transactions": [
                    {
                        "id": "1",
                        "amount": 100,
                        "date": 1700000000,
                        "receiver": {
                            "type": "fragment",
                            "withdrawal_state": {
                                "type": "succeeded",
                                "date": 1700000001,
                                "url": "https://fragment.com"
                            }
                        }
                    },
                    {"id": "2", "amount": 5, "date": 1700000002, "source": {"type": "telegram_ads"}}
                ]
            }"#,
        )?;
        let [outgoing, incoming] = transactions.transactions.as_slice() else {
            panic!("expected two transactions");
        };
        let Some(TransactionPartner::Fragment(fragment)) = &outgoing.receiver else {
            panic!("expected a fragment receiver, got {:?}", outgoing.receiver);
        };
        assert!(matches!(
            fragment.withdrawal_state,
            Some(RevenueWithdrawalState::Succeeded { .. }),
        ));
        assert_eq!(incoming.source, Some(TransactionPartner::TelegramAds));
        assert!(incoming.receiver.is_none());
        Ok(())
    }

    #[test]
    fn test_unit_partner_encode_ok() -> Result {
        assert_eq!(encode(&TransactionPartner::Other)?, serde_json::json!({"type": "other"}));
        let fragment = TransactionPartner::Fragment(TransactionPartnerFragment::default());
        assert_eq!(encode(&fragment)?, serde_json::json!({"type": "fragment"}));
        Ok(())
    }
}
