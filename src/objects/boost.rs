//! Chat boosts and giveaways.

use serde_with::skip_serializing_none;

use crate::{
    objects::{Chat, Message, User},
    prelude::*,
};

/// Source of a chat boost, dispatched on `source`.
///
/// See also: <https://core.telegram.org/bots/api#chatboostsource>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
#[must_use]
pub enum ChatBoostSource {
    /// The boost was obtained by subscribing to Telegram Premium or by gifting a subscription.
    Premium(ChatBoostSourcePremium),

    /// The boost was obtained by the creation of Telegram Premium gift codes.
    GiftCode(ChatBoostSourceGiftCode),

    Giveaway(ChatBoostSourceGiveaway),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatBoostSourcePremium {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatBoostSourceGiftCode {
    pub user: User,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatBoostSourceGiveaway {
    /// Identifier of a message in the chat with the giveaway; may be 0 if the message isn't sent yet.
    pub giveaway_message_id: i32,

    pub user: Option<User>,
    pub is_unclaimed: Option<bool>,
}

impl ChatBoostSource {
    /// User that boosted the chat, if known.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Premium(source) => Some(&source.user),
            Self::GiftCode(source) => Some(&source.user),
            Self::Giveaway(source) => source.user.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatBoost {
    pub boost_id: String,
    pub add_date: i64,

    /// Unix time when the boost will automatically expire, unless the booster's Premium
    /// subscription is prolonged.
    pub expiration_date: i64,

    pub source: ChatBoostSource,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatBoostUpdated {
    pub chat: Chat,
    pub boost: ChatBoost,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatBoostRemoved {
    pub chat: Chat,
    pub boost_id: String,
    pub remove_date: i64,
    pub source: ChatBoostSource,
}

/// Boosts added to a chat by a user, returned by [`crate::methods::GetUserChatBoosts`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct UserChatBoosts {
    pub boosts: Vec<ChatBoost>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatBoostAdded {
    pub boost_count: i32,
}

/// A scheduled giveaway.
///
/// See also: <https://core.telegram.org/bots/api#giveaway>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Giveaway {
    /// The chats which the user must join to participate in the giveaway.
    pub chats: Vec<Chat>,

    pub winners_selection_date: i64,
    pub winner_count: i32,
    pub only_new_members: Option<bool>,
    pub has_public_winners: Option<bool>,
    pub prize_description: Option<String>,

    /// Two-letter ISO 3166-1 alpha-2 country codes.
    pub country_codes: Option<Vec<String>>,

    pub premium_subscription_month_count: Option<i32>,
}

/// Placeholder, currently holds no information.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GiveawayCreated {}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GiveawayWinners {
    pub chat: Chat,
    pub giveaway_message_id: i32,
    pub winners_selection_date: i64,
    pub winner_count: i32,
    pub winners: Vec<User>,
    pub additional_chat_count: Option<i32>,
    pub premium_subscription_month_count: Option<i32>,
    pub unclaimed_prize_count: Option<i32>,
    pub only_new_members: Option<bool>,
    pub was_refunded: Option<bool>,
    pub prize_description: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct GiveawayCompleted {
    pub winner_count: i32,
    pub unclaimed_prize_count: Option<i32>,
    pub giveaway_message: Option<Box<Message>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_str;

    #[test]
    fn test_boost_source_by_discriminant_ok() -> Result {
        // language=json
        let boost: ChatBoost = decode_str(
            r#"{
                "boost_id": "b",
                "add_date": 1,
                "expiration_date": 2,
                "source": {"source": "giveaway", "giveaway_message_id": 0, "is_unclaimed": true}
            }"#,
        )?;
        let ChatBoostSource::Giveaway(source) = &boost.source else {
            panic!("expected a giveaway, got {:?}", boost.source);
        };
        assert_eq!(source.is_unclaimed, Some(true));
        assert!(boost.source.user().is_none());
        Ok(())
    }

    #[test]
    fn test_premium_source_ok() -> Result {
        // language=json
        let source: ChatBoostSource = decode_str(
            r#"{"source": "gift_code", "user": {"id": 1, "is_bot": false, "first_name": "Ada"}}"#,
        )?;
        assert!(matches!(source, ChatBoostSource::GiftCode(_)));
        assert_eq!(source.user().map(|user| user.id), Some(1));
        Ok(())
    }
}
