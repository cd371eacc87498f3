//! Incoming updates.

use serde_with::skip_serializing_none;

use crate::{
    objects::{
        BusinessConnection, BusinessMessagesDeleted, CallbackQuery, ChatBoostRemoved,
        ChatBoostUpdated, ChatJoinRequest, ChatMemberUpdated, ChosenInlineResult, InlineQuery,
        Message, MessageReactionCountUpdated, MessageReactionUpdated, Poll, PollAnswer,
        PreCheckoutQuery, ShippingQuery,
    },
    prelude::*,
};

/// This object represents an incoming [update][1].
///
/// At most one of the optional fields can be present in any given update.
///
/// [1]: https://core.telegram.org/bots/api#update
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Update {
    /// The update's unique identifier.
    ///
    /// Update identifiers start from a certain positive number and increase sequentially.
    #[serde(rename = "update_id")]
    pub id: i64,

    pub message: Option<Box<Message>>,
    pub edited_message: Option<Box<Message>>,
    pub channel_post: Option<Box<Message>>,
    pub edited_channel_post: Option<Box<Message>>,
    pub business_connection: Option<Box<BusinessConnection>>,
    pub business_message: Option<Box<Message>>,
    pub edited_business_message: Option<Box<Message>>,
    pub deleted_business_messages: Option<Box<BusinessMessagesDeleted>>,

    /// The bot must be an administrator in the chat and must explicitly specify
    /// `message_reaction` in the list of `allowed_updates` to receive these updates.
    pub message_reaction: Option<Box<MessageReactionUpdated>>,

    pub message_reaction_count: Option<Box<MessageReactionCountUpdated>>,
    pub inline_query: Option<Box<InlineQuery>>,
    pub chosen_inline_result: Option<Box<ChosenInlineResult>>,
    pub callback_query: Option<Box<CallbackQuery>>,
    pub shipping_query: Option<Box<ShippingQuery>>,
    pub pre_checkout_query: Option<Box<PreCheckoutQuery>>,

    /// Bots receive only updates about manually stopped polls and polls sent by the bot.
    pub poll: Option<Box<Poll>>,

    pub poll_answer: Option<Box<PollAnswer>>,

    /// The bot's chat member status was updated in a chat.
    pub my_chat_member: Option<Box<ChatMemberUpdated>>,

    pub chat_member: Option<Box<ChatMemberUpdated>>,
    pub chat_join_request: Option<Box<ChatJoinRequest>>,
    pub chat_boost: Option<Box<ChatBoostUpdated>>,
    pub removed_chat_boost: Option<Box<ChatBoostRemoved>>,
}

impl Update {
    /// Kind of the payload, or `None` if the update carries none known to this crate.
    #[must_use]
    pub const fn kind(&self) -> Option<AllowedUpdate> {
        let kind = if self.message.is_some() {
            AllowedUpdate::Message
        } else if self.edited_message.is_some() {
            AllowedUpdate::EditedMessage
        } else if self.channel_post.is_some() {
            AllowedUpdate::ChannelPost
        } else if self.edited_channel_post.is_some() {
            AllowedUpdate::EditedChannelPost
        } else if self.business_connection.is_some() {
            AllowedUpdate::BusinessConnection
        } else if self.business_message.is_some() {
            AllowedUpdate::BusinessMessage
        } else if self.edited_business_message.is_some() {
            AllowedUpdate::EditedBusinessMessage
        } else if self.deleted_business_messages.is_some() {
            AllowedUpdate::DeletedBusinessMessages
        } else if self.message_reaction.is_some() {
            AllowedUpdate::MessageReaction
        } else if self.message_reaction_count.is_some() {
            AllowedUpdate::MessageReactionCount
        } else if self.inline_query.is_some() {
            AllowedUpdate::InlineQuery
        } else if self.chosen_inline_result.is_some() {
            AllowedUpdate::ChosenInlineResult
        } else if self.callback_query.is_some() {
            AllowedUpdate::CallbackQuery
        } else if self.shipping_query.is_some() {
            AllowedUpdate::ShippingQuery
        } else if self.pre_checkout_query.is_some() {
            AllowedUpdate::PreCheckoutQuery
        } else if self.poll.is_some() {
            AllowedUpdate::Poll
        } else if self.poll_answer.is_some() {
            AllowedUpdate::PollAnswer
        } else if self.my_chat_member.is_some() {
            AllowedUpdate::MyChatMember
        } else if self.chat_member.is_some() {
            AllowedUpdate::ChatMember
        } else if self.chat_join_request.is_some() {
            AllowedUpdate::ChatJoinRequest
        } else if self.chat_boost.is_some() {
            AllowedUpdate::ChatBoost
        } else if self.removed_chat_boost.is_some() {
            AllowedUpdate::RemovedChatBoost
        } else {
            return None;
        };
        Some(kind)
    }
}

/// [Update][1] types that the client wants to listen to.
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum AllowedUpdate {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    BusinessConnection,
    BusinessMessage,
    EditedBusinessMessage,
    DeletedBusinessMessages,
    MessageReaction,
    MessageReactionCount,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
    ChatBoost,
    RemovedChatBoost,
}

/// Current status of a webhook.
///
/// See also: <https://core.telegram.org/bots/api#webhookinfo>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct WebhookInfo {
    /// Webhook URL, may be empty if webhook is not set up.
    pub url: String,

    pub has_custom_certificate: bool,
    pub pending_update_count: i32,
    pub ip_address: Option<String>,

    /// Unix time for the most recent error that happened when trying to deliver an update via webhook.
    pub last_error_date: Option<i64>,

    pub last_error_message: Option<String>,
    pub last_synchronization_error_date: Option<i64>,
    pub max_connections: Option<i32>,
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{
        codec::{decode, decode_str, encode},
        objects::Message,
    };

    // language=json
    const REPLY_UPDATE: &str = r#"{
        "update_id": 43,
        "message": {
            "message_id": 2,
            "date": 1700000001,
            "chat": {"id": 7, "type": "private", "first_name": "Ada"},
            "from": {"id": 7, "is_bot": false, "first_name": "Ada"},
            "text": "look",
            "reply_to_message": {
                "message_id": 1,
                "date": 1700000000,
                "chat": {"id": 7, "type": "private", "first_name": "Ada"},
                "sticker": {
                    "file_id": "s",
                    "file_unique_id": "u",
                    "type": "regular",
                    "width": 512,
                    "height": 512,
                    "is_animated": false,
                    "is_video": false
                }
            },
            "pinned_message": {
                "message_id": 0,
                "date": 0,
                "chat": {"id": 7, "type": "private", "first_name": "Ada"}
            }
        }
    }"#;

    #[test]
    fn test_only_message_set_ok() -> Result {
        // language=json
        let update: Update = decode_str(
            r#"{
                "update_id": 42,
                "message": {
                    "message_id": 1,
                    "date": 1700000000,
                    "chat": {"id": 7, "type": "private", "first_name": "Ada"},
                    "text": "/start"
                }
            }"#,
        )?;
        assert_eq!(update.id, 42);
        assert_eq!(update.kind(), Some(AllowedUpdate::Message));
        assert!(update.edited_message.is_none());
        assert!(update.channel_post.is_none());
        assert!(update.callback_query.is_none());

        let object = encode(&update)?;
        let keys: Vec<&str> = object
            .as_object()
            .into_iter()
            .flat_map(|object| object.keys())
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["message", "update_id"]);
        Ok(())
    }

    #[test]
    fn test_decode_within_small_stack_ok() -> Result {
        // Test harness and async runtime worker threads default to 2 MiB.
        let update = thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(|| decode_str::<Update>(REPLY_UPDATE))
            .unwrap()
            .join()
            .unwrap()?;
        let message = *update.message.unwrap();
        let reply_to = message.reply_to_message.unwrap();
        assert_eq!(reply_to.sticker.map(|sticker| sticker.width), Some(512));
        assert_eq!(message.pinned_message.map(|pinned| pinned.id()), Some(0));
        Ok(())
    }

    #[test]
    fn test_payloads_are_boxed_ok() {
        assert!(size_of::<Update>() <= 256, "{}", size_of::<Update>());
        assert!(size_of::<Message>() <= 4096, "{}", size_of::<Message>());
    }

    #[test]
    fn test_unknown_payload_ok() -> Result {
        // language=json
        let update: Update = decode_str(r#"{"update_id": 1, "purchased_paid_media": {}}"#)?;
        assert_eq!(update.kind(), None);
        Ok(())
    }

    #[test]
    fn test_updates_array_ok() -> Result {
        let user = serde_json::json!({"id": 1, "is_bot": false, "first_name": "Ada"});
        let updates: Vec<Update> = decode(serde_json::json!([
            {
                "update_id": 1,
                "poll_answer": {"poll_id": "p", "option_ids": [0], "user": user},
            },
            {
                "update_id": 2,
                "chat_boost": {
                    "chat": {"id": -1, "type": "channel"},
                    "boost": {
                        "boost_id": "b",
                        "add_date": 1,
                        "expiration_date": 2,
                        "source": {"source": "premium", "user": user},
                    },
                },
            },
        ]))?;
        let kinds: Vec<_> = updates.iter().map(Update::kind).collect();
        assert_eq!(kinds, [Some(AllowedUpdate::PollAnswer), Some(AllowedUpdate::ChatBoost)]);
        Ok(())
    }

    #[test]
    fn test_allowed_update_ok() -> Result {
        assert_eq!(
            encode(&[AllowedUpdate::Message, AllowedUpdate::MessageReactionCount])?,
            serde_json::json!(["message", "message_reaction_count"]),
        );
        Ok(())
    }
}
