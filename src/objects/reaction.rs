//! Message reactions.

use serde_with::skip_serializing_none;

use crate::{
    objects::{Chat, User},
    prelude::*,
};

/// Type of a reaction, dispatched on `type`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum ReactionType {
    Emoji { emoji: String },
    CustomEmoji { custom_emoji_id: String },
}

impl ReactionType {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji { emoji: emoji.into() }
    }
}

/// A reaction added to a message along with the number of times it was added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub kind: ReactionType,

    pub total_count: i32,
}

/// A change of a reaction on a message performed by a user.
///
/// See also: <https://core.telegram.org/bots/api#messagereactionupdated>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MessageReactionUpdated {
    pub chat: Chat,
    pub message_id: i32,

    /// The user that changed the reaction, if the user isn't anonymous.
    pub user: Option<User>,

    /// The chat on behalf of which the reaction was changed, if the user is anonymous.
    pub actor_chat: Option<Chat>,

    pub date: i64,
    pub old_reaction: Vec<ReactionType>,
    pub new_reaction: Vec<ReactionType>,
}

/// Reaction changes on a message with anonymous reactions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MessageReactionCountUpdated {
    pub chat: Chat,
    pub message_id: i32,
    pub date: i64,
    pub reactions: Vec<ReactionCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_reaction_type_ok() -> Result {
        assert_eq!(
            encode(&ReactionType::emoji("👍"))?,
            serde_json::json!({"type": "emoji", "emoji": "👍"}),
        );

        // language=json
        let reaction: ReactionType =
            decode_str(r#"{"type": "custom_emoji", "custom_emoji_id": "42"}"#)?;
        assert_eq!(reaction, ReactionType::CustomEmoji { custom_emoji_id: "42".to_owned() });
        Ok(())
    }

    #[test]
    fn test_unknown_reaction_type_fails() {
        // language=json
        let error = decode_str::<ReactionType>(r#"{"type": "paid"}"#).unwrap_err();
        assert!(error.to_string().contains("unknown variant `paid`"), "{error}");
    }
}
