use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    objects::{Chat, MessageEntity, ParseMode, User},
    prelude::*,
};

/// <https://core.telegram.org/bots/api#poll>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub question_entities: Option<Vec<MessageEntity>>,
    pub options: Vec<PollOption>,
    pub total_voter_count: i32,
    pub is_closed: bool,
    pub is_anonymous: bool,

    #[serde(rename = "type")]
    pub kind: PollType,

    pub allows_multiple_answers: bool,

    /// 0-based identifier of the correct answer option.
    ///
    /// Available only for polls in the quiz mode, which are closed, or was sent (not forwarded)
    /// by the bot or to the private chat with the bot.
    pub correct_option_id: Option<i32>,

    pub explanation: Option<String>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<i32>,
    pub close_date: Option<i64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum PollType {
    Regular,
    Quiz,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PollOption {
    pub text: String,
    pub text_entities: Option<Vec<MessageEntity>>,
    pub voter_count: i32,
}

/// An answer of a user in a non-anonymous poll.
///
/// See also: <https://core.telegram.org/bots/api#pollanswer>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PollAnswer {
    pub poll_id: String,

    /// The chat that changed the answer to the poll, if the voter is anonymous.
    pub voter_chat: Option<Chat>,

    /// The user that changed the answer to the poll, if the voter isn't anonymous.
    pub user: Option<User>,

    /// May be empty if the vote was retracted.
    pub option_ids: Vec<i32>,
}

/// Answer option in `sendPoll`.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct InputPollOption {
    pub text: String,
    pub text_parse_mode: Option<ParseMode>,
    pub text_entities: Option<Vec<MessageEntity>>,
}

impl From<&str> for InputPollOption {
    fn from(text: &str) -> Self {
        Self::builder().text(text).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_retracted_vote_ok() -> Result {
        // language=json
        let answer: PollAnswer = decode_str(
            r#"{
                "poll_id": "1",
                "user": {"id": 1, "is_bot": false, "first_name": "Ada"},
                "option_ids": []
            }"#,
        )?;
        assert!(answer.option_ids.is_empty());
        assert!(answer.voter_chat.is_none());
        Ok(())
    }

    #[test]
    fn test_input_poll_option_ok() -> Result {
        assert_eq!(encode(&InputPollOption::from("Yes"))?, serde_json::json!({"text": "Yes"}));
        Ok(())
    }
}
