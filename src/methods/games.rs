use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    Either,
    methods::Method,
    objects::{GameHighScore, InlineKeyboardMarkup, Message, ReplyParameters},
    prelude::*,
};

/// Send a game.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SendGame {
    pub business_connection_id: Option<String>,

    /// Unique identifier for the target chat. Usernames are not accepted.
    pub chat_id: i64,

    pub message_thread_id: Option<i32>,

    /// Set up your games via [@BotFather](https://t.me/botfather).
    pub game_short_name: String,

    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,

    /// If empty, one 'Play `game_title`' button will be shown.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for SendGame {
    const NAME: &'static str = "sendGame";

    type Response = Message;
}

/// Set the score of the specified user in a game message.
///
/// Either `chat_id` and `message_id`, or `inline_message_id` must be set.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct SetGameScore {
    pub user_id: i64,

    /// Non-negative.
    pub score: i32,

    /// Allow the high score to decrease.
    pub force: Option<bool>,

    pub disable_edit_message: Option<bool>,
    pub chat_id: Option<i64>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
}

impl Method for SetGameScore {
    const NAME: &'static str = "setGameScore";

    type Response = Either<Message, bool>;
}

/// Get data for high score tables: the score of the specified user and several of their neighbors.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct GetGameHighScores {
    pub user_id: i64,
    pub chat_id: Option<i64>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
}

impl Method for GetGameHighScores {
    const NAME: &'static str = "getGameHighScores";

    type Response = Vec<GameHighScore>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_scores_response_ok() -> Result {
        // language=json
        let scores = GetGameHighScores::decode_response(serde_json::json!([
            {"position": 1, "user": {"id": 1, "is_bot": false, "first_name": "Ada"}, "score": 9000}
        ]))?;
        assert_eq!(scores[0].score, 9000);
        Ok(())
    }

    #[test]
    fn test_set_game_score_inline_ok() -> Result {
        let request = SetGameScore::builder()
            .user_id(1)
            .score(10)
            .inline_message_id("AAA")
            .build()
            .to_request()?;
        assert_eq!(
            Value::Object(request.parameters),
            serde_json::json!({"user_id": 1, "score": 10, "inline_message_id": "AAA"}),
        );
        assert_eq!(SetGameScore::decode_response(Value::Bool(true))?, Either::Right(true));
        Ok(())
    }
}
