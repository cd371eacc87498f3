use bon::Builder;
use serde_with::skip_serializing_none;

use crate::{
    methods::Method,
    objects::{InlineQueryResult, InlineQueryResultsButton, SentWebAppMessage},
    prelude::*,
};

/// Send answers to an inline query. No more than 50 results per query are allowed.
///
/// See also: <https://core.telegram.org/bots/api#answerinlinequery>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results: Vec<InlineQueryResult>,

    /// The maximum amount of time in seconds that the result of the inline query may be cached
    /// on the server. Defaults to 300.
    pub cache_time: Option<i32>,

    /// Cache results on the server side only for the user that sent the query.
    pub is_personal: Option<bool>,

    /// Pass an empty string if there are no more results or if you don't support pagination.
    /// Offset length can't exceed 64 bytes.
    pub next_offset: Option<String>,

    pub button: Option<InlineQueryResultsButton>,
}

impl Method for AnswerInlineQuery {
    const NAME: &'static str = "answerInlineQuery";

    type Response = bool;
}

/// Set the result of an interaction with a [Web App][1] and send a corresponding message on
/// behalf of the user to the chat from which the query originated.
///
/// [1]: https://core.telegram.org/bots/webapps
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(InlineQueryResult, into))]
#[must_use]
pub struct AnswerWebAppQuery {
    pub web_app_query_id: String,
    pub result: InlineQueryResult,
}

impl Method for AnswerWebAppQuery {
    const NAME: &'static str = "answerWebAppQuery";

    type Response = SentWebAppMessage;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{
        InlineQueryResultArticle, InlineQueryResultCachedSticker, InputTextMessageContent,
    };

    #[test]
    fn test_answer_inline_query_ok() -> Result {
        let article = InlineQueryResultArticle::builder()
            .id("1")
            .title("Hello")
            .input_message_content(
                InputTextMessageContent::builder().message_text("Hello!").build().into(),
            )
            .build();
        let sticker =
            InlineQueryResultCachedSticker::builder().id("2").sticker_file_id("CAAC").build();
        let request = AnswerInlineQuery::builder()
            .inline_query_id("42")
            .results(vec![article.into(), sticker.into()])
            .cache_time(0)
            .build()
            .to_request()?;
        assert_eq!(
            request.parameters["results"],
            // language=json
            serde_json::json!([
                {
                    "type": "article",
                    "id": "1",
                    "title": "Hello",
                    "input_message_content": {"message_text": "Hello!"},
                },
                {"type": "sticker", "id": "2", "sticker_file_id": "CAAC"},
            ]),
        );
        Ok(())
    }

    #[test]
    fn test_request_round_trip_ok() -> Result {
        let method = AnswerWebAppQuery::builder()
            .web_app_query_id("q")
            .result(
                InlineQueryResultCachedSticker::builder().id("1").sticker_file_id("CAAC").build(),
            )
            .build();
        let request = method.to_request()?;
        let decoded: AnswerWebAppQuery = crate::codec::decode(Value::Object(request.parameters))?;
        assert_eq!(decoded, method);
        Ok(())
    }
}
