//! Answering inline queries, callback queries and Web App queries.

use serde::Serialize;

use super::Method;
use crate::types::{InlineQueryResult, InlineQueryResultsButton, SentWebAppMessage};

/// `answerInlineQuery`: send results for an inline query. Results are
/// displayed in the order given; at most 50 per answer.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerInlineQueryRequest {
    pub inline_query_id: String,
    pub results: Vec<InlineQueryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_personal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<InlineQueryResultsButton>,
}

impl AnswerInlineQueryRequest {
    pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results,
            cache_time: None,
            is_personal: None,
            next_offset: None,
            button: None,
        }
    }
}

impl Method for AnswerInlineQueryRequest {
    const NAME: &'static str = "answerInlineQuery";
    type Response = bool;
}

/// `answerWebAppQuery`: send the result of an interaction with a Web App to
/// the chat it originated from.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerWebAppQueryRequest {
    pub web_app_query_id: String,
    pub result: InlineQueryResult,
}

impl Method for AnswerWebAppQueryRequest {
    const NAME: &'static str = "answerWebAppQuery";
    type Response = SentWebAppMessage;
}

/// `answerCallbackQuery`: answer a callback query from an inline keyboard
/// button. The user sees no confirmation unless `text` is set.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerCallbackQueryRequest {
    pub callback_query_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i64>,
}

impl AnswerCallbackQueryRequest {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        }
    }
}

impl Method for AnswerCallbackQueryRequest {
    const NAME: &'static str = "answerCallbackQuery";
    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::types::{InlineQueryResultArticle, InputMessageContent, InputTextMessageContent};

    #[test]
    fn answer_inline_query_stamps_result_tags() {
        let article = InlineQueryResultArticle {
            id: "1".into(),
            title: "Title".into(),
            input_message_content: InputMessageContent::Text(InputTextMessageContent {
                message_text: "hello".into(),
                parse_mode: None,
                entities: None,
                disable_web_page_preview: None,
            }),
            reply_markup: None,
            url: None,
            hide_url: None,
            description: None,
            thumbnail_url: None,
            thumbnail_width: None,
            thumbnail_height: None,
        };
        let request = AnswerInlineQueryRequest::new(
            "q1",
            vec![InlineQueryResult::Article(article)],
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["results"][0]["type"], "article");
        assert_eq!(AnswerInlineQueryRequest::NAME, "answerInlineQuery");
    }
}
