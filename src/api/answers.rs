//! Answer Sources
//!
//! Daily answers can be corrected and removed; weekly answers are
//! read-only.

use async_trait::async_trait;
use list_manager::{Ack, ConfirmPrompt, FormFields, ListResult, ListSource};
use serde_json::json;

use super::envelope::{decode_ack, decode_list};
use super::ApiClient;
use crate::models::{Answer, WeeklyAnswer};

pub struct DailyAnswers {
    api: ApiClient,
}

impl DailyAnswers {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ListSource<Answer> for DailyAnswers {
    fn noun(&self) -> &'static str {
        "answer"
    }

    async fn fetch(&self) -> ListResult<Vec<Answer>> {
        let body = self.api.get("/answer-list", &[]).await?;
        decode_list(&body, "data")
    }

    async fn update(&self, target: &Answer, fields: &FormFields) -> ListResult<Ack> {
        let body = json!({
            "id": target.id,
            "answer": fields.text("answer"),
            "question_id": target.question_id,
            "user_id": target.user_id,
        });
        decode_ack(&self.api.post_json("/answer-update", &body).await?)
    }

    async fn delete(&self, target: &Answer) -> ListResult<Ack> {
        decode_ack(&self.api.post_json("/answer-delete", &json!({ "id": target.id })).await?)
    }

    fn edit_form(&self, record: &Answer) -> FormFields {
        FormFields::new().with("answer", record.answer.clone())
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["answer"]
    }

    /// The server stores the submitted text verbatim
    fn patch(&self, target: &Answer, fields: &FormFields) -> Option<Answer> {
        Some(Answer {
            answer: fields.text("answer").to_string(),
            ..target.clone()
        })
    }

    fn delete_prompt(&self, _record: &Answer) -> ConfirmPrompt {
        ConfirmPrompt::new("Are you sure?", "You won't be able to revert this!")
    }
}

pub struct WeeklyAnswers {
    api: ApiClient,
}

impl WeeklyAnswers {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ListSource<WeeklyAnswer> for WeeklyAnswers {
    fn noun(&self) -> &'static str {
        "answer"
    }

    async fn fetch(&self) -> ListResult<Vec<WeeklyAnswer>> {
        let body = self.api.get("/weakly-answer-list", &[]).await?;
        decode_list(&body, "data")
    }
}
