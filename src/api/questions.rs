//! Check-in Question Sources
//!
//! Daily questions speak JSON; weekly questions are posted as multipart
//! and record the acting user.

use async_trait::async_trait;
use list_manager::{humanize, Ack, FormFields, ListError, ListResult, ListSource, ModalMode};
use serde_json::json;

use super::envelope::{decode_ack, decode_list};
use super::{require_user, ApiClient};
use crate::models::Question;

pub const QUESTION_STATUSES: &[(&str, &str)] = &[("active", "Active"), ("inactive", "Inactive")];

fn question_form(question: &str, status: &str) -> FormFields {
    FormFields::new().with("question", question).with("status", status)
}

// ========================
// Daily
// ========================

pub struct DailyQuestions {
    api: ApiClient,
}

impl DailyQuestions {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ListSource<Question> for DailyQuestions {
    fn noun(&self) -> &'static str {
        "question"
    }

    async fn fetch(&self) -> ListResult<Vec<Question>> {
        let body = self.api.get("/questions", &[]).await?;
        decode_list(&body, "data")
    }

    async fn create(&self, fields: &FormFields) -> ListResult<Ack> {
        let body = json!({
            "question": fields.text("question").trim(),
            "status": fields.text("status"),
        });
        decode_ack(&self.api.post_json("/question-create", &body).await?)
    }

    async fn update(&self, target: &Question, fields: &FormFields) -> ListResult<Ack> {
        let body = json!({
            "id": target.id,
            "question": fields.text("question").trim(),
            "status": fields.text("status"),
        });
        decode_ack(&self.api.post_json("/question-update", &body).await?)
    }

    async fn delete(&self, target: &Question) -> ListResult<Ack> {
        decode_ack(&self.api.post_json("/question-delete", &json!({ "id": target.id })).await?)
    }

    fn blank_form(&self) -> FormFields {
        question_form("", "active")
    }

    fn edit_form(&self, record: &Question) -> FormFields {
        question_form(&record.question, &record.status.to_lowercase())
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["question", "status"]
    }
}

// ========================
// Weekly
// ========================

pub struct WeeklyQuestions {
    api: ApiClient,
    user_id: Option<u64>,
}

impl WeeklyQuestions {
    pub fn new(api: ApiClient, user_id: Option<u64>) -> Self {
        Self { api, user_id }
    }

    fn payload(&self, fields: &FormFields) -> ListResult<FormFields> {
        let user_id = require_user(self.user_id)?;
        Ok(FormFields::new()
            .with("question", fields.text("question").trim())
            .with("status", fields.text("status").to_lowercase())
            .with("user_id", user_id.to_string()))
    }
}

#[async_trait(?Send)]
impl ListSource<Question> for WeeklyQuestions {
    fn noun(&self) -> &'static str {
        "question"
    }

    async fn fetch(&self) -> ListResult<Vec<Question>> {
        let body = self.api.get("/weakly-questions-list", &[]).await?;
        decode_list(&body, "data")
    }

    async fn create(&self, fields: &FormFields) -> ListResult<Ack> {
        let payload = self.payload(fields)?;
        decode_ack(&self.api.post_form("/weakly-question", &payload).await?)
    }

    async fn update(&self, target: &Question, fields: &FormFields) -> ListResult<Ack> {
        let payload = self.payload(fields)?.with("id", target.id.to_string());
        decode_ack(&self.api.post_form("/weakly-question-update", &payload).await?)
    }

    async fn delete(&self, target: &Question) -> ListResult<Ack> {
        let user_id = require_user(self.user_id)?;
        let payload = FormFields::new()
            .with("id", target.id.to_string())
            .with("user_id", user_id.to_string());
        decode_ack(&self.api.post_form("/weakly-question-delete", &payload).await?)
    }

    fn blank_form(&self) -> FormFields {
        question_form("", "active")
    }

    fn edit_form(&self, record: &Question) -> FormFields {
        question_form(&record.question, &record.status.to_lowercase())
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["question", "status"]
    }

    fn validate(&self, fields: &FormFields, _mode: ModalMode) -> ListResult<()> {
        if let Some(name) = fields.first_blank(self.required_fields()) {
            return Err(ListError::Validation(format!("{} cannot be empty", humanize(name))));
        }
        require_user(self.user_id).map(|_| ())
    }

    fn refetch_after_delete(&self) -> bool {
        true
    }
}
