//! Recommendation Source
//!
//! Listed per user under the `recommendations` key; all mutations are
//! multipart and carry the acting user id.

use async_trait::async_trait;
use list_manager::{Ack, FormFields, ListResult, ListSource};

use super::envelope::{decode_ack, decode_list};
use super::{require_user, ApiClient};
use crate::models::Recommendation;

pub const RECOMMENDATION_TEXT_FIELDS: &[&str] = &["title", "subtitle", "description", "button_label", "button_link"];

pub struct Recommendations {
    api: ApiClient,
    user_id: Option<u64>,
}

impl Recommendations {
    pub fn new(api: ApiClient, user_id: Option<u64>) -> Self {
        Self { api, user_id }
    }

    /// Non-blank staged fields plus the acting user
    fn payload(&self, fields: &FormFields) -> ListResult<FormFields> {
        let user_id = require_user(self.user_id)?;
        let mut payload = FormFields::new();
        for (name, value) in fields.iter().filter(|(_, value)| !value.is_blank()) {
            payload.set(name, value.clone());
        }
        payload.set_text("user_id", user_id.to_string());
        Ok(payload)
    }
}

#[async_trait(?Send)]
impl ListSource<Recommendation> for Recommendations {
    fn noun(&self) -> &'static str {
        "recommendation"
    }

    async fn fetch(&self) -> ListResult<Vec<Recommendation>> {
        let query: Vec<(&str, String)> = self
            .user_id
            .map(|id| ("user_id", id.to_string()))
            .into_iter()
            .collect();
        let body = self.api.get("/recomendation-all", &query).await?;
        decode_list(&body, "recommendations")
    }

    async fn create(&self, fields: &FormFields) -> ListResult<Ack> {
        let payload = self.payload(fields)?;
        decode_ack(&self.api.post_form("/recomendation-create", &payload).await?)
    }

    async fn update(&self, target: &Recommendation, fields: &FormFields) -> ListResult<Ack> {
        let mut payload = self.payload(fields)?;
        payload.set_text("id", target.id.to_string());
        decode_ack(&self.api.post_form("/recomendation-update", &payload).await?)
    }

    async fn delete(&self, target: &Recommendation) -> ListResult<Ack> {
        let payload = FormFields::new()
            .with("user_id", require_user(self.user_id)?.to_string())
            .with("id", target.id.to_string());
        decode_ack(&self.api.post_form("/recomendation-delete", &payload).await?)
    }

    fn blank_form(&self) -> FormFields {
        RECOMMENDATION_TEXT_FIELDS
            .iter()
            .fold(FormFields::new(), |form, name| form.with(name, ""))
    }

    fn edit_form(&self, record: &Recommendation) -> FormFields {
        FormFields::new()
            .with("title", record.title.clone())
            .with("subtitle", record.subtitle.clone())
            .with("description", record.description.clone())
            .with("button_label", record.button_label.clone())
            .with("button_link", record.button_link.clone())
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["title", "description"]
    }

    fn refetch_after_delete(&self) -> bool {
        true
    }
}
