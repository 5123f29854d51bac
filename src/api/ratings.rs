//! Rating Source
//!
//! The list is read with an empty JSON filter body; deletes go through a
//! REST-style DELETE and are followed by a refetch.

use async_trait::async_trait;
use list_manager::{Ack, ConfirmPrompt, ListResult, ListSource};
use serde_json::json;

use super::envelope::{decode_ack, decode_list};
use super::ApiClient;
use crate::models::Rating;

pub struct Ratings {
    api: ApiClient,
}

impl Ratings {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ListSource<Rating> for Ratings {
    fn noun(&self) -> &'static str {
        "rating"
    }

    async fn fetch(&self) -> ListResult<Vec<Rating>> {
        let body = self.api.post_json("/daily-all-rating-list", &json!({})).await?;
        decode_list(&body, "data")
    }

    async fn delete(&self, target: &Rating) -> ListResult<Ack> {
        decode_ack(&self.api.delete(&format!("/delete-rating/{}", target.id)).await?)
    }

    fn refetch_after_delete(&self) -> bool {
        true
    }

    fn delete_prompt(&self, _record: &Rating) -> ConfirmPrompt {
        ConfirmPrompt::new("Are you sure?", "You won't be able to revert this!")
    }
}
