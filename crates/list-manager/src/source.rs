//! List Source
//!
//! The endpoint set behind one list screen. Read is mandatory,
//! mutations default to `Unsupported` for read-only screens.

use async_trait::async_trait;

use crate::error::{ListError, ListResult};
use crate::form::{humanize, FormFields};
use crate::modal::ModalMode;
use crate::ports::ConfirmPrompt;
use crate::record::Record;

/// Successful mutation response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    /// Server-provided success text, if any
    pub message: Option<String>,
}

impl Ack {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }
}

#[async_trait(?Send)]
pub trait ListSource<R: Record> {
    /// Singular lowercase noun used in messages, e.g. "question"
    fn noun(&self) -> &'static str;

    async fn fetch(&self) -> ListResult<Vec<R>>;

    async fn create(&self, _fields: &FormFields) -> ListResult<Ack> {
        Err(ListError::Unsupported("create"))
    }

    async fn update(&self, _target: &R, _fields: &FormFields) -> ListResult<Ack> {
        Err(ListError::Unsupported("update"))
    }

    async fn delete(&self, _target: &R) -> ListResult<Ack> {
        Err(ListError::Unsupported("delete"))
    }

    /// Initial fields of the create form
    fn blank_form(&self) -> FormFields {
        FormFields::new()
    }

    /// Fields of the edit form, prefilled from `record`
    fn edit_form(&self, _record: &R) -> FormFields {
        FormFields::new()
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[]
    }

    /// Client-side check run before any request
    fn validate(&self, fields: &FormFields, _mode: ModalMode) -> ListResult<()> {
        match fields.first_blank(self.required_fields()) {
            Some(name) => Err(ListError::Validation(format!("{} cannot be empty", humanize(name)))),
            None => Ok(()),
        }
    }

    /// The updated record as a refetch would return it, when it can be
    /// derived locally. `None` triggers a refetch.
    fn patch(&self, _target: &R, _fields: &FormFields) -> Option<R> {
        None
    }

    /// Refetch after a delete instead of relying on local removal alone
    fn refetch_after_delete(&self) -> bool {
        false
    }

    fn delete_prompt(&self, _record: &R) -> ConfirmPrompt {
        ConfirmPrompt::new(
            "Are you sure?",
            format!("Do you want to delete this {}?", self.noun()),
        )
    }
}
