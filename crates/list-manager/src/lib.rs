//! List Manager
//!
//! UI-agnostic state and orchestration for admin list screens:
//! fetch, client-side search, pagination, modal forms and CRUD mutations.
//!
//! The UI layer owns the state through a [`StateCell`] and supplies the
//! [`ListSource`], [`Notifier`] and [`Confirm`] implementations.

mod error;
mod form;
mod manager;
mod modal;
pub mod pagination;
mod ports;
mod record;
pub mod search;
mod source;
mod state;

pub use error::{ListError, ListResult};
pub use form::{capitalize, humanize, Attachment, FieldValue, FormFields};
pub use manager::{ListManager, Lifetime, StateCell};
pub use modal::{ModalMode, ModalState};
pub use pagination::PAGE_SIZE_OPTIONS;
pub use ports::{Confirm, ConfirmPrompt, Notice, Notifier, Tone};
pub use record::Record;
pub use source::{Ack, ListSource};
pub use state::{ListState, ListView};
