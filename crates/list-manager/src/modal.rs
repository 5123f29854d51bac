//! Modal State
//!
//! `Closed -> Open(view|edit|create) -> Closed`, nothing in between.

use crate::form::{FieldValue, FormFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    View,
    Edit,
    Create,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<R> {
    Closed,
    Open {
        mode: ModalMode,
        target: Option<R>,
        fields: FormFields,
        /// Last failed submit, shown inside the form
        error: Option<String>,
    },
}

impl<R> Default for ModalState<R> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<R> ModalState<R> {
    pub fn open(mode: ModalMode, target: Option<R>, fields: FormFields) -> Self {
        ModalState::Open { mode, target, fields, error: None }
    }

    /// Always drops the staged fields and target
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn mode(&self) -> Option<ModalMode> {
        match self {
            ModalState::Open { mode, .. } => Some(*mode),
            ModalState::Closed => None,
        }
    }

    pub fn target(&self) -> Option<&R> {
        match self {
            ModalState::Open { target, .. } => target.as_ref(),
            ModalState::Closed => None,
        }
    }

    pub fn fields(&self) -> Option<&FormFields> {
        match self {
            ModalState::Open { fields, .. } => Some(fields),
            ModalState::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ModalState::Open { error, .. } => error.as_deref(),
            ModalState::Closed => None,
        }
    }

    /// Ignored while closed
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        if let ModalState::Open { fields, .. } = self {
            fields.set(name, value);
        }
    }

    pub fn set_error(&mut self, message: Option<String>) {
        if let ModalState::Open { error, .. } = self {
            *error = message;
        }
    }
}
