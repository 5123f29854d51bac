//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use list_manager::{Confirm, Notice, Notifier};

use crate::api::ApiClient;
use crate::components::{ConfirmDialog, DialogConfirm, ToastNotifier, ToastQueue};
use crate::config::AppConfig;
use crate::session::Session;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Toast stack rendered by `ToastHost`
    pub toasts: ToastQueue,
    /// Confirm dialog rendered by `ConfirmHost`
    pub dialog: ConfirmDialog,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let toasts = ToastQueue::new(config.toast_ms);
        Self {
            config: StoredValue::new(config),
            toasts,
            dialog: ConfirmDialog::new(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    pub fn asset_base(&self) -> String {
        self.config.with_value(|c| c.asset_base.clone())
    }

    /// Client authorized with the session's token
    pub fn api(&self, session: &Session) -> ApiClient {
        ApiClient::new(self.config.with_value(|c| c.api_base.clone()), session.token.clone())
    }

    pub fn notify(&self, notice: Notice) {
        self.toasts.push(notice);
    }

    pub fn notifier(&self) -> Rc<dyn Notifier> {
        Rc::new(ToastNotifier(self.toasts))
    }

    pub fn confirmer(&self) -> Rc<dyn Confirm> {
        Rc::new(DialogConfirm(self.dialog))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
