//! List Manager
//!
//! Drives one list screen: load, search, paginate, open/close the modal and
//! run mutations, reporting every outcome through the injected ports.
//! Errors never escape as panics; each operation notifies the user, logs a
//! diagnostic and returns the error for callers that care.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{ListError, ListResult};
use crate::form::{capitalize, FieldValue, FormFields};
use crate::modal::{ModalMode, ModalState};
use crate::ports::{Confirm, Notice, Notifier};
use crate::record::Record;
use crate::source::{Ack, ListSource};
use crate::state::ListState;

/// Owner of a [`ListState`]. `None` means the owning view is gone.
pub trait StateCell<R: Record>: Clone + 'static {
    fn with<T>(&self, f: impl FnOnce(&ListState<R>) -> T) -> Option<T>;
    fn update<T>(&self, f: impl FnOnce(&mut ListState<R>) -> T) -> Option<T>;
}

impl<R: Record> StateCell<R> for Rc<RefCell<ListState<R>>> {
    fn with<T>(&self, f: impl FnOnce(&ListState<R>) -> T) -> Option<T> {
        Some(f(&self.borrow()))
    }

    fn update<T>(&self, f: impl FnOnce(&mut ListState<R>) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Shared liveness flag of a manager and its clones
#[derive(Debug, Clone, Default)]
pub struct Lifetime(Rc<Cell<bool>>);

impl Lifetime {
    pub fn end(&self) {
        self.0.set(true);
    }

    pub fn is_over(&self) -> bool {
        self.0.get()
    }
}

pub struct ListManager<R: Record, C: StateCell<R>> {
    state: C,
    source: Rc<dyn ListSource<R>>,
    confirm: Rc<dyn Confirm>,
    notifier: Rc<dyn Notifier>,
    lifetime: Lifetime,
}

impl<R: Record, C: StateCell<R>> Clone for ListManager<R, C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            source: Rc::clone(&self.source),
            confirm: Rc::clone(&self.confirm),
            notifier: Rc::clone(&self.notifier),
            lifetime: self.lifetime.clone(),
        }
    }
}

impl<R: Record, C: StateCell<R>> ListManager<R, C> {
    pub fn new(
        state: C,
        source: Rc<dyn ListSource<R>>,
        confirm: Rc<dyn Confirm>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            state,
            source,
            confirm,
            notifier,
            lifetime: Lifetime::default(),
        }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Ends the manager's life; later responses are ignored
    pub fn dispose(&self) {
        self.lifetime.end();
    }

    pub fn is_disposed(&self) -> bool {
        self.lifetime.is_over()
    }

    // ========================
    // Load
    // ========================

    /// Fetch the list and replace `items`. On failure items are kept and
    /// the error is surfaced.
    pub async fn load(&self) -> ListResult<()> {
        if self.is_disposed() {
            return Ok(());
        }
        let Some(seq) = self.state.update(|s| s.begin_load()) else {
            return Ok(());
        };
        let noun = self.source.noun();
        log::debug!("[ListManager] loading {}s (request #{})", noun, seq);

        let result = self.source.fetch().await;
        if self.is_disposed() {
            log::debug!("[ListManager] {} response #{} arrived after teardown", noun, seq);
            return Ok(());
        }

        match result {
            Ok(items) => {
                let count = items.len();
                match self.state.update(|s| s.finish_load(seq, items)) {
                    Some(true) => log::info!("[ListManager] loaded {} {}(s)", count, noun),
                    Some(false) => log::debug!("[ListManager] dropped stale {} response #{}", noun, seq),
                    None => {}
                }
                Ok(())
            }
            Err(err) => {
                self.state.update(|s| s.fail_load(seq));
                log::error!("[ListManager] failed to load {}s: {}", noun, err);
                let fallback = if err.is_transport() {
                    format!("Something went wrong while loading {}s", noun)
                } else {
                    format!("Failed to load {}s", noun)
                };
                self.notify(Notice::error(err.user_message(&fallback)));
                Err(err)
            }
        }
    }

    // ========================
    // Search & Paging
    // ========================

    pub fn search(&self, term: &str) {
        self.state.update(|s| s.search(term));
    }

    pub fn set_page(&self, page: i64) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn set_page_size(&self, size: usize) {
        self.state.update(|s| s.set_page_size(size));
    }

    // ========================
    // Modal
    // ========================

    pub fn open_create(&self) {
        let fields = self.source.blank_form();
        self.state.update(|s| *s.modal_mut() = ModalState::open(ModalMode::Create, None, fields));
    }

    pub fn open_edit(&self, record: R) {
        let fields = self.source.edit_form(&record);
        self.state.update(|s| *s.modal_mut() = ModalState::open(ModalMode::Edit, Some(record), fields));
    }

    pub fn open_view(&self, record: R) {
        self.state.update(|s| *s.modal_mut() = ModalState::open(ModalMode::View, Some(record), FormFields::new()));
    }

    pub fn close_modal(&self) {
        self.state.update(|s| s.modal_mut().close());
    }

    pub fn set_field(&self, name: &str, value: FieldValue) {
        self.state.update(|s| s.modal_mut().set_field(name, value));
    }

    /// Submit the open modal according to its mode
    pub async fn submit(&self) -> ListResult<()> {
        let staged = self.state.with(|s| {
            let modal = s.modal();
            (modal.mode(), modal.target().cloned(), modal.fields().cloned().unwrap_or_default())
        });
        match staged {
            Some((Some(ModalMode::Create), _, fields)) => self.create(fields).await,
            Some((Some(ModalMode::Edit), Some(target), fields)) => self.update(target.id(), fields).await,
            Some((Some(ModalMode::View), _, _)) => {
                self.close_modal();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    // ========================
    // Mutations
    // ========================

    pub async fn create(&self, fields: FormFields) -> ListResult<()> {
        let source = Rc::clone(&self.source);
        let ack = self
            .mutate(ModalMode::Create, &fields, "Something went wrong while saving", async {
                source.create(&fields).await
            })
            .await?;
        self.finish_mutation(&ack, "created");
        self.load().await.ok();
        Ok(())
    }

    pub async fn update(&self, id: R::Id, fields: FormFields) -> ListResult<()> {
        let Some(target) = self.state.with(|s| s.find(&id).cloned()).flatten() else {
            log::warn!("[ListManager] update of unknown {} {}", self.source.noun(), id);
            let err = ListError::Validation(format!("This {} no longer exists", self.source.noun()));
            self.reject_form(&err);
            return Err(err);
        };
        let source = Rc::clone(&self.source);
        let ack = self
            .mutate(ModalMode::Edit, &fields, "Something went wrong while saving", async {
                source.update(&target, &fields).await
            })
            .await?;
        self.finish_mutation(&ack, "updated");
        match self.source.patch(&target, &fields) {
            Some(patched) => {
                self.state.update(|s| s.replace_record(patched));
            }
            None => {
                self.load().await.ok();
            }
        }
        Ok(())
    }

    /// Ask for confirmation, then delete. `Ok(false)` when the user
    /// declined or the record is not listed; no request is sent then.
    pub async fn delete(&self, id: R::Id) -> ListResult<bool> {
        if self.state.with(|s| s.is_busy()).unwrap_or(true) {
            log::debug!("[ListManager] delete of {} {} rejected while busy", self.source.noun(), id);
            return Err(ListError::Busy);
        }
        let Some(target) = self.state.with(|s| s.find(&id).cloned()).flatten() else {
            return Ok(false);
        };
        if !self.confirm.confirm(self.source.delete_prompt(&target)).await {
            log::debug!("[ListManager] delete of {} {} cancelled", self.source.noun(), id);
            return Ok(false);
        }
        if self.is_disposed() || self.state.update(|s| s.set_busy(true)).is_none() {
            return Ok(false);
        }

        let result = self.source.delete(&target).await;
        if self.is_disposed() {
            return Ok(false);
        }
        self.state.update(|s| s.set_busy(false));

        match result {
            Ok(ack) => {
                self.state.update(|s| s.remove(&id));
                self.finish_mutation(&ack, "deleted");
                if self.source.refetch_after_delete() {
                    self.load().await.ok();
                }
                Ok(true)
            }
            Err(err) => {
                log::error!("[ListManager] failed to delete {} {}: {}", self.source.noun(), id, err);
                self.notify(Notice::error(err.user_message("Something went wrong while deleting")));
                Err(err)
            }
        }
    }

    // ========================
    // Helpers
    // ========================

    /// Validate, hold the soft-lock around `request`, and surface failures
    /// inside the still-open modal.
    async fn mutate(
        &self,
        mode: ModalMode,
        fields: &FormFields,
        fallback: &str,
        request: impl std::future::Future<Output = ListResult<Ack>>,
    ) -> ListResult<Ack> {
        if self.state.with(|s| s.is_busy()).unwrap_or(true) {
            log::debug!("[ListManager] {} submit rejected while busy", self.source.noun());
            return Err(ListError::Busy);
        }
        if let Err(err) = self.source.validate(fields, mode) {
            log::warn!("[ListManager] {} form rejected: {}", self.source.noun(), err);
            self.reject_form(&err);
            return Err(err);
        }
        if self.is_disposed() {
            return Err(ListError::Unsupported("request after teardown"));
        }

        self.state.update(|s| {
            s.set_busy(true);
            s.modal_mut().set_error(None);
        });
        let result = request.await;
        if self.is_disposed() {
            return result;
        }
        self.state.update(|s| s.set_busy(false));

        if let Err(err) = &result {
            log::error!("[ListManager] failed to save {}: {}", self.source.noun(), err);
            let message = err.user_message(fallback);
            self.state.update(|s| s.modal_mut().set_error(Some(message.clone())));
            self.notify(Notice::error(message));
        }
        result
    }

    /// Show a rejected form's message in the open modal and as a warning
    fn reject_form(&self, err: &ListError) {
        let message = err.user_message("Please fill in the required fields");
        self.state.update(|s| s.modal_mut().set_error(Some(message.clone())));
        self.notify(Notice::warning(message));
    }

    fn finish_mutation(&self, ack: &Ack, verb: &str) {
        let message = ack
            .message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("{} {} successfully", capitalize(self.source.noun()), verb));
        self.state.update(|s| s.modal_mut().close());
        self.notify(Notice::success(message));
    }

    fn notify(&self, notice: Notice) {
        if !self.is_disposed() {
            self.notifier.notify(notice);
        }
    }
}

#[cfg(test)]
mod tests;
