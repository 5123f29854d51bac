//! List Handle
//!
//! Binds a `ListManager` to a page: the list state lives in a signal so
//! the table re-renders on every change, async operations run on
//! `spawn_local`, and the manager is disposed with the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_manager::{
    Attachment, FieldValue, ListManager, ListSource, ListState, ListView, ModalMode, Record, StateCell,
};

use crate::context::use_app_context;

/// Signal-backed list state; `None` once the page's owner is gone
pub struct SignalCell<R: Record + Send + Sync>(RwSignal<ListState<R>>);

impl<R: Record + Send + Sync> Clone for SignalCell<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record + Send + Sync> Copy for SignalCell<R> {}

impl<R: Record + Send + Sync> StateCell<R> for SignalCell<R> {
    fn with<T>(&self, f: impl FnOnce(&ListState<R>) -> T) -> Option<T> {
        self.0.try_with_untracked(f)
    }

    fn update<T>(&self, f: impl FnOnce(&mut ListState<R>) -> T) -> Option<T> {
        self.0.try_update(f)
    }
}

type Manager<R> = ListManager<R, SignalCell<R>>;

pub struct ListHandle<R: Record + Send + Sync> {
    state: RwSignal<ListState<R>>,
    manager: StoredValue<Manager<R>, LocalStorage>,
}

impl<R: Record + Send + Sync> Clone for ListHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record + Send + Sync> Copy for ListHandle<R> {}

/// Create the list for the current page and start the first load
pub fn use_list<R, S>(source: S) -> ListHandle<R>
where
    R: Record + Send + Sync,
    S: ListSource<R> + 'static,
{
    let ctx = use_app_context();
    let state = RwSignal::new(ListState::new(ctx.page_size()));
    let manager = ListManager::new(SignalCell(state), Rc::new(source), ctx.confirmer(), ctx.notifier());
    let handle = ListHandle {
        state,
        manager: StoredValue::new_local(manager),
    };

    on_cleanup(move || handle.dispose());

    // Load on mount
    Effect::new(move |_| handle.reload());

    handle
}

impl<R: Record + Send + Sync> ListHandle<R> {
    /// Start from `size` rows per page instead of the configured default
    pub fn with_page_size(self, size: usize) -> Self {
        self.set_page_size(size);
        self
    }

    fn manager(&self) -> Option<Manager<R>> {
        self.manager.try_get_value()
    }

    fn dispose(&self) {
        self.manager.try_with_value(|m| m.dispose());
    }

    // ========================
    // Reactive Reads
    // ========================

    pub fn view_status(&self) -> ListView {
        self.state.with(|s| s.view_status())
    }

    pub fn page_items(&self) -> Vec<R> {
        self.state.with(|s| s.page_items())
    }

    /// Row ordinal offset of the current page
    pub fn page_offset(&self) -> usize {
        self.state.with(|s| s.page_offset())
    }

    pub fn page(&self) -> usize {
        self.state.with(|s| s.page())
    }

    pub fn total_pages(&self) -> usize {
        self.state.with(|s| s.total_pages())
    }

    pub fn page_size(&self) -> usize {
        self.state.with(|s| s.page_size())
    }

    pub fn search_term(&self) -> String {
        self.state.with(|s| s.search_term().to_string())
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.is_busy())
    }

    pub fn modal_open(&self) -> bool {
        self.state.with(|s| s.modal().is_open())
    }

    pub fn modal_mode(&self) -> Option<ModalMode> {
        self.state.with(|s| s.modal().mode())
    }

    pub fn modal_target(&self) -> Option<R> {
        self.state.with(|s| s.modal().target().cloned())
    }

    pub fn modal_error(&self) -> Option<String> {
        self.state.with(|s| s.modal().error().map(str::to_string))
    }

    /// Staged text of a modal field
    pub fn field(&self, name: &str) -> String {
        self.state.with(|s| {
            s.modal()
                .fields()
                .map(|f| f.text(name).to_string())
                .unwrap_or_default()
        })
    }

    // ========================
    // Actions
    // ========================

    pub fn reload(&self) {
        if let Some(manager) = self.manager() {
            spawn_local(async move {
                manager.load().await.ok();
            });
        }
    }

    pub fn search(&self, term: &str) {
        self.manager.try_with_value(|m| m.search(term));
    }

    pub fn set_page(&self, page: i64) {
        self.manager.try_with_value(|m| m.set_page(page));
    }

    pub fn set_page_size(&self, size: usize) {
        self.manager.try_with_value(|m| m.set_page_size(size));
    }

    pub fn open_create(&self) {
        self.manager.try_with_value(|m| m.open_create());
    }

    pub fn open_edit(&self, record: R) {
        self.manager.try_with_value(|m| m.open_edit(record));
    }

    pub fn open_view(&self, record: R) {
        self.manager.try_with_value(|m| m.open_view(record));
    }

    pub fn close_modal(&self) {
        self.manager.try_with_value(|m| m.close_modal());
    }

    pub fn set_text(&self, name: &str, value: String) {
        self.manager.try_with_value(|m| m.set_field(name, FieldValue::Text(value)));
    }

    /// Stage a picked file; `None` clears the staged attachment
    pub fn set_file(&self, name: &str, file: Option<Attachment>) {
        let value = file.map(FieldValue::File).unwrap_or_else(|| {
            FieldValue::File(Attachment {
                file_name: String::new(),
                mime_type: String::new(),
                bytes: Vec::new(),
            })
        });
        self.manager.try_with_value(|m| m.set_field(name, value));
    }

    pub fn submit(&self) {
        if let Some(manager) = self.manager() {
            spawn_local(async move {
                manager.submit().await.ok();
            });
        }
    }

    pub fn delete(&self, id: R::Id) {
        if let Some(manager) = self.manager() {
            spawn_local(async move {
                manager.delete(id).await.ok();
            });
        }
    }

    // ========================
    // Prop Helpers
    // ========================

    pub fn search_signal(self) -> Signal<String> {
        Signal::derive(move || self.search_term())
    }

    pub fn search_callback(self) -> Callback<String> {
        Callback::new(move |term: String| self.search(&term))
    }

    pub fn page_signal(self) -> Signal<usize> {
        Signal::derive(move || self.page())
    }

    pub fn total_signal(self) -> Signal<usize> {
        Signal::derive(move || self.total_pages())
    }

    pub fn page_callback(self) -> Callback<i64> {
        Callback::new(move |page| self.set_page(page))
    }

    pub fn page_size_signal(self) -> Signal<usize> {
        Signal::derive(move || self.page_size())
    }

    pub fn page_size_callback(self) -> Callback<usize> {
        Callback::new(move |size| self.set_page_size(size))
    }

    pub fn status_signal(self) -> Signal<ListView> {
        Signal::derive(move || self.view_status())
    }

    pub fn field_signal(self, name: &'static str) -> Signal<String> {
        Signal::derive(move || self.field(name))
    }

    pub fn field_callback(self, name: &'static str) -> Callback<String> {
        Callback::new(move |value| self.set_text(name, value))
    }

    pub fn busy_signal(self) -> Signal<bool> {
        Signal::derive(move || self.is_busy())
    }

    pub fn modal_open_signal(self) -> Signal<bool> {
        Signal::derive(move || self.modal_open())
    }

    pub fn modal_error_signal(self) -> Signal<Option<String>> {
        Signal::derive(move || self.modal_error())
    }

    pub fn close_callback(self) -> Callback<()> {
        Callback::new(move |_| self.close_modal())
    }
}
