//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod confirm_dialog;
mod fields;
mod header;
mod layout;
mod list_controls;
mod modal;
mod pagination;
mod sidebar;
mod table;
mod toast;

pub use confirm_dialog::{ConfirmDialog, ConfirmHost, DialogConfirm};
pub use fields::{FileField, SelectField, TextArea, TextField};
pub use header::Header;
pub use layout::Shell;
pub use list_controls::{PageSizeSelect, SearchBar};
pub use modal::Modal;
pub use pagination::Pagination;
pub use sidebar::Sidebar;
pub use table::{RowActions, TableBody};
pub use toast::{ToastHost, ToastNotifier, ToastQueue};
