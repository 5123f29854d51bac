//! Record Trait
//!
//! The contract every listed server entity fulfils.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A server entity shown as one table row.
pub trait Record: Clone + 'static {
    /// Stable unique identifier
    type Id: Clone + Eq + Hash + Debug + Display + 'static;

    /// Returns the record's identifier
    fn id(&self) -> Self::Id;

    /// Field values matched by the search box, nested sub-objects included.
    /// Missing optional fields are simply left out.
    fn search_fields(&self) -> Vec<&str>;
}
