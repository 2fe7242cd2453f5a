//! Contracts shared by every tabular resource.
//!
//! A [`Record`] is the server-authoritative entity; its [`Draft`] is the
//! client-only, possibly partial overlay used while a row is being created or
//! edited. Drafts are mutated one field at a time through a typed field enum so
//! that each resource shape stays statically checked.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A partial, client-only overlay of a record.
pub trait Draft: Clone + Debug + Default {
    /// One variant per editable field, carrying the field's typed value.
    type Field: Clone + Debug;

    /// Merges a single field into the draft. No validation happens here.
    fn apply(&mut self, field: Self::Field);
}

/// A uniquely identified entity rendered as one table row.
pub trait Record: Clone + Debug {
    type Id: Clone + Debug + Display + Eq + Ord + Hash;
    type Draft: Draft;

    /// The immutable identity of this record.
    fn id(&self) -> &Self::Id;

    /// A shallow copy of this record as a draft, used to seed inline editing.
    fn to_draft(&self) -> Self::Draft;
}
