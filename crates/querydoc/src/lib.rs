//! Build, validate, normalize and serialize query documents from untyped
//! selection values against a [`SchemaIndex`](crate::schema::SchemaIndex).
//!
//! Most callers only need [`translate()`], which runs the whole pipeline and
//! returns either the wire text or the [`Diagnostics`](crate::document::Diagnostics)
//! explaining why the selection was rejected.

pub use querydoc_core::*;
