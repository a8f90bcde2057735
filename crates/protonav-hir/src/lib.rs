//! Proto symbol model consumed by the name-resolution engine.
//!
//! This crate mirrors the shape of the symbol tree an external parser
//! produces: a [`ProtoFile`] carrying Java generation options and an
//! owner-chained arena of named [`Symbol`]s (messages, fields, groups,
//! enums, enum values, oneofs). It knows nothing about Java or about any
//! symbol index; it only answers structural questions (owner chains, type
//! paths, children).

pub mod builder;
pub mod hir;
pub mod options;

pub use builder::{HirError, ProtoFileBuilder};
pub use hir::{Arena, FieldLabel, ProtoFile, Symbol, SymbolId, SymbolKind};
pub use options::{ApiVersion, JavaOptions};

#[cfg(test)]
mod tests;
