//! Candidate Java names generated by protoc for proto symbols.
//!
//! Everything in this crate is a pure function of a [`ProtoFile`] snapshot:
//! no symbol index is ever consulted, so candidate-name logic can be
//! exercised without any host environment. Looking candidates up is the
//! resolver's job, strictly a later phase.
//!
//! A [`NameGenerator`] represents one naming convention. Several
//! conventions can apply to one file at the same time (legacy option
//! combinations); [`select_for_file`] returns them all and callers union
//! the candidates.
//!
//! [`ProtoFile`]: protonav_hir::ProtoFile

pub mod casing;
pub mod generator;
pub mod immutable;
pub mod legacy;
pub mod matcher;
pub mod selector;

pub use generator::{field_name, NameGenerator};
pub use immutable::ImmutableNameGenerator;
pub use legacy::LegacyNameGenerator;
pub use matcher::{MatchContext, NameMatcher};
pub use selector::select_for_file;
