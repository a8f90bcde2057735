//! IDE-facing features: resolving proto symbols to the Java elements their
//! generated code occupies, and exposing those elements as additional
//! find-usages targets.
//!
//! One [`ProtoToJavaConverter`] serves one user action, synchronously; the
//! Java index is only ever read. Absent generated code resolves to `None`,
//! which downstream integrations treat as "contribute nothing".

pub mod convert;
pub mod usages;

pub use convert::{resolve, ProtoToJavaConverter};
pub use usages::{can_find_usages, create_find_usages_handler, UsageTarget, UsagesHandler};
