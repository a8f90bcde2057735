//! Core shared types for Protonav.
//!
//! This crate is intentionally small and dependency-free.

use std::fmt;

/// Identifier of a module in the host project model.
///
/// Modules partition the project for search scoping; what a module *is*
/// (a Gradle subproject, a workspace member, ...) is the host's business.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u32);

impl ModuleId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        ModuleId(raw)
    }

    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

/// The search domain a symbol lookup is restricted to.
///
/// A proto element that belongs to a module is resolved against that module,
/// its dependencies and its libraries; anything else is resolved against the
/// whole project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchScope {
    /// Every class the project knows about.
    Project,
    /// The given module, its direct dependencies, and library classes.
    Module(ModuleId),
}
