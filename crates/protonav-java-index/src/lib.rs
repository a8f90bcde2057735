//! The Java symbol index seam.
//!
//! The resolution engine never creates Java symbols; it only looks them up
//! through the [`JavaIndex`] trait, which a host IDE backs with its real
//! project index. [`InMemoryJavaIndex`] is a reference implementation used
//! by tests and by hosts that keep their class model in memory.

pub mod index;
pub mod memory;

pub use index::{ClassId, FieldId, JavaElement, JavaIndex, MethodId};
pub use memory::InMemoryJavaIndex;
