use protonav_core::ModuleId;
use std::fmt;

use crate::options::JavaOptions;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        SymbolId(raw)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena<T> {
    data: Vec<T>,
}

impl<T> Arena<T> {
    pub fn alloc(&mut self, value: T) -> u32 {
        let idx = self.data.len() as u32;
        self.data.push(value);
        idx
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (i as u32, v))
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena { data: Vec::new() }
    }
}

impl<T> std::ops::Index<SymbolId> for Arena<T> {
    type Output = T;

    fn index(&self, index: SymbolId) -> &Self::Output {
        &self.data[index.idx()]
    }
}

impl<T> std::ops::IndexMut<SymbolId> for Arena<T> {
    fn index_mut(&mut self, index: SymbolId) -> &mut Self::Output {
        &mut self.data[index.idx()]
    }
}

/// Cardinality of a field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    Optional,
    Required,
    Repeated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub parent: Option<SymbolId>,
    pub kind: SymbolKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    Message {
        children: Vec<SymbolId>,
    },
    /// A legacy group: a nested message type that simultaneously declares a
    /// field. The implicit field is recorded as an additional sibling so the
    /// two declarations can be resolved together.
    Group {
        children: Vec<SymbolId>,
        additional_siblings: Vec<SymbolId>,
    },
    Field {
        label: FieldLabel,
        type_name: Option<String>,
        /// True for the synthetic field a group declaration introduces.
        is_group: bool,
    },
    Enum {
        values: Vec<SymbolId>,
    },
    EnumValue,
    Oneof {
        fields: Vec<SymbolId>,
    },
}

impl SymbolKind {
    /// Messages and groups both generate a Java message class.
    #[must_use]
    pub fn is_message_type(&self) -> bool {
        matches!(
            self,
            SymbolKind::Message { .. } | SymbolKind::Group { .. }
        )
    }

    /// Child ids for container kinds, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[SymbolId] {
        match self {
            SymbolKind::Message { children } | SymbolKind::Group { children, .. } => children,
            SymbolKind::Enum { values } => values,
            SymbolKind::Oneof { fields } => fields,
            SymbolKind::Field { .. } | SymbolKind::EnumValue => &[],
        }
    }
}

/// An immutable snapshot of one parsed proto file.
///
/// Owner links always point at an earlier arena entry, so walks up the chain
/// terminate. The snapshot is taken once per resolution call; nothing in
/// this crate mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoFile {
    pub(crate) file_name: String,
    pub(crate) package: Option<String>,
    pub(crate) options: JavaOptions,
    pub(crate) module: Option<ModuleId>,
    pub(crate) symbols: Arena<Symbol>,
    pub(crate) top_level: Vec<SymbolId>,
}

impl ProtoFile {
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &JavaOptions {
        &self.options
    }

    #[must_use]
    pub fn module(&self) -> Option<ModuleId> {
        self.module
    }

    #[must_use]
    pub fn top_level(&self) -> &[SymbolId] {
        &self.top_level
    }

    #[must_use]
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id]
    }

    #[must_use]
    pub fn name(&self, id: SymbolId) -> &str {
        &self.symbols[id].name
    }

    #[must_use]
    pub fn parent(&self, id: SymbolId) -> Option<SymbolId> {
        self.symbols[id].parent
    }

    pub fn symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols.iter().map(|(raw, sym)| (SymbolId::from_raw(raw), sym))
    }

    /// Walks the owner chain starting at `id`'s parent, outwards.
    pub fn ancestors(&self, id: SymbolId) -> impl Iterator<Item = SymbolId> + '_ {
        std::iter::successors(self.parent(id), move |&cur| self.parent(cur))
    }

    /// The nearest enclosing message or group, skipping oneofs.
    ///
    /// Fields declared inside a oneof still belong to the message's symbol
    /// space, so the oneof is not their owning message type.
    #[must_use]
    pub fn owning_message(&self, id: SymbolId) -> Option<SymbolId> {
        self.ancestors(id)
            .find(|&anc| self.symbols[anc].kind.is_message_type())
            .filter(|&anc| {
                // A oneof in between is fine; anything else that is not a
                // message type means the owner chain is malformed.
                self.ancestors(id)
                    .take_while(|&a| a != anc)
                    .all(|a| matches!(self.symbols[a].kind, SymbolKind::Oneof { .. }))
            })
    }

    /// The nearest enclosing enum definition, if any.
    #[must_use]
    pub fn enclosing_enum(&self, id: SymbolId) -> Option<SymbolId> {
        self.ancestors(id)
            .find(|&anc| matches!(self.symbols[anc].kind, SymbolKind::Enum { .. }))
    }

    /// Whether `id` is declared directly inside a oneof.
    #[must_use]
    pub fn is_oneof_member(&self, id: SymbolId) -> bool {
        self.parent(id)
            .is_some_and(|p| matches!(self.symbols[p].kind, SymbolKind::Oneof { .. }))
    }

    /// The chain of type declarations (messages, groups, enums) from the
    /// file level down to and including `id` itself.
    #[must_use]
    pub fn type_path(&self, id: SymbolId) -> Vec<&str> {
        let mut path: Vec<&str> = Vec::new();
        let mut cur = Some(id);
        while let Some(sym_id) = cur {
            let sym = &self.symbols[sym_id];
            match sym.kind {
                SymbolKind::Message { .. } | SymbolKind::Group { .. } | SymbolKind::Enum { .. } => {
                    path.push(&sym.name);
                }
                SymbolKind::Field { .. } | SymbolKind::EnumValue | SymbolKind::Oneof { .. } => {}
            }
            cur = sym.parent;
        }
        path.reverse();
        path
    }

    /// Dotted proto-level name, for diagnostics.
    #[must_use]
    pub fn qualified_name(&self, id: SymbolId) -> String {
        let mut segments: Vec<&str> = self.ancestors(id).map(|a| self.name(a)).collect();
        segments.reverse();
        segments.push(self.name(id));
        segments.join(".")
    }
}
