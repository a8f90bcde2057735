use protonav_core::ModuleId;
use thiserror::Error;

use crate::hir::{Arena, FieldLabel, ProtoFile, Symbol, SymbolId, SymbolKind};
use crate::options::JavaOptions;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HirError {
    #[error("symbol name must not be empty")]
    EmptyName,
    #[error("a {child} cannot be declared inside a {parent}")]
    InvalidOwner {
        parent: &'static str,
        child: &'static str,
    },
}

/// Incrementally builds an immutable [`ProtoFile`] snapshot.
///
/// Hosts with a real parser lower their syntax tree through this builder;
/// tests use it directly. Owner-kind rules are checked at insertion time so
/// a finished file never has a malformed owner chain by construction.
#[derive(Debug)]
pub struct ProtoFileBuilder {
    file_name: String,
    package: Option<String>,
    options: JavaOptions,
    module: Option<ModuleId>,
    symbols: Arena<Symbol>,
    top_level: Vec<SymbolId>,
}

impl ProtoFileBuilder {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            package: None,
            options: JavaOptions::default(),
            module: None,
            symbols: Arena::default(),
            top_level: Vec::new(),
        }
    }

    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: JavaOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn module(mut self, module: ModuleId) -> Self {
        self.module = Some(module);
        self
    }

    pub fn message(
        &mut self,
        parent: Option<SymbolId>,
        name: impl Into<String>,
    ) -> Result<SymbolId, HirError> {
        self.add_type(parent, name.into(), SymbolKind::Message { children: Vec::new() }, "message")
    }

    pub fn enum_def(
        &mut self,
        parent: Option<SymbolId>,
        name: impl Into<String>,
    ) -> Result<SymbolId, HirError> {
        self.add_type(parent, name.into(), SymbolKind::Enum { values: Vec::new() }, "enum")
    }

    /// Declares a group: the nested message type plus the implicit sibling
    /// field it introduces. Returns `(group, field)`.
    pub fn group(
        &mut self,
        parent: Option<SymbolId>,
        name: impl Into<String>,
        label: FieldLabel,
    ) -> Result<(SymbolId, SymbolId), HirError> {
        let name = name.into();
        let group = self.add_type(
            parent,
            name.clone(),
            SymbolKind::Group {
                children: Vec::new(),
                additional_siblings: Vec::new(),
            },
            "group",
        )?;
        // The implicit field is named after the group with the identifier
        // lowercased, and keeps the group type as its type name.
        let field = self.alloc(
            parent,
            name.to_ascii_lowercase(),
            SymbolKind::Field {
                label,
                type_name: Some(name),
                is_group: true,
            },
        );
        self.attach(parent, field);
        if let SymbolKind::Group {
            additional_siblings, ..
        } = &mut self.symbols[group].kind
        {
            additional_siblings.push(field);
        }
        Ok((group, field))
    }

    pub fn field(
        &mut self,
        parent: SymbolId,
        name: impl Into<String>,
        label: FieldLabel,
        type_name: Option<&str>,
    ) -> Result<SymbolId, HirError> {
        let name = name.into();
        if name.is_empty() {
            return Err(HirError::EmptyName);
        }
        match self.symbols[parent].kind {
            SymbolKind::Message { .. } | SymbolKind::Group { .. } | SymbolKind::Oneof { .. } => {}
            _ => {
                return Err(HirError::InvalidOwner {
                    parent: self.kind_name(parent),
                    child: "field",
                })
            }
        }
        let id = self.alloc(
            Some(parent),
            name,
            SymbolKind::Field {
                label,
                type_name: type_name.map(str::to_owned),
                is_group: false,
            },
        );
        self.attach(Some(parent), id);
        Ok(id)
    }

    pub fn oneof(
        &mut self,
        parent: SymbolId,
        name: impl Into<String>,
    ) -> Result<SymbolId, HirError> {
        let name = name.into();
        if name.is_empty() {
            return Err(HirError::EmptyName);
        }
        if !self.symbols[parent].kind.is_message_type() {
            return Err(HirError::InvalidOwner {
                parent: self.kind_name(parent),
                child: "oneof",
            });
        }
        let id = self.alloc(Some(parent), name, SymbolKind::Oneof { fields: Vec::new() });
        self.attach(Some(parent), id);
        Ok(id)
    }

    pub fn enum_value(
        &mut self,
        parent: SymbolId,
        name: impl Into<String>,
    ) -> Result<SymbolId, HirError> {
        let name = name.into();
        if name.is_empty() {
            return Err(HirError::EmptyName);
        }
        if !matches!(self.symbols[parent].kind, SymbolKind::Enum { .. }) {
            return Err(HirError::InvalidOwner {
                parent: self.kind_name(parent),
                child: "enum value",
            });
        }
        let id = self.alloc(Some(parent), name, SymbolKind::EnumValue);
        self.attach(Some(parent), id);
        Ok(id)
    }

    #[must_use]
    pub fn finish(self) -> ProtoFile {
        ProtoFile {
            file_name: self.file_name,
            package: self.package,
            options: self.options,
            module: self.module,
            symbols: self.symbols,
            top_level: self.top_level,
        }
    }

    fn add_type(
        &mut self,
        parent: Option<SymbolId>,
        name: String,
        kind: SymbolKind,
        what: &'static str,
    ) -> Result<SymbolId, HirError> {
        if name.is_empty() {
            return Err(HirError::EmptyName);
        }
        if let Some(parent) = parent {
            if !self.symbols[parent].kind.is_message_type() {
                return Err(HirError::InvalidOwner {
                    parent: self.kind_name(parent),
                    child: what,
                });
            }
        }
        let id = self.alloc(parent, name, kind);
        self.attach(parent, id);
        Ok(id)
    }

    fn alloc(&mut self, parent: Option<SymbolId>, name: String, kind: SymbolKind) -> SymbolId {
        let raw = self.symbols.alloc(Symbol { name, parent, kind });
        SymbolId::from_raw(raw)
    }

    fn attach(&mut self, parent: Option<SymbolId>, id: SymbolId) {
        match parent {
            None => self.top_level.push(id),
            Some(parent) => match &mut self.symbols[parent].kind {
                SymbolKind::Message { children } | SymbolKind::Group { children, .. } => {
                    children.push(id)
                }
                SymbolKind::Enum { values } => values.push(id),
                SymbolKind::Oneof { fields } => fields.push(id),
                SymbolKind::Field { .. } | SymbolKind::EnumValue => {
                    unreachable!("owner kinds are checked before allocation")
                }
            },
        }
    }

    fn kind_name(&self, id: SymbolId) -> &'static str {
        match self.symbols[id].kind {
            SymbolKind::Message { .. } => "message",
            SymbolKind::Group { .. } => "group",
            SymbolKind::Field { .. } => "field",
            SymbolKind::Enum { .. } => "enum",
            SymbolKind::EnumValue => "enum value",
            SymbolKind::Oneof { .. } => "oneof",
        }
    }
}
