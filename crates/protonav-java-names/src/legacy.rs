use protonav_hir::{FieldLabel, ProtoFile, SymbolId, SymbolKind};

use crate::casing;
use crate::generator::{field_name, NameGenerator};
use crate::matcher::{MatchContext, NameMatcher};

/// The api-version-1 naming convention.
///
/// Predates `OrBuilder` interfaces and oneofs: messages are mutable, so
/// accessors (including setters) live directly on the message class, the
/// outer class is always derived from the file name without the clash
/// suffix, and every type is nested in the outer class.
pub struct LegacyNameGenerator<'a> {
    file: &'a ProtoFile,
}

impl<'a> LegacyNameGenerator<'a> {
    pub fn new(file: &'a ProtoFile) -> Self {
        Self { file }
    }

    fn java_package(&self) -> Option<&str> {
        self.file
            .options()
            .java_package
            .as_deref()
            .or(self.file.package())
            .filter(|pkg| !pkg.is_empty())
    }

    fn outer_class_simple_name(&self) -> String {
        self.file
            .options()
            .java_outer_classname
            .clone()
            .unwrap_or_else(|| casing::outer_class_stem(self.file.file_name()))
    }

    fn type_class_name(&self, ty: SymbolId) -> Option<String> {
        match self.file.symbol(ty).kind {
            SymbolKind::Message { .. } | SymbolKind::Group { .. } | SymbolKind::Enum { .. } => {}
            _ => return None,
        }
        let mut parts: Vec<String> = Vec::new();
        if let Some(pkg) = self.java_package() {
            parts.push(pkg.to_owned());
        }
        parts.push(self.outer_class_simple_name());
        parts.extend(self.file.type_path(ty).iter().map(|s| (*s).to_owned()));
        Some(parts.join("."))
    }
}

impl NameGenerator for LegacyNameGenerator<'_> {
    fn outer_class_names(&self) -> Vec<String> {
        let outer = self.outer_class_simple_name();
        match self.java_package() {
            Some(pkg) => vec![format!("{pkg}.{outer}")],
            None => vec![outer],
        }
    }

    fn message_class_names(&self, message: SymbolId) -> Vec<String> {
        if !self.file.symbol(message).kind.is_message_type() {
            return Vec::new();
        }
        self.type_class_name(message).into_iter().collect()
    }

    fn field_member_names(&self, field: SymbolId) -> Vec<String> {
        let SymbolKind::Field { label, .. } = self.file.symbol(field).kind else {
            return Vec::new();
        };
        let Some(name) = field_name(self.file, field) else {
            return Vec::new();
        };
        let capital = casing::underscores_to_camel(name, true);
        let constant = format!("{}_FIELD_NUMBER", self.file.name(field).to_ascii_uppercase());
        match label {
            FieldLabel::Optional | FieldLabel::Required => vec![
                format!("get{capital}"),
                format!("set{capital}"),
                format!("has{capital}"),
                format!("clear{capital}"),
                constant,
            ],
            FieldLabel::Repeated => vec![
                format!("get{capital}List"),
                format!("get{capital}Count"),
                format!("get{capital}"),
                format!("set{capital}"),
                format!("add{capital}"),
                format!("clear{capital}"),
                constant,
            ],
        }
    }

    fn enum_class_name(&self, enum_def: SymbolId) -> Option<String> {
        match self.file.symbol(enum_def).kind {
            SymbolKind::Enum { .. } => self.type_class_name(enum_def),
            _ => None,
        }
    }

    fn enum_value_name(&self, enum_value: SymbolId) -> Option<String> {
        match self.file.symbol(enum_value).kind {
            SymbolKind::EnumValue => Some(self.file.name(enum_value).to_owned()),
            _ => None,
        }
    }

    // This convention predates oneofs; no artifacts are generated for them.

    fn oneof_member_names(&self, _oneof: SymbolId) -> Vec<String> {
        Vec::new()
    }

    fn oneof_enum_class_name(&self, _oneof: SymbolId) -> Option<String> {
        None
    }

    fn oneof_not_set_enum_value_name(&self, _oneof: SymbolId) -> Option<String> {
        None
    }

    fn oneof_enum_value_name(&self, _oneof_field: SymbolId) -> Option<String> {
        None
    }

    fn to_matcher(&self, context: MatchContext) -> NameMatcher<'_> {
        NameMatcher::new(self, context)
    }
}
