use protonav_hir::{FieldLabel, ProtoFile, SymbolId, SymbolKind};

use crate::casing;
use crate::generator::{field_name, NameGenerator};
use crate::matcher::{MatchContext, NameMatcher};

/// The modern immutable-API naming convention: outer-class wrapping (unless
/// `java_multiple_files`), `OrBuilder` companion interfaces, builder members
/// as `Builder.`-rooted specifiers, and oneof `FooCase` enums.
pub struct ImmutableNameGenerator<'a> {
    file: &'a ProtoFile,
}

impl<'a> ImmutableNameGenerator<'a> {
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
        if let Some(explicit) = self.file.options().java_outer_classname.as_deref() {
            return explicit.to_owned();
        }
        let stem = casing::outer_class_stem(self.file.file_name());
        // When a top-level type already takes the derived name, protoc
        // renames the wrapper instead of the type.
        let clashes = self.file.top_level().iter().any(|&id| {
            let sym = self.file.symbol(id);
            !matches!(sym.kind, SymbolKind::Field { .. }) && sym.name == stem
        });
        if clashes {
            format!("{stem}OuterClass")
        } else {
            stem
        }
    }

    /// Fully-qualified class name for a message, group or enum declaration.
    fn type_class_name(&self, ty: SymbolId) -> Option<String> {
        match self.file.symbol(ty).kind {
            SymbolKind::Message { .. } | SymbolKind::Group { .. } | SymbolKind::Enum { .. } => {}
            _ => return None,
        }
        let mut parts: Vec<String> = Vec::new();
        if let Some(pkg) = self.java_package() {
            parts.push(pkg.to_owned());
        }
        if !self.file.options().java_multiple_files {
            parts.push(self.outer_class_simple_name());
        }
        parts.extend(self.file.type_path(ty).iter().map(|s| (*s).to_owned()));
        Some(parts.join("."))
    }
}

impl NameGenerator for ImmutableNameGenerator<'_> {
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
        let Some(base) = self.type_class_name(message) else {
            return Vec::new();
        };
        vec![format!("{base}OrBuilder"), base]
    }

    fn field_member_names(&self, field: SymbolId) -> Vec<String> {
        let SymbolKind::Field { label, .. } = self.file.symbol(field).kind else {
            return Vec::new();
        };
        let Some(name) = field_name(self.file, field) else {
            return Vec::new();
        };
        let capital = casing::underscores_to_camel(name, true);
        // The field-number constant keeps the declared spelling.
        let constant = format!("{}_FIELD_NUMBER", self.file.name(field).to_ascii_uppercase());
        match label {
            FieldLabel::Optional | FieldLabel::Required => vec![
                format!("get{capital}"),
                format!("has{capital}"),
                format!("get{capital}OrBuilder"),
                constant,
                format!("Builder.get{capital}"),
                format!("Builder.has{capital}"),
                format!("Builder.set{capital}"),
                format!("Builder.clear{capital}"),
                format!("Builder.merge{capital}"),
            ],
            FieldLabel::Repeated => vec![
                format!("get{capital}List"),
                format!("get{capital}Count"),
                format!("get{capital}"),
                format!("get{capital}OrBuilder"),
                format!("get{capital}OrBuilderList"),
                constant,
                format!("Builder.get{capital}List"),
                format!("Builder.get{capital}Count"),
                format!("Builder.get{capital}"),
                format!("Builder.set{capital}"),
                format!("Builder.add{capital}"),
                format!("Builder.addAll{capital}"),
                format!("Builder.clear{capital}"),
                format!("Builder.remove{capital}"),
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

    fn oneof_member_names(&self, oneof: SymbolId) -> Vec<String> {
        let SymbolKind::Oneof { .. } = self.file.symbol(oneof).kind else {
            return Vec::new();
        };
        let capital = casing::underscores_to_camel(self.file.name(oneof), true);
        vec![
            format!("get{capital}Case"),
            format!("clear{capital}"),
            format!("Builder.get{capital}Case"),
            format!("Builder.clear{capital}"),
        ]
    }

    fn oneof_enum_class_name(&self, oneof: SymbolId) -> Option<String> {
        let SymbolKind::Oneof { .. } = self.file.symbol(oneof).kind else {
            return None;
        };
        let message = self.file.owning_message(oneof)?;
        let base = self.type_class_name(message)?;
        let capital = casing::underscores_to_camel(self.file.name(oneof), true);
        Some(format!("{base}.{capital}Case"))
    }

    fn oneof_not_set_enum_value_name(&self, oneof: SymbolId) -> Option<String> {
        let SymbolKind::Oneof { .. } = self.file.symbol(oneof).kind else {
            return None;
        };
        let camel = casing::underscores_to_camel(self.file.name(oneof), false);
        Some(format!("{}_NOT_SET", camel.to_ascii_uppercase()))
    }

    fn oneof_enum_value_name(&self, oneof_field: SymbolId) -> Option<String> {
        if !self.file.is_oneof_member(oneof_field) {
            return None;
        }
        let name = field_name(self.file, oneof_field)?;
        Some(name.to_ascii_uppercase())
    }

    fn to_matcher(&self, context: MatchContext) -> NameMatcher<'_> {
        NameMatcher::new(self, context)
    }
}
