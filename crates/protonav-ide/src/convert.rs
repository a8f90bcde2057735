use once_cell::sync::OnceCell;
use protonav_core::SearchScope;
use protonav_hir::{ProtoFile, SymbolId, SymbolKind};
use protonav_java_index::{ClassId, JavaElement, JavaIndex};
use protonav_java_names::{select_for_file, NameGenerator};
use std::collections::HashSet;

/// Per-request converter from a proto symbol to the Java elements its
/// generated code occupies.
///
/// One converter serves one resolution call, including the sibling
/// sub-resolutions a group triggers: the applicable generator list is
/// computed once on first use and shared across those. Separate calls get
/// separate converters, so no state is shared and nothing needs locking.
pub struct ProtoToJavaConverter<'a> {
    file: &'a ProtoFile,
    index: &'a dyn JavaIndex,
    generators: OnceCell<Vec<Box<dyn NameGenerator + 'a>>>,
}

impl<'a> ProtoToJavaConverter<'a> {
    pub fn new(file: &'a ProtoFile, index: &'a dyn JavaIndex) -> Self {
        Self {
            file,
            index,
            generators: OnceCell::new(),
        }
    }

    /// Resolves `symbol` to the Java elements generated for it, deduplicated
    /// by identity in first-seen order.
    ///
    /// `None` means "no generated code located" — a valid outcome that
    /// contributes nothing, never an error. Stale options, missing classes
    /// and unresolved candidates all land here.
    pub fn convert(&self, symbol: SymbolId) -> Option<Vec<JavaElement>> {
        let results = dedup(self.convert_inner(symbol));
        tracing::debug!(
            symbol = %self.file.qualified_name(symbol),
            resolved = results.as_ref().map_or(0, Vec::len),
            "resolved proto symbol"
        );
        results
    }

    fn convert_inner(&self, symbol: SymbolId) -> Vec<JavaElement> {
        match &self.file.symbol(symbol).kind {
            SymbolKind::Message { .. } => self
                .message_type_classes(symbol)
                .into_iter()
                .map(JavaElement::Class)
                .collect(),
            SymbolKind::Field { .. } => {
                let mut elements = self.member_elements(symbol, |gen, id| gen.field_member_names(id));
                if let Some(oneof) = self
                    .file
                    .parent(symbol)
                    .filter(|_| self.file.is_oneof_member(symbol))
                {
                    let enum_parents = self.oneof_enum_classes(oneof);
                    elements.extend(self.enum_constants(
                        symbol,
                        |gen, id| gen.oneof_enum_value_name(id),
                        &enum_parents,
                    ));
                }
                elements
            }
            SymbolKind::Group {
                additional_siblings, ..
            } => {
                let mut elements: Vec<JavaElement> = self
                    .message_type_classes(symbol)
                    .into_iter()
                    .map(JavaElement::Class)
                    .collect();
                // A group is a message type plus a field; fold in the
                // generated code of the implicit sibling declarations too.
                for &sibling in additional_siblings {
                    elements.extend(self.convert_inner(sibling));
                }
                elements
            }
            SymbolKind::Enum { .. } => self
                .enum_definition_classes(symbol)
                .into_iter()
                .map(JavaElement::Class)
                .collect(),
            SymbolKind::EnumValue => self.enum_value_constants(symbol),
            SymbolKind::Oneof { .. } => {
                let mut elements =
                    self.member_elements(symbol, |gen, id| gen.oneof_member_names(id));
                let case_enums = self.oneof_enum_classes(symbol);
                elements.extend(case_enums.iter().copied().map(JavaElement::Class));
                elements.extend(self.enum_constants(
                    symbol,
                    |gen, id| gen.oneof_not_set_enum_value_name(id),
                    &case_enums,
                ));
                elements
            }
        }
    }

    fn generators(&self) -> &[Box<dyn NameGenerator + 'a>] {
        self.generators.get_or_init(|| select_for_file(self.file))
    }

    fn scope(&self) -> SearchScope {
        match self.file.module() {
            Some(module) => SearchScope::Module(module),
            None => SearchScope::Project,
        }
    }

    fn classes_where(
        &self,
        names_for: impl Fn(&dyn NameGenerator) -> Vec<String>,
        predicate: impl Fn(bool) -> bool,
    ) -> Vec<ClassId> {
        let scope = self.scope();
        let mut classes = Vec::new();
        for generator in self.generators() {
            for name in names_for(generator.as_ref()) {
                classes.extend(
                    self.index
                        .find_classes(&name, scope)
                        .into_iter()
                        .filter(|&class| predicate(self.index.is_enum(class))),
                );
            }
        }
        classes
    }

    fn message_type_classes(&self, message: SymbolId) -> Vec<ClassId> {
        // Everything generated for a message type, the OrBuilder interface
        // included, reports as a non-enum class.
        self.classes_where(|gen| gen.message_class_names(message), |is_enum| !is_enum)
    }

    fn enum_definition_classes(&self, enum_def: SymbolId) -> Vec<ClassId> {
        self.classes_where(
            |gen| gen.enum_class_name(enum_def).into_iter().collect(),
            |is_enum| is_enum,
        )
    }

    fn oneof_enum_classes(&self, oneof: SymbolId) -> Vec<ClassId> {
        self.classes_where(
            |gen| gen.oneof_enum_class_name(oneof).into_iter().collect(),
            |is_enum| is_enum,
        )
    }

    /// Resolves class-relative member specifiers against the owning
    /// message's resolved classes.
    fn member_elements(
        &self,
        element: SymbolId,
        names_for: impl Fn(&dyn NameGenerator, SymbolId) -> Vec<String>,
    ) -> Vec<JavaElement> {
        // A malformed owner chain resolves to nothing for this symbol only.
        let Some(owner) = self.file.owning_message(element) else {
            return Vec::new();
        };
        let parent_classes = self.message_type_classes(owner);
        if parent_classes.is_empty() {
            return Vec::new();
        }
        let mut elements = Vec::new();
        for generator in self.generators() {
            for specifier in names_for(generator.as_ref(), element) {
                for &class in &parent_classes {
                    elements.extend(self.resolve_member_path(class, &specifier));
                }
            }
        }
        elements
    }

    /// Walks a possibly dotted specifier (`Builder.setFoo`): every leading
    /// segment is an inner-class hop, and the final segment is tried as a
    /// field first, then as a method overload set. Lookups are exact-name
    /// and do not consider inherited members. A missing hop drops this
    /// candidate only.
    fn resolve_member_path(&self, class: ClassId, specifier: &str) -> Vec<JavaElement> {
        let segments: Vec<&str> = specifier.split('.').collect();
        let Some((member, path)) = segments.split_last() else {
            return Vec::new();
        };
        let mut current = class;
        for segment in path {
            match self.index.find_inner_class_by_name(current, segment) {
                Some(inner) => current = inner,
                None => return Vec::new(),
            }
        }
        if let Some(field) = self.index.find_field_by_name(current, member) {
            vec![JavaElement::Field(field)]
        } else {
            self.index
                .find_methods_by_name(current, member)
                .into_iter()
                .map(JavaElement::Method)
                .collect()
        }
    }

    fn enum_value_constants(&self, enum_value: SymbolId) -> Vec<JavaElement> {
        let Some(enum_def) = self.file.enclosing_enum(enum_value) else {
            return Vec::new();
        };
        let enum_parents = self.enum_definition_classes(enum_def);
        if enum_parents.is_empty() {
            return Vec::new();
        }
        self.enum_constants(enum_value, |gen, id| gen.enum_value_name(id), &enum_parents)
    }

    /// Looks up a generated constant name within each candidate enum class;
    /// only fields that really are enum constants count.
    fn enum_constants(
        &self,
        element: SymbolId,
        name_for: impl Fn(&dyn NameGenerator, SymbolId) -> Option<String>,
        enum_parents: &[ClassId],
    ) -> Vec<JavaElement> {
        let mut elements = Vec::new();
        for generator in self.generators() {
            let Some(name) = name_for(generator.as_ref(), element) else {
                continue;
            };
            for &parent in enum_parents {
                if let Some(field) = self.index.find_field_by_name(parent, &name) {
                    if self.index.is_enum_constant(field) {
                        elements.push(JavaElement::Field(field));
                    }
                }
            }
        }
        elements
    }
}

/// One-shot resolution of a single symbol.
pub fn resolve(
    file: &ProtoFile,
    index: &dyn JavaIndex,
    symbol: SymbolId,
) -> Option<Vec<JavaElement>> {
    ProtoToJavaConverter::new(file, index).convert(symbol)
}

fn dedup(elements: Vec<JavaElement>) -> Option<Vec<JavaElement>> {
    let mut seen = HashSet::new();
    let deduped: Vec<JavaElement> = elements
        .into_iter()
        .filter(|element| seen.insert(*element))
        .collect();
    if deduped.is_empty() {
        None
    } else {
        Some(deduped)
    }
}
