use protonav_core::{ModuleId, SearchScope};
use std::collections::HashMap;

use crate::index::{ClassId, FieldId, JavaIndex, MethodId};

#[derive(Debug, Clone)]
struct ClassData {
    qualified_name: String,
    is_enum: bool,
    module: Option<ModuleId>,
    inner: Vec<ClassId>,
    fields: Vec<FieldId>,
    methods: Vec<MethodId>,
}

#[derive(Debug, Clone)]
struct FieldData {
    name: String,
    is_enum_constant: bool,
}

#[derive(Debug, Clone)]
struct MethodData {
    name: String,
}

/// An in-memory [`JavaIndex`] built by declaration.
///
/// Classes without a module are treated as library classes and are visible
/// from every module scope, matching the host-IDE notion of a
/// module-with-dependencies-and-libraries search scope.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJavaIndex {
    classes: Vec<ClassData>,
    fields: Vec<FieldData>,
    methods: Vec<MethodData>,
    by_qualified_name: HashMap<String, Vec<ClassId>>,
    module_deps: HashMap<ModuleId, Vec<ModuleId>>,
}

impl InMemoryJavaIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, module: ModuleId, deps: &[ModuleId]) {
        self.module_deps.insert(module, deps.to_vec());
    }

    pub fn add_class(&mut self, qualified_name: &str, module: Option<ModuleId>) -> ClassId {
        self.insert_class(qualified_name.to_owned(), false, module)
    }

    pub fn add_enum(&mut self, qualified_name: &str, module: Option<ModuleId>) -> ClassId {
        self.insert_class(qualified_name.to_owned(), true, module)
    }

    /// Declares an inner class; it inherits the parent's module and is also
    /// reachable through its dotted fully-qualified name.
    pub fn add_inner_class(&mut self, parent: ClassId, name: &str) -> ClassId {
        self.insert_inner(parent, name, false)
    }

    pub fn add_inner_enum(&mut self, parent: ClassId, name: &str) -> ClassId {
        self.insert_inner(parent, name, true)
    }

    pub fn add_field(&mut self, class: ClassId, name: &str) -> FieldId {
        self.insert_field(class, name, false)
    }

    pub fn add_enum_constant(&mut self, class: ClassId, name: &str) -> FieldId {
        self.insert_field(class, name, true)
    }

    pub fn add_method(&mut self, class: ClassId, name: &str) -> MethodId {
        let id = MethodId::new(self.methods.len() as u32);
        self.methods.push(MethodData {
            name: name.to_owned(),
        });
        self.classes[class.to_raw() as usize].methods.push(id);
        id
    }

    #[must_use]
    pub fn qualified_name(&self, class: ClassId) -> &str {
        &self.classes[class.to_raw() as usize].qualified_name
    }

    fn insert_class(
        &mut self,
        qualified_name: String,
        is_enum: bool,
        module: Option<ModuleId>,
    ) -> ClassId {
        let id = ClassId::new(self.classes.len() as u32);
        self.by_qualified_name
            .entry(qualified_name.clone())
            .or_default()
            .push(id);
        self.classes.push(ClassData {
            qualified_name,
            is_enum,
            module,
            inner: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        });
        id
    }

    fn insert_inner(&mut self, parent: ClassId, name: &str, is_enum: bool) -> ClassId {
        let parent_data = &self.classes[parent.to_raw() as usize];
        let qualified_name = format!("{}.{name}", parent_data.qualified_name);
        let module = parent_data.module;
        let id = self.insert_class(qualified_name, is_enum, module);
        self.classes[parent.to_raw() as usize].inner.push(id);
        id
    }

    fn insert_field(&mut self, class: ClassId, name: &str, is_enum_constant: bool) -> FieldId {
        let id = FieldId::new(self.fields.len() as u32);
        self.fields.push(FieldData {
            name: name.to_owned(),
            is_enum_constant,
        });
        self.classes[class.to_raw() as usize].fields.push(id);
        id
    }

    fn in_scope(&self, class_module: Option<ModuleId>, scope: SearchScope) -> bool {
        match scope {
            SearchScope::Project => true,
            SearchScope::Module(module) => match class_module {
                // Library classes are visible from every module.
                None => true,
                Some(class_module) => {
                    class_module == module
                        || self
                            .module_deps
                            .get(&module)
                            .is_some_and(|deps| deps.contains(&class_module))
                }
            },
        }
    }

    fn simple_name(qualified_name: &str) -> &str {
        qualified_name
            .rsplit_once('.')
            .map_or(qualified_name, |(_, simple)| simple)
    }
}

impl JavaIndex for InMemoryJavaIndex {
    fn find_classes(&self, qualified_name: &str, scope: SearchScope) -> Vec<ClassId> {
        let hits: Vec<ClassId> = self
            .by_qualified_name
            .get(qualified_name)
            .map(|ids| {
                ids.iter()
                    .copied()
                    .filter(|id| self.in_scope(self.classes[id.to_raw() as usize].module, scope))
                    .collect()
            })
            .unwrap_or_default();
        tracing::trace!(qualified_name, hits = hits.len(), "find_classes");
        hits
    }

    fn is_enum(&self, class: ClassId) -> bool {
        self.classes[class.to_raw() as usize].is_enum
    }

    fn find_inner_class_by_name(&self, class: ClassId, name: &str) -> Option<ClassId> {
        self.classes[class.to_raw() as usize]
            .inner
            .iter()
            .copied()
            .find(|inner| {
                Self::simple_name(&self.classes[inner.to_raw() as usize].qualified_name) == name
            })
    }

    fn find_field_by_name(&self, class: ClassId, name: &str) -> Option<FieldId> {
        self.classes[class.to_raw() as usize]
            .fields
            .iter()
            .copied()
            .find(|field| self.fields[field.to_raw() as usize].name == name)
    }

    fn find_methods_by_name(&self, class: ClassId, name: &str) -> Vec<MethodId> {
        self.classes[class.to_raw() as usize]
            .methods
            .iter()
            .copied()
            .filter(|method| self.methods[method.to_raw() as usize].name == name)
            .collect()
    }

    fn is_enum_constant(&self, field: FieldId) -> bool {
        self.fields[field.to_raw() as usize].is_enum_constant
    }
}
