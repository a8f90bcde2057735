use protonav_core::SearchScope;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        ClassId(raw)
    }

    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u32);

impl FieldId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        FieldId(raw)
    }

    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldId({})", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(u32);

impl MethodId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        MethodId(raw)
    }

    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodId({})", self.0)
    }
}

/// A resolved Java element: a class, a field (including enum constants), or
/// a method. Identity comparison over these ids is what result
/// deduplication uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JavaElement {
    Class(ClassId),
    Field(FieldId),
    Method(MethodId),
}

/// Read-only view of the host's Java symbol index.
///
/// All lookups are exact-name and case-sensitive, and none of them consider
/// members inherited from base classes: generated accessors are specialized
/// to the proto names, so a base class is unlikely to carry the member we
/// are after. Lookups either return matches or they don't; absence is never
/// an error.
pub trait JavaIndex {
    /// All classes with the given fully-qualified name inside `scope`.
    /// Nested classes are addressed with dots (`com.x.Outer.Inner`).
    fn find_classes(&self, qualified_name: &str, scope: SearchScope) -> Vec<ClassId>;

    fn is_enum(&self, class: ClassId) -> bool;

    /// Inner class declared directly in `class`.
    fn find_inner_class_by_name(&self, class: ClassId, name: &str) -> Option<ClassId>;

    /// Field declared directly in `class`.
    fn find_field_by_name(&self, class: ClassId, name: &str) -> Option<FieldId>;

    /// All overloads of a method declared directly in `class`.
    fn find_methods_by_name(&self, class: ClassId, name: &str) -> Vec<MethodId>;

    /// Whether a field is an enum constant of its containing enum class.
    fn is_enum_constant(&self, field: FieldId) -> bool;
}
