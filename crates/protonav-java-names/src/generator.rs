use protonav_hir::{ProtoFile, SymbolId, SymbolKind};

use crate::matcher::{MatchContext, NameMatcher};

/// Names generated by one Java naming convention for symbols of one file.
///
/// Given an element of the file, returns the set of Java names protoc would
/// emit for it. Empty and `None` returns mean "this convention produces no
/// such artifact for that input", never an error: a non-oneof field simply
/// has no oneof enum constant.
///
/// Member names returned by [`field_member_names`] and
/// [`oneof_member_names`] are class-relative specifiers and may be dotted
/// paths rooted at an inner class (`Builder.setFoo`); generated identifiers
/// never contain a literal `.` themselves.
///
/// [`field_member_names`]: NameGenerator::field_member_names
/// [`oneof_member_names`]: NameGenerator::oneof_member_names
pub trait NameGenerator {
    /// All possible outer classes generated from the associated file.
    fn outer_class_names(&self) -> Vec<String>;

    /// All possible fully-qualified class names generated for a message,
    /// including companion interfaces like `FooOrBuilder`.
    fn message_class_names(&self, message: SymbolId) -> Vec<String>;

    /// Class-relative members generated from a field.
    fn field_member_names(&self, field: SymbolId) -> Vec<String>;

    /// Fully-qualified Java enum name generated for a proto enum.
    fn enum_class_name(&self, enum_def: SymbolId) -> Option<String>;

    /// Java enum constant name generated for a proto enum value.
    fn enum_value_name(&self, enum_value: SymbolId) -> Option<String>;

    /// Message class members generated for a oneof definition. For the other
    /// names derived from a oneof, see [`oneof_enum_class_name`] and
    /// [`oneof_not_set_enum_value_name`].
    ///
    /// [`oneof_enum_class_name`]: NameGenerator::oneof_enum_class_name
    /// [`oneof_not_set_enum_value_name`]: NameGenerator::oneof_not_set_enum_value_name
    fn oneof_member_names(&self, oneof: SymbolId) -> Vec<String>;

    /// Fully-qualified name of the synthetic `FooCase` enum generated for a
    /// oneof definition.
    fn oneof_enum_class_name(&self, oneof: SymbolId) -> Option<String>;

    /// Enum constant indicating that no branch of the oneof is set.
    fn oneof_not_set_enum_value_name(&self, oneof: SymbolId) -> Option<String>;

    /// Enum constant generated for one branch of a oneof. For the other
    /// names related to the field, also check
    /// [`field_member_names`](NameGenerator::field_member_names).
    fn oneof_enum_value_name(&self, oneof_field: SymbolId) -> Option<String>;

    /// Converts this generator into the inverse-direction matcher.
    fn to_matcher(&self, context: MatchContext) -> NameMatcher<'_>;
}

/// Normalized field name used by the Java naming scheme.
///
/// Fields declared by a group take their name from the group's own type
/// short-name rather than the lexical field identifier; resolving the
/// lexical name instead mis-targets every group accessor.
#[must_use]
pub fn field_name(file: &ProtoFile, field: SymbolId) -> Option<&str> {
    match &file.symbol(field).kind {
        SymbolKind::Field {
            type_name: Some(type_name),
            is_group: true,
            ..
        } => Some(
            type_name
                .rsplit_once('.')
                .map_or(type_name.as_str(), |(_, short)| short),
        ),
        SymbolKind::Field { .. } => Some(file.name(field)),
        _ => None,
    }
}
