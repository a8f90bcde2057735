use protonav_hir::SymbolId;

use crate::generator::NameGenerator;

/// The Java element a goto-declaration request starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchContext {
    /// Fully-qualified name of the class the request is anchored on (for a
    /// member request, its containing class).
    pub class_qualified_name: String,
    /// Simple member name when the request starts on a field, method or
    /// enum constant rather than on the class itself.
    pub member_name: Option<String>,
}

impl MatchContext {
    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self {
            class_qualified_name: qualified_name.into(),
            member_name: None,
        }
    }

    pub fn member(class_qualified_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            class_qualified_name: class_qualified_name.into(),
            member_name: Some(member.into()),
        }
    }
}

/// The inverse direction of a [`NameGenerator`]: given a Java context,
/// decides whether a proto symbol could have generated it. Used by
/// goto-declaration flows going from generated code back to the schema.
///
/// Matching is by membership in the generator's own candidate sets, so the
/// two directions cannot drift apart.
pub struct NameMatcher<'a> {
    generator: &'a dyn NameGenerator,
    context: MatchContext,
}

impl<'a> NameMatcher<'a> {
    pub fn new(generator: &'a dyn NameGenerator, context: MatchContext) -> Self {
        Self { generator, context }
    }

    pub fn matches_message(&self, message: SymbolId) -> bool {
        self.context.member_name.is_none()
            && self
                .generator
                .message_class_names(message)
                .iter()
                .any(|name| *name == self.context.class_qualified_name)
    }

    /// Whether the context member could be an accessor generated for
    /// `field`, declared under `message` (the field's owning message).
    pub fn matches_field(&self, message: SymbolId, field: SymbolId) -> bool {
        let Some(member) = self.context.member_name.as_deref() else {
            return false;
        };
        let owners = self.generator.message_class_names(message);
        self.generator
            .field_member_names(field)
            .iter()
            .any(|candidate| self.member_matches(candidate, member, &owners))
    }

    pub fn matches_enum(&self, enum_def: SymbolId) -> bool {
        self.context.member_name.is_none()
            && self.generator.enum_class_name(enum_def).as_deref()
                == Some(self.context.class_qualified_name.as_str())
    }

    pub fn matches_enum_value(&self, enum_def: SymbolId, enum_value: SymbolId) -> bool {
        let Some(member) = self.context.member_name.as_deref() else {
            return false;
        };
        self.generator.enum_class_name(enum_def).as_deref()
            == Some(self.context.class_qualified_name.as_str())
            && self.generator.enum_value_name(enum_value).as_deref() == Some(member)
    }

    /// Whether the context matches any artifact of `oneof`: the Case enum
    /// class itself, a generated message member, or the not-set sentinel.
    pub fn matches_oneof(&self, message: SymbolId, oneof: SymbolId) -> bool {
        let case_enum = self.generator.oneof_enum_class_name(oneof);
        match self.context.member_name.as_deref() {
            None => case_enum.as_deref() == Some(self.context.class_qualified_name.as_str()),
            Some(member) => {
                let owners = self.generator.message_class_names(message);
                let in_members = self
                    .generator
                    .oneof_member_names(oneof)
                    .iter()
                    .any(|candidate| self.member_matches(candidate, member, &owners));
                let is_not_set = case_enum.as_deref()
                    == Some(self.context.class_qualified_name.as_str())
                    && self.generator.oneof_not_set_enum_value_name(oneof).as_deref()
                        == Some(member);
                in_members || is_not_set
            }
        }
    }

    /// `candidate` is a class-relative specifier, possibly dotted
    /// (`Builder.setFoo`); it matches when the final segment equals the
    /// context member and the owner class extended by the leading segments
    /// equals the context class.
    fn member_matches(&self, candidate: &str, member: &str, owners: &[String]) -> bool {
        let (path, simple) = candidate
            .rsplit_once('.')
            .map_or(("", candidate), |(path, simple)| (path, simple));
        if simple != member {
            return false;
        }
        owners.iter().any(|owner| {
            if path.is_empty() {
                *owner == self.context.class_qualified_name
            } else {
                self.context.class_qualified_name.len() == owner.len() + 1 + path.len()
                    && self.context.class_qualified_name.starts_with(owner.as_str())
                    && self.context.class_qualified_name.ends_with(path)
                    && self.context.class_qualified_name.as_bytes()[owner.len()] == b'.'
            }
        })
    }
}
