use protonav_core::ModuleId;
use protonav_hir::{ApiVersion, FieldLabel, JavaOptions, ProtoFileBuilder, SymbolId};
use protonav_ide::{can_find_usages, create_find_usages_handler, resolve, UsageTarget};
use protonav_java_index::{InMemoryJavaIndex, JavaElement, JavaIndex};
use std::collections::HashSet;

fn gen_options() -> JavaOptions {
    JavaOptions {
        java_package: Some("com.example".to_owned()),
        ..JavaOptions::default()
    }
}

/// `outer.proto`: message M { optional group GroupName; enum Color { RED };
/// oneof choice { string name; } }
struct Fixture {
    file: protonav_hir::ProtoFile,
    message: SymbolId,
    group: SymbolId,
    group_field: SymbolId,
    color: SymbolId,
    red: SymbolId,
    oneof: SymbolId,
    branch: SymbolId,
    plain_field: SymbolId,
}

fn fixture() -> Fixture {
    let mut b = ProtoFileBuilder::new("outer.proto").options(gen_options());
    let message = b.message(None, "M").unwrap();
    let (group, group_field) = b.group(Some(message), "GroupName", FieldLabel::Optional).unwrap();
    let color = b.enum_def(Some(message), "Color").unwrap();
    let red = b.enum_value(color, "RED").unwrap();
    let oneof = b.oneof(message, "choice").unwrap();
    let branch = b.field(oneof, "name", FieldLabel::Optional, Some("string")).unwrap();
    let plain_field = b.field(message, "plain", FieldLabel::Optional, Some("int32")).unwrap();
    Fixture {
        file: b.finish(),
        message,
        group,
        group_field,
        color,
        red,
        oneof,
        branch,
        plain_field,
    }
}

/// Index shaped like protoc's output for the fixture file. `with_not_set`
/// controls whether the oneof's sentinel constant exists; it is added last
/// so ids line up between the two variants.
fn generated_index(with_not_set: bool) -> InMemoryJavaIndex {
    let mut index = InMemoryJavaIndex::new();
    let outer = index.add_class("com.example.Outer", None);
    let m = index.add_inner_class(outer, "M");
    index.add_inner_class(outer, "MOrBuilder");
    let builder = index.add_inner_class(m, "Builder");
    index.add_inner_class(m, "GroupName");
    index.add_inner_class(m, "GroupNameOrBuilder");
    index.add_method(m, "getGroupName");
    index.add_method(builder, "getGroupName");
    index.add_method(builder, "setGroupName");
    let color = index.add_inner_enum(m, "Color");
    index.add_enum_constant(color, "RED");
    index.add_method(m, "getName");
    index.add_method(builder, "setName");
    index.add_method(m, "getChoiceCase");
    index.add_method(builder, "clearChoice");
    let case_enum = index.add_inner_enum(m, "ChoiceCase");
    index.add_enum_constant(case_enum, "NAME");
    if with_not_set {
        index.add_enum_constant(case_enum, "CHOICE_NOT_SET");
    }
    index
}

#[test]
fn field_with_no_resolvable_parent_classes_resolves_to_nothing() {
    let fx = fixture();
    let empty = InMemoryJavaIndex::new();
    assert_eq!(resolve(&fx.file, &empty, fx.plain_field), None);

    // Parent classes resolve but the member doesn't: still no result.
    let mut index = InMemoryJavaIndex::new();
    let outer = index.add_class("com.example.Outer", None);
    index.add_inner_class(outer, "M");
    assert_eq!(resolve(&fx.file, &index, fx.plain_field), None);
}

#[test]
fn message_resolves_to_class_and_or_builder() {
    let fx = fixture();
    let index = generated_index(true);
    let results = resolve(&fx.file, &index, fx.message).unwrap();

    let m = index.find_classes("com.example.Outer.M", protonav_core::SearchScope::Project)[0];
    let or_builder =
        index.find_classes("com.example.Outer.MOrBuilder", protonav_core::SearchScope::Project)[0];
    assert!(results.contains(&JavaElement::Class(m)));
    assert!(results.contains(&JavaElement::Class(or_builder)));
    assert_eq!(results.len(), 2);
}

#[test]
fn group_round_trip_includes_sibling_field_results() {
    let fx = fixture();
    let index = generated_index(true);
    let results = resolve(&fx.file, &index, fx.group).unwrap();

    let scope = protonav_core::SearchScope::Project;
    let group_class = index.find_classes("com.example.Outer.M.GroupName", scope)[0];
    let group_or_builder = index.find_classes("com.example.Outer.M.GroupNameOrBuilder", scope)[0];
    assert!(results.contains(&JavaElement::Class(group_class)));
    assert!(results.contains(&JavaElement::Class(group_or_builder)));
    // The implicit sibling field contributes its accessors, named after the
    // group type.
    let m = index.find_classes("com.example.Outer.M", scope)[0];
    let getter = index.find_methods_by_name(m, "getGroupName");
    assert!(results.contains(&JavaElement::Method(getter[0])));
    let builder = index.find_inner_class_by_name(m, "Builder").unwrap();
    let setter = index.find_methods_by_name(builder, "setGroupName");
    assert!(results.contains(&JavaElement::Method(setter[0])));

    // No generated code at all: empty overall result, not an error.
    let empty = InMemoryJavaIndex::new();
    assert_eq!(resolve(&fx.file, &empty, fx.group), None);
}

#[test]
fn group_field_resolution_uses_type_short_name() {
    let fx = fixture();
    let index = generated_index(true);
    // The field's lexical name is `groupname`; the accessors still resolve
    // because candidates come from the type short-name.
    let results = resolve(&fx.file, &index, fx.group_field).unwrap();
    assert!(results
        .iter()
        .any(|element| matches!(element, JavaElement::Method(_))));
}

#[test]
fn enum_value_resolves_to_exactly_the_enum_constant() {
    let fx = fixture();
    let index = generated_index(true);
    let results = resolve(&fx.file, &index, fx.red).unwrap();

    let scope = protonav_core::SearchScope::Project;
    let color = index.find_classes("com.example.Outer.M.Color", scope)[0];
    let red = index.find_field_by_name(color, "RED").unwrap();
    assert_eq!(results, vec![JavaElement::Field(red)]);
}

#[test]
fn enum_resolves_only_to_enum_classes() {
    let fx = fixture();
    let mut index = generated_index(true);
    // A same-named non-enum class must not satisfy an enum lookup.
    index.add_class("com.example.Outer.M.Color", None);
    let results = resolve(&fx.file, &index, fx.color).unwrap();
    assert_eq!(results.len(), 1);
    let JavaElement::Class(class) = results[0] else {
        panic!("expected a class");
    };
    assert!(index.is_enum(class));
}

#[test]
fn oneof_resolution_and_the_not_set_superset_law() {
    let fx = fixture();
    let full_index = generated_index(true);
    let full: HashSet<JavaElement> =
        resolve(&fx.file, &full_index, fx.oneof).unwrap().into_iter().collect();

    let scope = protonav_core::SearchScope::Project;
    let case_enum = full_index.find_classes("com.example.Outer.M.ChoiceCase", scope)[0];
    let not_set = full_index.find_field_by_name(case_enum, "CHOICE_NOT_SET").unwrap();
    assert!(full.contains(&JavaElement::Class(case_enum)));
    assert!(full.contains(&JavaElement::Field(not_set)));
    let m = full_index.find_classes("com.example.Outer.M", scope)[0];
    let case_getter = full_index.find_methods_by_name(m, "getChoiceCase");
    assert!(full.contains(&JavaElement::Method(case_getter[0])));

    // Removing the not-set constant can only shrink the result set.
    let partial_index = generated_index(false);
    let partial: HashSet<JavaElement> =
        resolve(&fx.file, &partial_index, fx.oneof).unwrap().into_iter().collect();
    assert!(partial.is_subset(&full));
    assert_eq!(partial.len(), full.len() - 1);
}

#[test]
fn oneof_field_also_resolves_its_case_enum_constant() {
    let fx = fixture();
    let index = generated_index(true);
    let results = resolve(&fx.file, &index, fx.branch).unwrap();

    let scope = protonav_core::SearchScope::Project;
    let m = index.find_classes("com.example.Outer.M", scope)[0];
    let getter = index.find_methods_by_name(m, "getName");
    assert!(results.contains(&JavaElement::Method(getter[0])));
    let case_enum = index.find_classes("com.example.Outer.M.ChoiceCase", scope)[0];
    let constant = index.find_field_by_name(case_enum, "NAME").unwrap();
    assert!(results.contains(&JavaElement::Field(constant)));
}

#[test]
fn resolution_is_idempotent() {
    let fx = fixture();
    let index = generated_index(true);
    for symbol in [fx.message, fx.group, fx.oneof, fx.branch, fx.red] {
        let first: HashSet<JavaElement> =
            resolve(&fx.file, &index, symbol).unwrap().into_iter().collect();
        let second: HashSet<JavaElement> =
            resolve(&fx.file, &index, symbol).unwrap().into_iter().collect();
        assert_eq!(first, second);
    }
}

#[test]
fn candidates_shared_by_two_generators_resolve_once() {
    // An api-v1 file runs both the legacy and the modern generator, and
    // both produce `Test.M` as a candidate class name.
    let mut b = ProtoFileBuilder::new("test.proto").options(JavaOptions {
        api_version: ApiVersion::V1,
        ..JavaOptions::default()
    });
    let m = b.message(None, "M").unwrap();
    let file = b.finish();

    let mut index = InMemoryJavaIndex::new();
    let outer = index.add_class("Test", None);
    let class = index.add_inner_class(outer, "M");

    let results = resolve(&file, &index, m).unwrap();
    assert_eq!(results, vec![JavaElement::Class(class)]);
}

#[test]
fn module_scope_limits_resolution() {
    let app = ModuleId::new(0);
    let other = ModuleId::new(1);

    let mut b = ProtoFileBuilder::new("outer.proto")
        .options(gen_options())
        .module(app);
    let m = b.message(None, "M").unwrap();
    let file = b.finish();

    // The generated class exists, but only in an unrelated module.
    let mut index = InMemoryJavaIndex::new();
    let outer = index.add_class("com.example.Outer", Some(other));
    index.add_inner_class(outer, "M");
    assert_eq!(resolve(&file, &index, m), None);

    // In the file's own module it resolves.
    let mut index = InMemoryJavaIndex::new();
    let outer = index.add_class("com.example.Outer", Some(app));
    let class = index.add_inner_class(outer, "M");
    let results = resolve(&file, &index, m).unwrap();
    assert_eq!(results, vec![JavaElement::Class(class)]);
}

#[test]
fn find_usages_handler_carries_secondary_elements() {
    let fx = fixture();
    let index = generated_index(true);

    assert!(can_find_usages(&UsageTarget::Proto(&fx.file, fx.message)));
    assert!(!can_find_usages(&UsageTarget::Java(JavaElement::Class(
        protonav_java_index::ClassId::new(0)
    ))));

    // Highlight-only sessions are never augmented.
    assert!(create_find_usages_handler(&fx.file, &index, fx.message, true).is_none());

    let handler = create_find_usages_handler(&fx.file, &index, fx.message, false).unwrap();
    assert_eq!(handler.root(), fx.message);
    assert_eq!(handler.secondary_elements().len(), 2);

    // No generated code: no handler, the host falls back to a plain search.
    let empty = InMemoryJavaIndex::new();
    assert!(create_find_usages_handler(&fx.file, &empty, fx.message, false).is_none());
}
