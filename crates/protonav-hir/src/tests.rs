use protonav_core::ModuleId;

use crate::{ApiVersion, FieldLabel, HirError, JavaOptions, ProtoFileBuilder, SymbolKind};

#[test]
fn owner_chain_walks() {
    let mut b = ProtoFileBuilder::new("test.proto").package("com.example");
    let outer = b.message(None, "Outer").unwrap();
    let inner = b.message(Some(outer), "Inner").unwrap();
    let oneof = b.oneof(inner, "choice").unwrap();
    let branch = b.field(oneof, "left", FieldLabel::Optional, Some("string")).unwrap();
    let file = b.finish();

    assert_eq!(file.owning_message(branch), Some(inner));
    assert!(file.is_oneof_member(branch));
    assert_eq!(file.type_path(inner), vec!["Outer", "Inner"]);
    assert_eq!(file.qualified_name(branch), "Outer.Inner.choice.left");
}

#[test]
fn group_declares_sibling_field() {
    let mut b = ProtoFileBuilder::new("test.proto");
    let msg = b.message(None, "M").unwrap();
    let (group, field) = b.group(Some(msg), "MyGroup", FieldLabel::Repeated).unwrap();
    let file = b.finish();

    let SymbolKind::Group {
        additional_siblings, ..
    } = &file.symbol(group).kind
    else {
        panic!("expected group");
    };
    assert_eq!(additional_siblings.as_slice(), &[field]);

    let SymbolKind::Field {
        is_group,
        type_name,
        ..
    } = &file.symbol(field).kind
    else {
        panic!("expected field");
    };
    assert!(*is_group);
    assert_eq!(type_name.as_deref(), Some("MyGroup"));
    assert_eq!(file.name(field), "mygroup");
    // Both declarations hang off the message.
    assert_eq!(file.symbol(msg).kind.children(), &[group, field]);
}

#[test]
fn owner_kind_rules_are_enforced() {
    let mut b = ProtoFileBuilder::new("test.proto");
    let en = b.enum_def(None, "Color").unwrap();
    let err = b.field(en, "red", FieldLabel::Optional, None).unwrap_err();
    assert_eq!(
        err,
        HirError::InvalidOwner {
            parent: "enum",
            child: "field"
        }
    );

    let msg = b.message(None, "M").unwrap();
    assert_eq!(b.enum_value(msg, "RED").unwrap_err(), HirError::InvalidOwner {
        parent: "message",
        child: "enum value"
    });
    assert_eq!(b.message(None, "").unwrap_err(), HirError::EmptyName);
}

#[test]
fn enum_value_finds_enclosing_enum() {
    let mut b = ProtoFileBuilder::new("test.proto");
    let msg = b.message(None, "M").unwrap();
    let en = b.enum_def(Some(msg), "Color").unwrap();
    let red = b.enum_value(en, "RED").unwrap();
    let file = b.finish();

    assert_eq!(file.enclosing_enum(red), Some(en));
    assert_eq!(file.enclosing_enum(en), None);
    assert_eq!(file.type_path(en), vec!["M", "Color"]);
}

#[test]
fn options_round_trip_through_serde() {
    let options = JavaOptions {
        java_package: Some("com.example.gen".to_owned()),
        java_outer_classname: Some("TestProtos".to_owned()),
        java_multiple_files: true,
        api_version: ApiVersion::V1,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(serde_json::from_str::<JavaOptions>(&json).unwrap(), options);

    // Absent fields fall back to the modern defaults.
    let defaults: JavaOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults.api_version, ApiVersion::V2);
    assert!(!defaults.java_multiple_files);
}

#[test]
fn module_is_carried_on_the_file() {
    let b = ProtoFileBuilder::new("test.proto").module(ModuleId::new(7));
    let file = b.finish();
    assert_eq!(file.module(), Some(ModuleId::new(7)));
}
