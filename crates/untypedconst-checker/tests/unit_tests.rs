use super::*;
use crate::test_fixtures::*;
use untypedconst_common::diagnostics::diagnostic_codes;
use untypedconst_syntax::NodeKind;

const METERS_JSON: &str = include_str!("fixtures/meters.json");
const CLEAN_JSON: &str = include_str!("fixtures/clean.json");

#[test]
fn loads_fixture_and_reports_every_site() {
    let unit = CompilationUnit::from_json(METERS_JSON).unwrap();
    assert_eq!(unit.file, "units.go");
    assert_eq!(unit.package(), "example.com/units");
    assert!(unit.source.is_some());

    let diagnostics = unit.check();
    let found: Vec<_> = diagnostics.iter().map(|d| (d.code, d.start)).collect();
    assert_eq!(
        found,
        vec![
            (diagnostic_codes::PASSING_NAKED_LITERAL_TO_PARAMETER, 88),
            (diagnostic_codes::SENDING_NAKED_LITERAL_TO_CHANNEL, 98),
            (diagnostic_codes::RETURNING_NAKED_LITERAL, 108),
        ]
    );
    assert!(diagnostics.iter().all(|d| d.length == 1 && d.file == "units.go"));
}

#[test]
fn typed_constant_fixture_is_clean() {
    let unit = CompilationUnit::from_json(CLEAN_JSON).unwrap();
    assert!(unit.types.lookup_constant("Marathon").is_some());
    assert!(unit.check().is_empty());
}

#[test]
fn builder_unit_survives_json() {
    let mut b = UnitBuilder::new();
    let five = b.int_lit(5, meters());
    let call = b.call("F", Some(Callee::func(UNITS_PKG, "F")), vec![five], None);
    let stmt = b.expr_stmt(call);
    b.declare_const("Lap", untyped_int(), ConstValue::Int(400));
    let unit = b.finish_stmts(vec![stmt]);

    let json = unit.to_json().unwrap();
    let reloaded = CompilationUnit::from_json(&json).unwrap();

    assert_eq!(reloaded.root, unit.root);
    assert_eq!(reloaded.arena.len(), unit.arena.len());
    assert_eq!(reloaded.types.lookup_constant("Lap"), unit.types.lookup_constant("Lap"));
    assert_eq!(reloaded.check(), unit.check());
    assert_eq!(reloaded.check().len(), 1);
}

#[test]
fn serialization_is_stable() {
    let unit = CompilationUnit::from_json(METERS_JSON).unwrap();
    let first = unit.to_json().unwrap();
    let second = CompilationUnit::from_json(&first).unwrap().to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn fact_lists_default_to_empty() {
    let json = r#"{
        "file": "empty.go",
        "package": "example.com/empty",
        "nodes": [
            { "kind": { "type": "SourceFile", "package": "empty" }, "span": { "start": 0, "end": 14 } }
        ],
        "root": 0
    }"#;
    let unit = CompilationUnit::from_json(json).unwrap();
    assert_eq!(unit.source, None);
    assert!(matches!(
        unit.arena.get(unit.root).map(|n| &n.kind),
        Some(NodeKind::SourceFile { decls, .. }) if decls.is_empty()
    ));
    assert!(unit.check().is_empty());
}

#[test]
fn malformed_snapshots_are_rejected() {
    assert!(CompilationUnit::from_json("").is_err());
    assert!(CompilationUnit::from_json(r#"{"file": "a.go"}"#).is_err());

    let unknown_node = r#"{
        "file": "a.go",
        "package": "p",
        "nodes": [{ "kind": { "type": "Lambda" }, "span": { "start": 0, "end": 1 } }],
        "root": 0
    }"#;
    let err = CompilationUnit::from_json(unknown_node).unwrap_err();
    assert!(err.to_string().contains("Lambda"), "{err}");
}
