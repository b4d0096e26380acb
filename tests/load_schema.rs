//! End-to-end tests for multi-file schema loading
//!
//! Each test lays out schema files in a temporary directory and drives the
//! public loader API, exercising the sibling-file dependency convention.

use std::fs;
use std::path::{Path, PathBuf};

use avsc_resolver::{load_schema, load_schema_into, SchemaError, SchemaRegistry};
use serde_json::json;
use tempfile::tempdir;

fn write_schema(dir: &Path, file_name: &str, schema: &serde_json::Value) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(schema).unwrap()).unwrap();
    path
}

fn root_schema() -> serde_json::Value {
    json!({
        "type": "record",
        "name": "Root",
        "namespace": "com.example",
        "fields": [
            {"name": "child", "type": "Child"}
        ]
    })
}

fn child_schema() -> serde_json::Value {
    json!({
        "type": "record",
        "name": "Child",
        "namespace": "com.example",
        "fields": [
            {"name": "value", "type": "string"}
        ]
    })
}

#[test]
fn test_dependency_loaded_from_sibling_file() {
    let dir = tempdir().unwrap();
    let root_path = write_schema(dir.path(), "root.avsc", &root_schema());
    write_schema(dir.path(), "com.example.Child.avsc", &child_schema());

    let mut registry = SchemaRegistry::new();
    let resolved = load_schema_into(&root_path, &mut registry).unwrap();

    assert_eq!(resolved["fields"][0]["type"], json!("com.example.Child"));
    assert!(registry.contains("com.example.Root"));
    assert!(registry.contains("com.example.Child"));
}

#[test]
fn test_missing_dependency_reports_type_not_file() {
    let dir = tempdir().unwrap();
    let root_path = write_schema(dir.path(), "root.avsc", &root_schema());

    let err = load_schema(&root_path).unwrap_err();
    match err {
        SchemaError::UnknownType { name } => assert_eq!(name, "com.example.Child"),
        other => panic!("Expected UnknownType, got {:?}", other),
    }
}

#[test]
fn test_missing_root_file_is_io_error() {
    let dir = tempdir().unwrap();

    let err = load_schema(dir.path().join("absent.avsc")).unwrap_err();
    assert!(matches!(err, SchemaError::Io(_)));
}

#[test]
fn test_transitive_dependencies() {
    let dir = tempdir().unwrap();
    let root_path = write_schema(dir.path(), "root.avsc", &root_schema());
    write_schema(
        dir.path(),
        "com.example.Child.avsc",
        &json!({
            "type": "record",
            "name": "Child",
            "namespace": "com.example",
            "fields": [
                {"name": "grandchild", "type": "Grandchild"}
            ]
        }),
    );
    write_schema(
        dir.path(),
        "com.example.Grandchild.avsc",
        &json!({
            "type": "record",
            "name": "Grandchild",
            "namespace": "com.example",
            "fields": [
                {"name": "value", "type": "long"}
            ]
        }),
    );

    let mut registry = SchemaRegistry::new();
    let resolved = load_schema_into(&root_path, &mut registry).unwrap();

    assert_eq!(resolved["fields"][0]["type"], json!("com.example.Child"));
    assert!(registry.contains("com.example.Grandchild"));
    // The dependency file's own tree resolved too, so Child's reference is
    // present in the registry under its declared form.
    assert_eq!(
        registry.get("com.example.Child").unwrap()["fields"][0]["name"],
        json!("grandchild")
    );
}

#[test]
fn test_registry_shared_across_top_level_files() {
    let dir = tempdir().unwrap();
    let first = write_schema(dir.path(), "com.example.Child.avsc", &child_schema());
    let second = write_schema(
        dir.path(),
        "wrapper.avsc",
        &json!({
            "type": "record",
            "name": "Wrapper",
            "namespace": "com.example",
            "fields": [
                {"name": "child", "type": "Child"}
            ]
        }),
    );

    let mut registry = SchemaRegistry::new();
    load_schema_into(&first, &mut registry).unwrap();
    let resolved = load_schema_into(&second, &mut registry).unwrap();

    assert_eq!(resolved["fields"][0]["type"], json!("com.example.Child"));
    assert!(registry.contains("com.example.Wrapper"));
}

#[test]
fn test_dependency_file_without_the_type_fails() {
    let dir = tempdir().unwrap();
    let root_path = write_schema(dir.path(), "root.avsc", &root_schema());
    // Convention file exists but defines something unrelated.
    write_schema(
        dir.path(),
        "com.example.Child.avsc",
        &json!({
            "type": "record",
            "name": "Unrelated",
            "namespace": "org.other",
            "fields": []
        }),
    );

    let err = load_schema(&root_path).unwrap_err();
    match err {
        SchemaError::UnknownType { name } => assert_eq!(name, "com.example.Child"),
        other => panic!("Expected UnknownType, got {:?}", other),
    }
}

#[test]
fn test_malformed_dependency_file_propagates_parse_error() {
    let dir = tempdir().unwrap();
    let root_path = write_schema(dir.path(), "root.avsc", &root_schema());
    fs::write(dir.path().join("com.example.Child.avsc"), "{not json").unwrap();

    let err = load_schema(&root_path).unwrap_err();
    assert!(matches!(err, SchemaError::Json(_)));
}
