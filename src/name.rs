//! Name and reference qualification
//!
//! Pure helpers that compute effective namespaces, fully-qualified names,
//! and registry lookup keys. Nothing here touches the registry or the
//! filesystem.

use serde_json::{Map, Value};

/// The eight built-in scalar type names. Primitives are always resolved and
/// never looked up in the registry.
pub const PRIMITIVES: [&str; 8] = [
    "boolean", "bytes", "double", "float", "int", "long", "null", "string",
];

/// Whether `name` is one of the built-in primitive type names
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

/// Get the type discriminator of a schema node
///
/// Objects yield their `type` attribute, sequences yield `"union"`, and a
/// scalar string yields itself. Any other shape has no discriminator.
pub fn record_type(schema: &Value) -> Option<&str> {
    match schema {
        Value::Object(object) => object.get("type").and_then(Value::as_str),
        Value::Array(_) => Some("union"),
        Value::String(name) => Some(name),
        _ => None,
    }
}

/// Compute the effective namespace and fully-qualified name of a named
/// schema object
///
/// Returns `(namespace_for_children, fully_qualified_name)`. An object
/// without a `name` contributes no registry entry and leaves the parent
/// namespace in effect. An object whose own `namespace` is absent or empty
/// inherits `parent_namespace`; when the effective namespace is empty the
/// fully-qualified name is the bare name.
pub fn qualify_name(
    schema: &Map<String, Value>,
    parent_namespace: Option<&str>,
) -> (Option<String>, Option<String>) {
    let name = match schema.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => return (parent_namespace.map(String::from), None),
    };

    let namespace = schema
        .get("namespace")
        .and_then(Value::as_str)
        .filter(|ns| !ns.is_empty())
        .or(parent_namespace)
        .filter(|ns| !ns.is_empty());

    match namespace {
        Some(ns) => (Some(ns.to_string()), Some(format!("{}.{}", ns, name))),
        None => (None, Some(name.to_string())),
    }
}

/// Compute the registry lookup key for a non-primitive type reference
///
/// A reference already containing a `.` separator is used verbatim; a bare
/// reference is prefixed with the enclosing namespace when one is in effect.
pub fn qualify_reference(reference: &str, namespace: Option<&str>) -> String {
    if reference.contains('.') {
        return reference.to_string();
    }

    match namespace {
        Some(ns) if !ns.is_empty() => format!("{}.{}", ns, reference),
        _ => reference.to_string(),
    }
}
