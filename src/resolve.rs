//! Tree normalization
//!
//! The recursive walk that registers every named type it encounters and
//! rewrites every bare reference to its fully-qualified form. The walk is a
//! pure rewrite: it returns a new tree with the same shape and references
//! replaced, leaving the input untouched. Populating the registry is the
//! observable side effect.

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::name::{is_primitive, qualify_name, qualify_reference, record_type};
use crate::registry::SchemaRegistry;

/// Resolve a schema tree against `registry`
///
/// Every named type discovered during the walk is registered under its
/// fully-qualified name; every non-primitive reference is rewritten to the
/// fully-qualified name it resolves to. `namespace` is the namespace in
/// effect at the root, `None` for a top-level schema.
///
/// Fails with [`SchemaError::UnknownType`] carrying the qualified lookup key
/// the first time a reference is not found in the registry. Types registered
/// before the failure stay registered, so a retry after the missing type is
/// supplied picks up where the failed walk left off.
pub fn resolve_schema(
    schema: &Value,
    registry: &mut SchemaRegistry,
    namespace: Option<&str>,
) -> Result<Value> {
    match schema {
        // Union: each member resolves under the union's own namespace.
        Value::Array(members) => {
            let resolved = members
                .iter()
                .map(|member| resolve_schema(member, registry, namespace))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(resolved))
        }
        Value::String(reference) => {
            if is_primitive(reference) {
                return Ok(schema.clone());
            }
            let key = qualify_reference(reference, namespace);
            if registry.contains(&key) {
                Ok(Value::String(key))
            } else {
                Err(SchemaError::UnknownType { name: key })
            }
        }
        Value::Object(object) => {
            let (child_namespace, qualified) = qualify_name(object, namespace);
            if let Some(fqn) = qualified {
                // Registered before the children are walked, so a type may
                // reference itself.
                registry.register(fqn, schema);
            }
            resolve_children(schema, object, registry, child_namespace.as_deref())
        }
        // Not a schema shape; passed through untouched.
        _ => Ok(schema.clone()),
    }
}

/// Rewrite the recursive positions of a complex type: `items` for arrays,
/// `values` for maps, each field's `type` for records. Enums and fixed types
/// have no recursive positions and are returned as-is.
fn resolve_children(
    schema: &Value,
    object: &Map<String, Value>,
    registry: &mut SchemaRegistry,
    namespace: Option<&str>,
) -> Result<Value> {
    let mut resolved = object.clone();

    match record_type(schema) {
        Some("array") => {
            let items = object
                .get("items")
                .ok_or(SchemaError::MissingAttribute("items"))?;
            let items = resolve_schema(items, registry, namespace)?;
            resolved.insert("items".to_string(), items);
        }
        Some("map") => {
            let values = object
                .get("values")
                .ok_or(SchemaError::MissingAttribute("values"))?;
            let values = resolve_schema(values, registry, namespace)?;
            resolved.insert("values".to_string(), values);
        }
        _ => {
            if let Some(Value::Array(fields)) = object.get("fields") {
                let fields = fields
                    .iter()
                    .map(|field| resolve_field(field, registry, namespace))
                    .collect::<Result<Vec<_>>>()?;
                resolved.insert("fields".to_string(), Value::Array(fields));
            }
        }
    }

    Ok(Value::Object(resolved))
}

fn resolve_field(
    field: &Value,
    registry: &mut SchemaRegistry,
    namespace: Option<&str>,
) -> Result<Value> {
    let object = field
        .as_object()
        .ok_or(SchemaError::MissingAttribute("type"))?;
    let field_type = object
        .get("type")
        .ok_or(SchemaError::MissingAttribute("type"))?;

    let mut resolved = object.clone();
    resolved.insert(
        "type".to_string(),
        resolve_schema(field_type, registry, namespace)?,
    );
    Ok(Value::Object(resolved))
}
