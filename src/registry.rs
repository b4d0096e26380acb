//! Schema Registry
//!
//! Accumulates resolved named types for one resolution session, keyed by
//! fully-qualified name. The registry is explicit state owned by whichever
//! caller starts resolution; it can be handed to further load calls so
//! several files resolve against one namespace space.

use std::collections::HashMap;

use serde_json::Value;

/// Caller-supplied transformation applied to every named type at the moment
/// it is registered
pub type Transform = Box<dyn Fn(&Value) -> Value>;

/// Mapping from fully-qualified name to resolved schema node
pub struct SchemaRegistry {
    schemas: HashMap<String, Value>,
    transform: Transform,
}

impl SchemaRegistry {
    /// Create an empty registry storing nodes unchanged
    pub fn new() -> Self {
        Self::with_transform(Value::clone)
    }

    /// Create an empty registry with a transform applied at registration
    ///
    /// The transform runs exactly once per registration, on the node as seen
    /// at that point in the walk; the result is what `get` returns.
    pub fn with_transform(transform: impl Fn(&Value) -> Value + 'static) -> Self {
        Self {
            schemas: HashMap::new(),
            transform: Box::new(transform),
        }
    }

    /// Register a named type. A later registration of the same name
    /// overwrites the earlier one.
    pub fn register(&mut self, name: impl Into<String>, schema: &Value) {
        self.schemas.insert(name.into(), (self.transform)(schema));
    }

    /// Get a registered type by fully-qualified name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Whether a fully-qualified name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Iterate over all registered fully-qualified names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
