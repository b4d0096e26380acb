//! Avro Schema Resolver
//!
//! Resolves tree-shaped Avro schema definitions so that every named type is
//! registered once under its fully-qualified name and every bare reference
//! to a named type is rewritten to that fully-qualified name. Schemas may be
//! split across multiple files; missing dependencies are loaded on demand by
//! filename convention.
//!
//! ## Features
//!
//! - **Namespace Inheritance**: a nested named type without its own
//!   `namespace` adopts the namespace in effect at its parent
//! - **Reference Qualification**: bare references are qualified against the
//!   enclosing namespace before registry lookup; dotted references are used
//!   verbatim; the eight primitive type names pass through untouched
//! - **Explicit Registry**: resolved types accumulate in a caller-owned
//!   [`SchemaRegistry`], reusable across load calls to share one namespace
//!   space
//! - **Lazy Dependency Loading**: an unresolved reference to `X` triggers
//!   loading `X.avsc` from the same directory and a retry of the whole tree
//!
//! ## Layout
//!
//! ```text
//! schemas/
//! ├── root.avsc                 {"type": "record", "name": "Root",
//! │                              "namespace": "com.example", ...}
//! └── com.example.Child.avsc    referenced from root.avsc as "Child"
//! ```

pub mod error;
pub mod loader;
pub mod name;
pub mod registry;
pub mod resolve;

pub use error::{Result, SchemaError};
pub use loader::{load_schema, load_schema_into};
pub use name::{is_primitive, qualify_name, qualify_reference, record_type};
pub use registry::SchemaRegistry;
pub use resolve::resolve_schema;
