//! A declarative GraphQL query encoder.
//!
//! A [`Definition`] describes an operation as an immutable tree of selected
//! fields, arguments, aliases, directives and fragments; encoding walks that
//! tree and emits correctly nested, correctly indented GraphQL query text.
//! The encoder is a pure function: no I/O, no schema awareness, no mutation
//! of its input, and no failure mode other than silent omission of
//! non-renderable parts.
//!
//! Definitions can be built with the typed API:
//!
//! ```
//! use graphql_query_encoder::{Args, Definition, Field, Operation, SelectionSet};
//!
//! let definition = Definition::new().query(Operation::new(
//!     SelectionSet::new().field(
//!         "users",
//!         Field::new()
//!             .args(Args::new().arg("first", 10))
//!             .field("id", true)
//!             .field("name", true),
//!     ),
//! ));
//!
//! assert_eq!(
//!     definition.encode(),
//!     "query {\n  users (\n    first: 10\n  ) {\n    id\n    name\n  }\n}"
//! );
//! ```
//!
//! or deserialized from the plain-data authoring shape:
//!
//! ```
//! use graphql_query_encoder::Definition;
//! use serde_json::json;
//!
//! let definition: Definition = serde_json::from_value(json!({
//!     "query": {
//!         "users": { "id": true, "name": true }
//!     }
//! }))
//! .unwrap();
//!
//! assert_eq!(definition.encode(), "query {\n  users {\n    id\n    name\n  }\n}");
//! ```

pub mod ast;
mod de;
mod encode;
mod options;

#[cfg(test)]
mod tests;

pub use ast::{
    ArgValue, Args, Definition, Directive, Field, FieldSelection, FieldValue, FragmentDefinition,
    FragmentSpread, InlineFragment, Operation, OperationKind, SelectionItem, SelectionSet,
};
pub use options::EncodeOptions;

/// Renders a definition to GraphQL query text.
pub fn generate_query(definition: &Definition, options: &EncodeOptions) -> String {
    definition.encode_with(options)
}
