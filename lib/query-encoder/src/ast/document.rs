use std::fmt::Display;

use crate::encode::encode_document;
use crate::options::EncodeOptions;

use super::directive::Directive;
use super::operation::Operation;
use super::selection_set::SelectionSet;

/// The root description of a GraphQL document: up to three operations plus
/// fragment declarations. The encoder never mutates it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Definition {
    pub query: Option<Operation>,
    pub mutation: Option<Operation>,
    pub subscription: Option<Operation>,
    /// Ordered fragment declarations, rendered after the operations.
    pub fragments: Vec<(String, FragmentDefinition)>,
}

impl Definition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, operation: Operation) -> Self {
        self.query = Some(operation);
        self
    }

    pub fn mutation(mut self, operation: Operation) -> Self {
        self.mutation = Some(operation);
        self
    }

    pub fn subscription(mut self, operation: Operation) -> Self {
        self.subscription = Some(operation);
        self
    }

    pub fn fragment(mut self, name: impl Into<String>, fragment: FragmentDefinition) -> Self {
        self.fragments.push((name.into(), fragment));
        self
    }

    /// Renders the document with default options.
    pub fn encode(&self) -> String {
        self.encode_with(&EncodeOptions::default())
    }

    /// Renders the document. Operations and fragment declarations are
    /// separated by exactly one blank line; there is no trailing newline.
    pub fn encode_with(&self, options: &EncodeOptions) -> String {
        encode_document(self, options)
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// A named fragment declaration: `fragment <name> on <type_condition> { ... }`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FragmentDefinition {
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection: SelectionSet,
}

impl FragmentDefinition {
    pub fn on(type_condition: impl Into<String>, selection: SelectionSet) -> Self {
        FragmentDefinition {
            type_condition: type_condition.into(),
            directives: Vec::new(),
            selection,
        }
    }
}
