use std::fmt::Display;

use super::directive::Directive;
use super::selection_set::SelectionSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
            OperationKind::Subscription => write!(f, "subscription"),
        }
    }
}

/// One operation of a document: an optional name, variable declarations,
/// directives and the selection to execute.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Operation {
    pub name: Option<String>,
    /// Ordered variable declarations, name (with `$` sigil) to GraphQL type
    /// string, e.g. `("$codes", "[String!]! = []")`. A declaration with an
    /// empty type string is silently dropped at render time.
    pub variables: Vec<(String, String)>,
    pub directives: Vec<Directive>,
    /// Selections rendered before `selection`, in order. Lets a caller force
    /// execution order across multiple top-level fields of a serial mutation.
    pub field_groups: Vec<SelectionSet>,
    pub selection: SelectionSet,
}

impl Operation {
    pub fn new(selection: SelectionSet) -> Self {
        Operation {
            selection,
            ..Operation::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn variable(mut self, name: impl Into<String>, type_str: impl Into<String>) -> Self {
        self.variables.push((name.into(), type_str.into()));
        self
    }

    pub fn directive(mut self, directive: impl Into<Directive>) -> Self {
        self.directives.push(directive.into());
        self
    }

    pub fn field_group(mut self, selection: SelectionSet) -> Self {
        self.field_groups.push(selection);
        self
    }
}
