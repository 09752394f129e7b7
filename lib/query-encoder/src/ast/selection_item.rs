use serde_json::Number;

use super::directive::Directive;
use super::selection_set::SelectionSet;
use super::value::Args;

/// One entry of a selection set: an ordinary field, a named fragment spread
/// or an inline fragment. Fragment usages keep their authored position among
/// sibling fields.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionItem {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub name: String,
    pub value: FieldValue,
}

/// The value attached to a selected field name.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// `true` renders the bare field, `false` omits it.
    Boolean(bool),
    /// Nonzero renders the bare field, zero omits it.
    Number(Number),
    /// Shorthand alias form: the field is rendered bare under this alias.
    /// An empty alias omits the field.
    Alias(String),
    /// Omitted.
    Null,
    Spec(Box<Field>),
    /// Multi-alias: the same field name rendered once per spec, in order.
    List(Vec<Field>),
}

impl FieldValue {
    pub(crate) fn is_rendered(&self) -> bool {
        match self {
            FieldValue::Boolean(b) => *b,
            FieldValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            FieldValue::Alias(alias) => !alias.is_empty(),
            FieldValue::Null => false,
            FieldValue::Spec(_) | FieldValue::List(_) => true,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Alias(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Alias(value)
    }
}

impl From<Field> for FieldValue {
    fn from(value: Field) -> Self {
        FieldValue::Spec(Box::new(value))
    }
}

impl From<Vec<Field>> for FieldValue {
    fn from(value: Vec<Field>) -> Self {
        FieldValue::List(value)
    }
}

impl From<SelectionSet> for FieldValue {
    fn from(value: SelectionSet) -> Self {
        FieldValue::Spec(Box::new(Field {
            selection: value,
            ..Field::default()
        }))
    }
}

/// The control/structure spec attached to one selected field.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Field {
    pub alias: Option<String>,
    pub args: Args,
    pub directives: Vec<Directive>,
    /// Replaces the entire rendered line, key included.
    pub content: Option<String>,
    /// Replaces only the braced sub-selection text.
    pub body: Option<String>,
    pub selection: SelectionSet,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    pub fn directive(mut self, directive: impl Into<Directive>) -> Self {
        self.directives.push(directive.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.selection = self.selection.field(name, value);
        self
    }

    pub fn select(mut self, selection: SelectionSet) -> Self {
        self.selection = selection;
        self
    }
}

/// A named fragment spread, rendered unconditionally (its body is declared
/// elsewhere).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<Directive>,
}

impl FragmentSpread {
    pub fn new(name: impl Into<String>) -> Self {
        FragmentSpread {
            name: name.into(),
            directives: Vec::new(),
        }
    }
}

/// An inline fragment. Without a type condition it renders as a bare `...`
/// spread. Skipped entirely when its selection renders empty.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection: SelectionSet,
}

impl InlineFragment {
    pub fn on(type_condition: impl Into<String>, selection: SelectionSet) -> Self {
        InlineFragment {
            type_condition: Some(type_condition.into()),
            directives: Vec::new(),
            selection,
        }
    }
}
