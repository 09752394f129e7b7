use serde_json::Number;

/// An argument value, attached to a field, directive or operation.
///
/// The sentinel forms of the authoring surface (`$enum`, `$var`, `$raw`) are
/// constructed variants here, so user data can never collide with them.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Boolean(bool),
    Number(Number),
    String(String),
    Null,
    /// Unquoted enum literal, e.g. `DESC`.
    Enum(String),
    /// Reference to a declared operation variable, including its `$` sigil.
    Variable(String),
    /// Literal passed through uninterpreted. An empty string renders nothing.
    Raw(String),
    List(Vec<ArgValue>),
    Object(Args),
}

impl ArgValue {
    /// Loose truthiness over the JSON-ish value kinds, used for the `$keep`
    /// flag of plain-data input.
    pub(crate) fn is_truthy(&self) -> bool {
        match self {
            ArgValue::Boolean(b) => *b,
            ArgValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            ArgValue::String(s) | ArgValue::Enum(s) | ArgValue::Variable(s) | ArgValue::Raw(s) => {
                !s.is_empty()
            }
            ArgValue::Null => false,
            ArgValue::List(_) | ArgValue::Object(_) => true,
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Boolean(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Number(value.into())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Number(value.into())
    }
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        ArgValue::Number(value.into())
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(ArgValue::Number)
            .unwrap_or(ArgValue::Null)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<Args> for ArgValue {
    fn from(value: Args) -> Self {
        ArgValue::Object(value)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(value: Vec<T>) -> Self {
        ArgValue::List(value.into_iter().map(Into::into).collect())
    }
}

/// An ordered argument map. Insertion order is rendering order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Args {
    /// Forces an otherwise-empty nested object argument to render as `{}`.
    /// Has no effect in the top-level, parenthesized position.
    pub keep: bool,
    entries: Vec<(String, ArgValue)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn keep(mut self) -> Self {
        self.keep = true;
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn entries(&self) -> &[(String, ArgValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, ArgValue)> for Args {
    fn from_iter<I: IntoIterator<Item = (String, ArgValue)>>(iter: I) -> Self {
        Args {
            keep: false,
            entries: iter.into_iter().collect(),
        }
    }
}
