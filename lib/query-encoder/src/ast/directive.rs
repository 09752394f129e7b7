use super::value::Args;

/// An `@name(args)` annotation attachable to operations, fields, fragment
/// declarations and fragment usages.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    /// Verbatim shorthand, e.g. `"@skip(if: false)"`. The author is
    /// responsible for correct syntax.
    Shorthand(String),
    /// Structured form. The name must carry its `@` sigil; an empty name
    /// renders nothing, which is how a caller conditionally disables a
    /// directive.
    Named { name: String, args: Args },
}

impl Directive {
    pub fn named(name: impl Into<String>) -> Self {
        Directive::Named {
            name: name.into(),
            args: Args::new(),
        }
    }

    pub fn named_with_args(name: impl Into<String>, args: Args) -> Self {
        Directive::Named {
            name: name.into(),
            args,
        }
    }
}

impl From<&str> for Directive {
    fn from(value: &str) -> Self {
        Directive::Shorthand(value.to_string())
    }
}

impl From<String> for Directive {
    fn from(value: String) -> Self {
        Directive::Shorthand(value)
    }
}
