/// Rendering options, passed down explicitly through every recursive call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Starting indentation level for the whole document.
    pub indent: usize,
    /// String emitted once per indentation level.
    pub indent_char: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 0,
            indent_char: "  ".to_string(),
        }
    }
}

impl EncodeOptions {
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn indent_char(mut self, indent_char: impl Into<String>) -> Self {
        self.indent_char = indent_char.into();
        self
    }

    pub(crate) fn get_indent(&self, depth: usize) -> String {
        self.indent_char.repeat(depth)
    }
}
