mod args;
mod directives;
mod document;
mod fields;

pub(crate) use document::encode_document;

/// Joins `part` onto `to` with a single space, unless `part` is empty.
fn append(to: String, part: &str) -> String {
    if part.is_empty() {
        to
    } else {
        format!("{to} {part}")
    }
}
