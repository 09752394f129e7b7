use crate::ast::selection_item::{Field, FieldValue, SelectionItem};
use crate::ast::selection_set::SelectionSet;
use crate::options::EncodeOptions;

use super::append;
use super::args::encode_args;
use super::directives::encode_directives;

/// Renders one or more selection sets, merged in order, into a single braced
/// block, or `""` if nothing is renderable (the caller omits the field or
/// operation entirely in that case).
pub(super) fn encode_selections(
    sets: &[&SelectionSet],
    depth: usize,
    opts: &EncodeOptions,
) -> String {
    let prop_indent = opts.get_indent(depth + 1);
    let mut lines: Vec<String> = Vec::new();

    for set in sets {
        for item in &set.items {
            match item {
                SelectionItem::Field(field) => {
                    encode_field_entry(&field.name, &field.value, &mut lines, depth, opts);
                }
                SelectionItem::FragmentSpread(spread) => {
                    // Named spreads are never dropped for emptiness; their
                    // body is declared elsewhere.
                    lines.push(append(
                        format!("{prop_indent}...{}", spread.name),
                        &encode_directives(&spread.directives, depth + 1, opts),
                    ));
                }
                SelectionItem::InlineFragment(inline) => {
                    let body = encode_selection_set(&inline.selection, depth + 1, opts);
                    if body.is_empty() {
                        continue;
                    }

                    let head = match &inline.type_condition {
                        Some(type_name) => format!("{prop_indent}... on {type_name}"),
                        None => format!("{prop_indent}..."),
                    };
                    let head = append(head, &encode_directives(&inline.directives, depth + 1, opts));
                    lines.push(format!("{head} {body}"));
                }
            }
        }
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{{\n{}\n{}}}", lines.join("\n"), opts.get_indent(depth))
    }
}

pub(super) fn encode_selection_set(set: &SelectionSet, depth: usize, opts: &EncodeOptions) -> String {
    encode_selections(&[set], depth, opts)
}

fn encode_field_entry(
    name: &str,
    value: &FieldValue,
    lines: &mut Vec<String>,
    depth: usize,
    opts: &EncodeOptions,
) {
    if !value.is_rendered() {
        return;
    }

    let prop_indent = opts.get_indent(depth + 1);
    match value {
        FieldValue::Boolean(_) | FieldValue::Number(_) => {
            lines.push(format!("{prop_indent}{name}"));
        }
        FieldValue::Alias(alias) => {
            lines.push(format!("{prop_indent}{alias}: {name}"));
        }
        FieldValue::Spec(field) => encode_field_spec(name, field, lines, depth, opts),
        FieldValue::List(fields) => {
            for field in fields {
                encode_field_spec(name, field, lines, depth, opts);
            }
        }
        FieldValue::Null => {}
    }
}

fn encode_field_spec(
    name: &str,
    field: &Field,
    lines: &mut Vec<String>,
    depth: usize,
    opts: &EncodeOptions,
) {
    let prop_indent = opts.get_indent(depth + 1);

    // `content` replaces the entire line; every other property is ignored.
    if let Some(content) = nonempty(&field.content) {
        lines.push(format!("{prop_indent}{content}"));
        return;
    }

    let mut prop = match &field.alias {
        Some(alias) if !alias.is_empty() => format!("{alias}: {name}"),
        _ => name.to_string(),
    };

    prop = append(prop, &encode_args(&field.args, depth + 1, false, opts));
    prop = append(prop, &encode_directives(&field.directives, depth + 1, opts));

    match nonempty(&field.body) {
        Some(body) => {
            prop.push(' ');
            prop.push_str(body);
        }
        None => {
            // An empty recursive sub-selection leaves the field bare.
            prop = append(prop, &encode_selection_set(&field.selection, depth + 1, opts));
        }
    }

    lines.push(format!("{prop_indent}{prop}"));
}

fn nonempty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|text| !text.is_empty())
}
