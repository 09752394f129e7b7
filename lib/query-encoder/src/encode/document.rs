use crate::ast::document::Definition;
use crate::ast::operation::{Operation, OperationKind};
use crate::ast::selection_set::SelectionSet;
use crate::options::EncodeOptions;

use super::append;
use super::directives::encode_directives;
use super::fields::{encode_selection_set, encode_selections};

/// Renders a whole document: present operations in fixed order, then fragment
/// declarations, separated by one blank line.
pub(crate) fn encode_document(definition: &Definition, opts: &EncodeOptions) -> String {
    let mut doc: Vec<String> = Vec::new();

    let operations = [
        (OperationKind::Query, &definition.query),
        (OperationKind::Mutation, &definition.mutation),
        (OperationKind::Subscription, &definition.subscription),
    ];

    for (kind, operation) in operations {
        if let Some(operation) = operation {
            if let Some(rendered) = encode_operation(kind, operation, opts) {
                doc.push(rendered);
            }
        }
    }

    let indent = opts.get_indent(opts.indent);
    for (name, fragment) in &definition.fragments {
        let body = encode_selection_set(&fragment.selection, opts.indent, opts);
        if body.is_empty() {
            continue;
        }

        let head = append(
            format!("{indent}fragment {name} on {}", fragment.type_condition),
            &encode_directives(&fragment.directives, opts.indent, opts),
        );
        doc.push(format!("{head} {body}"));
    }

    tracing::trace!(
        blocks = doc.len(),
        fragments = definition.fragments.len(),
        "encoded document"
    );

    doc.join("\n\n")
}

/// Renders one operation, or `None` when its field body renders empty.
fn encode_operation(
    kind: OperationKind,
    operation: &Operation,
    opts: &EncodeOptions,
) -> Option<String> {
    let mut code = format!("{}{kind}", opts.get_indent(opts.indent));

    if let Some(name) = &operation.name {
        code = append(code, name);
    }

    let var_indent = opts.get_indent(opts.indent + 1);
    let vars: Vec<String> = operation
        .variables
        .iter()
        .filter(|(_, type_str)| !type_str.is_empty())
        .map(|(name, type_str)| format!("{var_indent}{name}: {type_str}"))
        .collect();

    if !vars.is_empty() {
        code.push_str(&format!(
            " (\n{}\n{})",
            vars.join("\n"),
            opts.get_indent(opts.indent)
        ));
    }

    code = append(
        code,
        &encode_directives(&operation.directives, opts.indent, opts),
    );

    let mut sets: Vec<&SelectionSet> = operation.field_groups.iter().collect();
    sets.push(&operation.selection);

    let body = encode_selections(&sets, opts.indent, opts);
    if body.is_empty() {
        return None;
    }

    Some(format!("{code} {body}"))
}
