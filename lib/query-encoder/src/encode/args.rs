use crate::ast::value::{ArgValue, Args};
use crate::options::EncodeOptions;

/// Renders an argument map in parenthesized (field/operation/directive) or
/// braced (nested object value) form. Returns `""` when nothing renders,
/// except that `$keep` forces `{}` in nested mode.
pub(super) fn encode_args(args: &Args, depth: usize, nested: bool, opts: &EncodeOptions) -> String {
    let prop_indent = opts.get_indent(depth + 1);
    let mut lines: Vec<String> = Vec::new();

    for (name, value) in args.entries() {
        // Keys with a `$` prefix are reserved; unrecognized ones are an
        // escape hatch for callers and never render.
        if name.starts_with('$') {
            continue;
        }

        let rendered = encode_arg_value(value, depth, opts);
        if !rendered.is_empty() {
            lines.push(format!("{prop_indent}{name}: {rendered}"));
        }
    }

    if !lines.is_empty() {
        let body = format!("{}\n{}", lines.join("\n"), opts.get_indent(depth));
        if nested {
            format!("{{\n{body}}}")
        } else {
            format!("(\n{body})")
        }
    } else if nested && args.keep {
        "{}".to_string()
    } else {
        String::new()
    }
}

/// Formats a single argument value, or `""` when the value should drop its
/// whole `key: value` pair.
fn encode_arg_value(value: &ArgValue, depth: usize, opts: &EncodeOptions) -> String {
    match value {
        ArgValue::Boolean(b) => b.to_string(),
        ArgValue::Number(n) => n.to_string(),
        ArgValue::String(s) => quote(s),
        ArgValue::Null => "null".to_string(),
        // Sentinels emit their payload verbatim; empty payloads drop.
        ArgValue::Enum(name) | ArgValue::Variable(name) | ArgValue::Raw(name) => name.clone(),
        ArgValue::List(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| encode_arg_value(item, depth, opts))
                .filter(|item| !item.is_empty())
                .collect();

            // A list whose elements all dropped is omitted key-and-all
            // rather than rendered as `[]`.
            if rendered.is_empty() {
                String::new()
            } else {
                format!("[{}]", rendered.join(", "))
            }
        }
        ArgValue::Object(object) => encode_args(object, depth + 1, true, opts),
    }
}

fn quote(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(args: &Args) -> String {
        encode_args(args, 0, false, &EncodeOptions::default())
    }

    #[test]
    fn scalar_values_keep_falsy_forms() {
        let args = Args::new()
            .arg("nullValue", ArgValue::Null)
            .arg("falseValue", false)
            .arg("zeroValue", 0)
            .arg("emptyValue", "");

        insta::assert_snapshot!(encode(&args), @r#"
        (
          nullValue: null
          falseValue: false
          zeroValue: 0
          emptyValue: ""
        )
        "#);
    }

    #[test]
    fn empty_args_render_nothing() {
        assert_eq!(encode(&Args::new()), "");
        // `$keep` only affects nested object values.
        assert_eq!(encode(&Args::new().keep()), "");
    }

    #[test]
    fn nested_empty_object_drops_unless_kept() {
        let args = Args::new()
            .arg("skipEmptyObject", Args::new())
            .arg("keepObject", Args::new().keep());

        insta::assert_snapshot!(encode(&args), @r"
        (
          keepObject: {}
        )
        ");
    }

    #[test]
    fn strings_are_json_quoted() {
        let args = Args::new().arg("note", "say \"hi\"\n");

        insta::assert_snapshot!(encode(&args), @r#"
        (
          note: "say \"hi\"\n"
        )
        "#);
    }

    #[test]
    fn all_dropped_list_omits_the_key() {
        let args = Args::new()
            .arg("emptyList", Vec::<ArgValue>::new())
            .arg("droppedList", vec![ArgValue::Raw(String::new())])
            .arg("kept", vec![ArgValue::from(1), ArgValue::Raw(String::new())]);

        insta::assert_snapshot!(encode(&args), @r"
        (
          kept: [1]
        )
        ");
    }

    #[test]
    fn dollar_prefixed_keys_are_ignored() {
        let args = Args::new()
            .arg("$skip", true)
            .arg("input", Args::new().keep().arg("$other", 3).arg("id", 1));

        insta::assert_snapshot!(encode(&args), @r"
        (
          input: {
            id: 1
          }
        )
        ");
    }

    #[test]
    fn raw_passes_through_without_quoting() {
        let args = Args::new()
            .arg("rawEmptyObject", ArgValue::Raw("{}".to_string()))
            .arg("emptyRaw", ArgValue::Raw(String::new()))
            .arg("keepNullRaw", ArgValue::Raw("null".to_string()));

        insta::assert_snapshot!(encode(&args), @r"
        (
          rawEmptyObject: {}
          keepNullRaw: null
        )
        ");
    }
}
