use crate::ast::directive::Directive;
use crate::options::EncodeOptions;

use super::args::encode_args;

/// Renders a directive list to an inline token string, space-joined.
/// Elements that render empty still contribute a join separator, matching
/// the historical behavior.
pub(super) fn encode_directives(
    directives: &[Directive],
    depth: usize,
    opts: &EncodeOptions,
) -> String {
    directives
        .iter()
        .map(|directive| encode_directive(directive, depth, opts))
        .collect::<Vec<_>>()
        .join(" ")
}

fn encode_directive(directive: &Directive, depth: usize, opts: &EncodeOptions) -> String {
    match directive {
        Directive::Shorthand(text) => text.clone(),
        Directive::Named { name, args } => {
            if name.is_empty() {
                return String::new();
            }

            let rendered = encode_args(args, depth, false, opts);
            if rendered.is_empty() {
                name.clone()
            } else {
                format!("{name} {rendered}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::value::Args;

    fn encode(directives: &[Directive]) -> String {
        encode_directives(directives, 0, &EncodeOptions::default())
    }

    #[test]
    fn shorthand_is_verbatim() {
        assert_eq!(
            encode(&["@skip(if: false)".into()]),
            "@skip(if: false)"
        );
    }

    #[test]
    fn empty_name_renders_nothing() {
        assert_eq!(encode(&[Directive::named("")]), "");
    }

    #[test]
    fn named_with_args() {
        let directives = vec![
            "@test_one".into(),
            Directive::named("@test_two"),
            Directive::named_with_args("@test_three", Args::new().arg("key", "value")),
        ];

        insta::assert_snapshot!(encode(&directives), @r#"
        @test_one @test_two @test_three (
          key: "value"
        )
        "#);
    }

    #[test]
    fn named_with_empty_args_keeps_bare_name() {
        assert_eq!(encode(&[Directive::named_with_args("@cached", Args::new())]), "@cached");
    }
}
