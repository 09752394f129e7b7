//! Plain-data input surface.
//!
//! [`Definition`] deserializes from the nested-object authoring shape:
//! `$`-prefixed control keys (`$name`, `$variables`, `$args`, `$alias`, ...),
//! single-key sentinel objects (`$enum`, `$var`, `$raw`) in argument
//! position, and all historical fragment-usage syntaxes (`$fragments` arrays,
//! `$spread`, `$on` maps keyed by type name with `$` as wildcard). Key order
//! of the incoming maps is preserved. Unrecognized `$`-keys are silently
//! ignored.

use std::fmt;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{Deserialize, Deserializer, Error, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Number;

use crate::ast::directive::Directive;
use crate::ast::document::{Definition, FragmentDefinition};
use crate::ast::operation::Operation;
use crate::ast::selection_item::{
    Field, FieldSelection, FieldValue, FragmentSpread, InlineFragment, SelectionItem,
};
use crate::ast::selection_set::SelectionSet;
use crate::ast::value::{ArgValue, Args};

impl<'de> Deserialize<'de> for Definition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DefinitionVisitor;

        impl<'de> Visitor<'de> for DefinitionVisitor {
            type Value = Definition;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a GraphQL document definition")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut definition = Definition::default();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "query" => {
                            definition.query = map
                                .next_value::<Option<SelectionObject>>()?
                                .map(SelectionObject::into_operation);
                        }
                        "mutation" => {
                            definition.mutation = map
                                .next_value::<Option<SelectionObject>>()?
                                .map(SelectionObject::into_operation);
                        }
                        "subscription" => {
                            definition.subscription = map
                                .next_value::<Option<SelectionObject>>()?
                                .map(SelectionObject::into_operation);
                        }
                        "fragments" => {
                            definition.fragments = map.next_value::<FragmentDeclarations>()?.0;
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(definition)
            }
        }

        deserializer.deserialize_map(DefinitionVisitor)
    }
}

/// One selection-shaped object of the authoring surface. Depending on
/// position it becomes an [`Operation`], a [`Field`], an [`InlineFragment`]
/// or a [`FragmentDefinition`]; the irrelevant control fields are simply
/// unused there.
#[derive(Default)]
struct SelectionObject {
    alias: Option<String>,
    args: Args,
    directives: Vec<Directive>,
    content: Option<String>,
    body: Option<String>,
    name: Option<String>,
    variables: Vec<(String, String)>,
    field_groups: Vec<SelectionSet>,
    type_condition: Option<String>,
    items: Vec<SelectionItem>,
}

impl SelectionObject {
    fn into_selection_set(self) -> SelectionSet {
        SelectionSet { items: self.items }
    }

    fn into_field(self) -> Field {
        Field {
            alias: self.alias,
            args: self.args,
            directives: self.directives,
            content: self.content,
            body: self.body,
            selection: SelectionSet { items: self.items },
        }
    }

    fn into_operation(self) -> Operation {
        Operation {
            name: self.name,
            variables: self.variables,
            directives: self.directives,
            field_groups: self.field_groups,
            selection: SelectionSet { items: self.items },
        }
    }

    fn into_inline_fragment(self) -> InlineFragment {
        InlineFragment {
            type_condition: self.type_condition,
            directives: self.directives,
            selection: SelectionSet { items: self.items },
        }
    }

    fn into_fragment_definition(self) -> FragmentDefinition {
        FragmentDefinition {
            type_condition: self.type_condition.unwrap_or_default(),
            directives: self.directives,
            selection: SelectionSet { items: self.items },
        }
    }
}

impl<'de> Deserialize<'de> for SelectionObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SelectionObjectVisitor;

        impl<'de> Visitor<'de> for SelectionObjectVisitor {
            type Value = SelectionObject;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a selection object")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(SelectionObject::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut object = SelectionObject::default();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "$alias" => object.alias = map.next_value()?,
                        "$args" => object.args = map.next_value()?,
                        "$directives" => object.directives = map.next_value::<DirectiveList>()?.0,
                        "$content" => object.content = map.next_value()?,
                        "$body" => object.body = map.next_value()?,
                        "$name" => object.name = map.next_value()?,
                        "$variables" => object.variables = map.next_value::<VariableMap>()?.0,
                        "$fields" => {
                            let groups: Option<Vec<SelectionObject>> = map.next_value()?;
                            object.field_groups = groups
                                .unwrap_or_default()
                                .into_iter()
                                .map(SelectionObject::into_selection_set)
                                .collect();
                        }
                        "$fragments" => {
                            object.items.extend(map.next_value::<FragmentUsages>()?.0);
                        }
                        "$spread" => {
                            object.items.extend(map.next_value::<SpreadList>()?.0);
                        }
                        "$on" => match map.next_value::<OnValue>()? {
                            OnValue::TypeCondition(type_name) => {
                                object.type_condition = Some(type_name);
                            }
                            OnValue::Inline(items) => object.items.extend(items),
                            OnValue::Absent => {}
                        },
                        "$onType" => object.type_condition = map.next_value()?,
                        other if other.starts_with('$') => {
                            map.next_value::<IgnoredAny>()?;
                        }
                        _ => {
                            let value: FieldValue = map.next_value()?;
                            object
                                .items
                                .push(SelectionItem::Field(FieldSelection { name: key, value }));
                        }
                    }
                }

                Ok(object)
            }
        }

        deserializer.deserialize_any(SelectionObjectVisitor)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a field selection value")
            }

            fn visit_bool<E: Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(FieldValue::Boolean(value))
            }

            fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(FieldValue::Number(value.into()))
            }

            fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(FieldValue::Number(value.into()))
            }

            fn visit_f64<E: Error>(self, value: f64) -> Result<Self::Value, E> {
                Number::from_f64(value)
                    .map(FieldValue::Number)
                    .ok_or_else(|| E::custom("non-finite field selection number"))
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(FieldValue::Alias(value.to_string()))
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(FieldValue::Null)
            }

            fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
                Ok(FieldValue::Null)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
                let specs: Vec<SelectionObject> =
                    Deserialize::deserialize(SeqAccessDeserializer::new(seq))?;
                Ok(FieldValue::List(
                    specs.into_iter().map(SelectionObject::into_field).collect(),
                ))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let spec: SelectionObject =
                    Deserialize::deserialize(MapAccessDeserializer::new(map))?;
                Ok(FieldValue::Spec(Box::new(spec.into_field())))
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Args {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ArgsVisitor;

        impl<'de> Visitor<'de> for ArgsVisitor {
            type Value = Args;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an argument map")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(Args::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, ArgValue)> = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, ArgValue>()? {
                    entries.push((key, value));
                }
                Ok(build_args(entries))
            }
        }

        deserializer.deserialize_any(ArgsVisitor)
    }
}

fn build_args(entries: Vec<(String, ArgValue)>) -> Args {
    let mut args = Args::new();
    for (key, value) in entries {
        if key == "$keep" {
            args.keep = value.is_truthy();
        } else if !key.starts_with('$') {
            args.insert(key, value);
        }
    }
    args
}

impl<'de> Deserialize<'de> for ArgValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ArgValueVisitor;

        impl<'de> Visitor<'de> for ArgValueVisitor {
            type Value = ArgValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an argument value")
            }

            fn visit_bool<E: Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ArgValue::Boolean(value))
            }

            fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ArgValue::Number(value.into()))
            }

            fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(ArgValue::Number(value.into()))
            }

            fn visit_f64<E: Error>(self, value: f64) -> Result<Self::Value, E> {
                Number::from_f64(value)
                    .map(ArgValue::Number)
                    .ok_or_else(|| E::custom("non-finite argument number"))
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ArgValue::String(value.to_string()))
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(ArgValue::Null)
            }

            fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
                Ok(ArgValue::Null)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<ArgValue>()? {
                    items.push(item);
                }
                Ok(ArgValue::List(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, ArgValue)> = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, ArgValue>()? {
                    entries.push((key, value));
                }

                // A single-key `$enum`/`$var`/`$raw` object is a sentinel;
                // anything else is a nested input object.
                if entries.len() == 1 {
                    let (key, value) = &entries[0];
                    match key.as_str() {
                        "$enum" => return Ok(ArgValue::Enum(sentinel_payload(value, false))),
                        "$var" => return Ok(ArgValue::Variable(sentinel_payload(value, false))),
                        "$raw" => return Ok(ArgValue::Raw(sentinel_payload(value, true))),
                        _ => {}
                    }
                }

                Ok(ArgValue::Object(build_args(entries)))
            }
        }

        deserializer.deserialize_any(ArgValueVisitor)
    }
}

/// Coerces a sentinel payload to its literal text. Empty results drop the
/// owning key at render time. `null` stays meaningful only for `$raw`.
fn sentinel_payload(value: &ArgValue, null_renders: bool) -> String {
    match value {
        ArgValue::String(text) => text.clone(),
        ArgValue::Number(number) => number.to_string(),
        ArgValue::Boolean(flag) => flag.to_string(),
        ArgValue::Null if null_renders => "null".to_string(),
        _ => String::new(),
    }
}

/// A directives value: one shorthand string, one structured directive, or a
/// list of either.
struct DirectiveList(Vec<Directive>);

impl<'de> Deserialize<'de> for DirectiveList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectiveListVisitor;

        impl<'de> Visitor<'de> for DirectiveListVisitor {
            type Value = DirectiveList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a directive or list of directives")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(DirectiveList(Vec::new()))
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(DirectiveList(vec![Directive::Shorthand(value.to_string())]))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let directive: NamedDirective =
                    Deserialize::deserialize(MapAccessDeserializer::new(map))?;
                Ok(DirectiveList(vec![directive.0]))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut directives = Vec::new();
                while let Some(item) = seq.next_element::<DirectiveInput>()? {
                    directives.push(item.0);
                }
                Ok(DirectiveList(directives))
            }
        }

        deserializer.deserialize_any(DirectiveListVisitor)
    }
}

struct DirectiveInput(Directive);

impl<'de> Deserialize<'de> for DirectiveInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectiveInputVisitor;

        impl<'de> Visitor<'de> for DirectiveInputVisitor {
            type Value = DirectiveInput;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a directive")
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(DirectiveInput(Directive::Shorthand(value.to_string())))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let directive: NamedDirective =
                    Deserialize::deserialize(MapAccessDeserializer::new(map))?;
                Ok(DirectiveInput(directive.0))
            }
        }

        deserializer.deserialize_any(DirectiveInputVisitor)
    }
}

struct NamedDirective(Directive);

impl<'de> Deserialize<'de> for NamedDirective {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NamedDirectiveVisitor;

        impl<'de> Visitor<'de> for NamedDirectiveVisitor {
            type Value = NamedDirective;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a structured directive")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut name = String::new();
                let mut args = Args::new();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = map.next_value::<Option<String>>()?.unwrap_or_default(),
                        "args" => args = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(NamedDirective(Directive::Named { name, args }))
            }
        }

        deserializer.deserialize_map(NamedDirectiveVisitor)
    }
}

/// `$variables`: an ordered map of variable name to GraphQL type string.
struct VariableMap(Vec<(String, String)>);

impl<'de> Deserialize<'de> for VariableMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VariableMapVisitor;

        impl<'de> Visitor<'de> for VariableMapVisitor {
            type Value = VariableMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a variable declarations map")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(VariableMap(Vec::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut variables = Vec::new();
                while let Some((name, type_str)) = map.next_entry::<String, Option<String>>()? {
                    variables.push((name, type_str.unwrap_or_default()));
                }
                Ok(VariableMap(variables))
            }
        }

        deserializer.deserialize_any(VariableMapVisitor)
    }
}

/// `$fragments`: a list of `{spread, directives?}` or `{inline: {...}}`.
struct FragmentUsages(Vec<SelectionItem>);

impl<'de> Deserialize<'de> for FragmentUsages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FragmentUsagesVisitor;

        impl<'de> Visitor<'de> for FragmentUsagesVisitor {
            type Value = FragmentUsages;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a list of fragment usages")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(FragmentUsages(Vec::new()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::new();
                while let Some(usage) = seq.next_element::<FragmentUsage>()? {
                    items.push(usage.0);
                }
                Ok(FragmentUsages(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let usage: FragmentUsage =
                    Deserialize::deserialize(MapAccessDeserializer::new(map))?;
                Ok(FragmentUsages(vec![usage.0]))
            }
        }

        deserializer.deserialize_any(FragmentUsagesVisitor)
    }
}

struct FragmentUsage(SelectionItem);

impl<'de> Deserialize<'de> for FragmentUsage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FragmentUsageVisitor;

        impl<'de> Visitor<'de> for FragmentUsageVisitor {
            type Value = FragmentUsage;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a fragment spread or inline fragment")
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(FragmentUsage(SelectionItem::FragmentSpread(
                    FragmentSpread::new(value),
                )))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut spread: Option<String> = None;
                let mut name: Option<String> = None;
                let mut directives: Vec<Directive> = Vec::new();
                let mut inline: Option<SelectionObject> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "spread" => spread = map.next_value()?,
                        "name" => name = map.next_value()?,
                        "directives" => directives = map.next_value::<DirectiveList>()?.0,
                        "inline" => inline = Some(map.next_value()?),
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                if let Some(inline) = inline {
                    return Ok(FragmentUsage(SelectionItem::InlineFragment(
                        inline.into_inline_fragment(),
                    )));
                }

                match spread.or(name) {
                    Some(fragment_name) => Ok(FragmentUsage(SelectionItem::FragmentSpread(
                        FragmentSpread {
                            name: fragment_name,
                            directives,
                        },
                    ))),
                    None => Err(Error::custom(
                        "fragment usage requires a `spread` name or an `inline` body",
                    )),
                }
            }
        }

        deserializer.deserialize_any(FragmentUsageVisitor)
    }
}

/// `$spread`: one fragment name, one `{name, directives?}` object, or a list
/// of either.
struct SpreadList(Vec<SelectionItem>);

impl<'de> Deserialize<'de> for SpreadList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpreadListVisitor;

        impl<'de> Visitor<'de> for SpreadListVisitor {
            type Value = SpreadList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a fragment spread or list of fragment spreads")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(SpreadList(Vec::new()))
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(SpreadList(vec![SelectionItem::FragmentSpread(
                    FragmentSpread::new(value),
                )]))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let usage: FragmentUsage =
                    Deserialize::deserialize(MapAccessDeserializer::new(map))?;
                Ok(SpreadList(vec![usage.0]))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::new();
                while let Some(usage) = seq.next_element::<FragmentUsage>()? {
                    items.push(usage.0);
                }
                Ok(SpreadList(items))
            }
        }

        deserializer.deserialize_any(SpreadListVisitor)
    }
}

/// `$on`: either a type-condition string, or a map of type name to one or
/// many inline-fragment bodies, with `$` as the untyped wildcard key.
enum OnValue {
    TypeCondition(String),
    Inline(Vec<SelectionItem>),
    Absent,
}

impl<'de> Deserialize<'de> for OnValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OnValueVisitor;

        impl<'de> Visitor<'de> for OnValueVisitor {
            type Value = OnValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a type condition or map of inline fragments")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(OnValue::Absent)
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(OnValue::TypeCondition(value.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::new();

                while let Some(type_name) = map.next_key::<String>()? {
                    let type_condition = if type_name == "$" {
                        None
                    } else {
                        Some(type_name)
                    };

                    for body in map.next_value::<SelectionObjects>()?.0 {
                        let SelectionObject {
                            directives,
                            items: body_items,
                            ..
                        } = body;
                        items.push(SelectionItem::InlineFragment(InlineFragment {
                            type_condition: type_condition.clone(),
                            directives,
                            selection: SelectionSet { items: body_items },
                        }));
                    }
                }

                Ok(OnValue::Inline(items))
            }
        }

        deserializer.deserialize_any(OnValueVisitor)
    }
}

/// One selection object or a list of them.
struct SelectionObjects(Vec<SelectionObject>);

impl<'de> Deserialize<'de> for SelectionObjects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SelectionObjectsVisitor;

        impl<'de> Visitor<'de> for SelectionObjectsVisitor {
            type Value = SelectionObjects;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a selection object or list of selection objects")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(SelectionObjects(Vec::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let object: SelectionObject =
                    Deserialize::deserialize(MapAccessDeserializer::new(map))?;
                Ok(SelectionObjects(vec![object]))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut objects = Vec::new();
                while let Some(object) = seq.next_element::<SelectionObject>()? {
                    objects.push(object);
                }
                Ok(SelectionObjects(objects))
            }
        }

        deserializer.deserialize_any(SelectionObjectsVisitor)
    }
}

/// `fragments`: one declarations map or a sequence of them, concatenated in
/// order.
struct FragmentDeclarations(Vec<(String, FragmentDefinition)>);

impl<'de> Deserialize<'de> for FragmentDeclarations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FragmentDeclarationsVisitor;

        impl<'de> Visitor<'de> for FragmentDeclarationsVisitor {
            type Value = FragmentDeclarations;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "fragment declarations")
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(FragmentDeclarations(Vec::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut declarations = Vec::new();
                while let Some(name) = map.next_key::<String>()? {
                    if let Some(declaration) = map.next_value::<Option<SelectionObject>>()? {
                        declarations.push((name, declaration.into_fragment_definition()));
                    }
                }
                Ok(FragmentDeclarations(declarations))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut declarations = Vec::new();
                while let Some(chunk) = seq.next_element::<FragmentDeclarations>()? {
                    declarations.extend(chunk.0);
                }
                Ok(FragmentDeclarations(declarations))
            }
        }

        deserializer.deserialize_any(FragmentDeclarationsVisitor)
    }
}
