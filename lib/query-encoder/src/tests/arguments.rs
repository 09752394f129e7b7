use serde_json::json;

use super::testkit::encode;

#[test]
fn skip_empty_arguments_list() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "users": {
                "$args": {},
                "id": true,
                "name": true
            }
        }
    })), @r"
    query {
      users {
        id
        name
      }
    }
    ");
}

// An empty string is a renderable *argument* value (quoted as `""`), unlike
// an empty string in field-selection position, which drops the field.
#[test]
fn falsy_argument_values_are_kept() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "testArgs": {
                "$args": {
                    "nullValue": null,
                    "falseValue": false,
                    "zeroValue": 0,
                    "emptyValue": "",
                    "emptyObject": {}
                },
                "id": true,
                "object": {}
            }
        }
    })), @r#"
    query {
      testArgs (
        nullValue: null
        falseValue: false
        zeroValue: 0
        emptyValue: ""
      ) {
        id
        object
      }
    }
    "#);
}

#[test]
fn enum_values() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "testArgs": {
                "$args": {
                    "statusIn": [{ "$enum": "VERIFIED" }, { "$enum": "PENDING" }],
                    "orderBy": {
                        "field": "created_at",
                        "direction": { "$enum": "DESC" }
                    }
                },
                "id": true
            }
        }
    })), @r#"
    query {
      testArgs (
        statusIn: [VERIFIED, PENDING]
        orderBy: {
          field: "created_at"
          direction: DESC
        }
      ) {
        id
      }
    }
    "#);
}

#[test]
fn raw_and_keep() {
    insta::assert_snapshot!(encode(json!({
        "mutation": {
            "update": {
                "$args": {
                    "skipEmptyObject": {},
                    "rawEmptyObject": { "$raw": "{}" },
                    "keepObject": { "$keep": true }
                }
            }
        }
    })), @r"
    mutation {
      update (
        rawEmptyObject: {}
        keepObject: {}
      )
    }
    ");
}

#[test]
fn empty_raw_is_dropped_and_null_raw_is_kept() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "testRaw": {
                "$args": {
                    "emptyRaw": { "$raw": "" },
                    "keepNullRaw": { "$raw": null }
                },
                "id": true
            }
        }
    })), @r"
    query {
      testRaw (
        keepNullRaw: null
      ) {
        id
      }
    }
    ");
}

#[test]
fn raw_numbers_pass_through() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "testRaw": {
                "$args": { "limit": { "$raw": 1 } },
                "id": true
            }
        }
    })), @r"
    query {
      testRaw (
        limit: 1
      ) {
        id
      }
    }
    ");
}

#[test]
fn dollar_prefixed_argument_keys_are_skipped() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "testArgs": {
                "$args": {
                    "$skip": true,
                    "input": {
                        "$keep": true,
                        "$other": 3,
                        "id": 1
                    }
                }
            }
        }
    })), @r"
    query {
      testArgs (
        input: {
          id: 1
        }
      )
    }
    ");
}

#[test]
fn nested_input_objects() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "countries": {
                "$args": {
                    "filter": {
                        "continent": { "in": ["AF"] }
                    }
                },
                "code": true,
                "name": 1,
                "continent": { "code": 1, "name": "continent_name" }
            }
        }
    })), @r#"
    query {
      countries (
        filter: {
          continent: {
            in: ["AF"]
          }
        }
      ) {
        code
        name
        continent {
          code
          continent_name: name
        }
      }
    }
    "#);
}

// A list whose elements all drop is omitted key-and-all instead of
// rendering as `[]`.
#[test]
fn all_dropped_list_omits_the_key() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "testArgs": {
                "$args": {
                    "emptyList": [],
                    "droppedList": [{ "$raw": "" }],
                    "mixedList": [1, { "$raw": "" }, 2]
                },
                "id": true
            }
        }
    })), @r"
    query {
      testArgs (
        mixedList: [1, 2]
      ) {
        id
      }
    }
    ");
}

#[test]
fn variable_references_render_verbatim() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "users": {
                "$args": { "keyword": { "$var": "$keyword" } },
                "id": true
            }
        }
    })), @r"
    query {
      users (
        keyword: $keyword
      ) {
        id
      }
    }
    ");
}
