use serde_json::json;

use super::testkit::{encode, init_logger};

#[test]
fn query() {
    init_logger();
    insta::assert_snapshot!(encode(json!({
        "query": {
            "users": {
                "$args": { "first": 10 },
                "id": true,
                "name": true
            }
        }
    })), @r"
    query {
      users (
        first: 10
      ) {
        id
        name
      }
    }
    ");
}

#[test]
fn mutation() {
    insta::assert_snapshot!(encode(json!({
        "mutation": {
            "deleteUser": {
                "$args": { "id": 1 }
            }
        }
    })), @r"
    mutation {
      deleteUser (
        id: 1
      )
    }
    ");
}

#[test]
fn subscription() {
    insta::assert_snapshot!(encode(json!({
        "subscription": {
            "story": {
                "id": true,
                "content": true
            }
        }
    })), @r"
    subscription {
      story {
        id
        content
      }
    }
    ");
}

#[test]
fn operations_render_in_fixed_order() {
    insta::assert_snapshot!(encode(json!({
        "mutation": { "ping": true },
        "query": { "users": { "id": true } }
    })), @r"
    query {
      users {
        id
      }
    }

    mutation {
      ping
    }
    ");
}

#[test]
fn operation_name() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "$name": "demoQueryName",
            "users": { "id": true }
        }
    })), @r"
    query demoQueryName {
      users {
        id
      }
    }
    ");
}

#[test]
fn variables() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "$variables": {
                "$codes": "[String!]! = [\"FR\"]"
            },
            "countries": {
                "$args": {
                    "filter": {
                        "code": {
                            "in": { "$var": "$codes" }
                        }
                    }
                },
                "code": true,
                "name": true
            }
        }
    })), @r#"
    query (
      $codes: [String!]! = ["FR"]
    ) {
      countries (
        filter: {
          code: {
            in: $codes
          }
        }
      ) {
        code
        name
      }
    }
    "#);
}

#[test]
fn variables_with_empty_type_are_dropped() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "$variables": {
                "$first": "",
                "$status": "Int"
            },
            "users": { "id": true }
        }
    })), @r"
    query (
      $status: Int
    ) {
      users {
        id
      }
    }
    ");
}

#[test]
fn all_dropped_variables_render_no_parens() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "$variables": { "$first": "" },
            "users": { "id": true }
        }
    })), @r"
    query {
      users {
        id
      }
    }
    ");
}

#[test]
fn operation_directives() {
    insta::assert_snapshot!(encode(json!({
        "query": {
            "$name": "queryWithDirectives",
            "$directives": [
                "@test_one",
                { "name": "@test_two" },
                {
                    "name": "@test_three",
                    "args": { "key": "value" }
                }
            ],
            "users": {
                "id": true,
                "name": true
            }
        }
    })), @r#"
    query queryWithDirectives @test_one @test_two @test_three (
      key: "value"
    ) {
      users {
        id
        name
      }
    }
    "#);
}

#[test]
fn field_groups_force_ordering() {
    insta::assert_snapshot!(encode(json!({
        "mutation": {
            "$fields": [
                {
                    "operationB": { "$args": { "id": "1000" }, "status": true }
                },
                {
                    "operationA": { "$args": { "id": "1000" }, "status": true }
                }
            ]
        }
    })), @r#"
    mutation {
      operationB (
        id: "1000"
      ) {
        status
      }
      operationA (
        id: "1000"
      ) {
        status
      }
    }
    "#);
}

#[test]
fn field_groups_render_before_own_selection() {
    insta::assert_snapshot!(encode(json!({
        "mutation": {
            "$fields": [
                { "deleteUserRole": { "$args": { "userId": 1 } } },
                { "deleteUser": { "$args": { "id": 1 } } }
            ],
            "audit": true
        }
    })), @r"
    mutation {
      deleteUserRole (
        userId: 1
      )
      deleteUser (
        id: 1
      )
      audit
    }
    ");
}

#[test]
fn operation_with_empty_body_is_dropped() {
    assert_eq!(encode(json!({ "query": { "users": false } })), "");
    assert_eq!(encode(json!({ "query": {} })), "");
}
