use criterion::{criterion_group, criterion_main, Criterion};
use graphql_query_encoder::{Definition, EncodeOptions};
use serde_json::json;
use std::hint::black_box;

fn nested_definition() -> Definition {
    serde_json::from_value(json!({
        "query": {
            "$name": "BenchQuery",
            "$variables": { "$codes": "[String!]! = []" },
            "countries": {
                "$args": {
                    "filter": {
                        "code": { "in": { "$var": "$codes" } },
                        "continent": { "in": ["AF", "AS", "EU"] }
                    }
                },
                "code": true,
                "name": true,
                "continent": {
                    "code": true,
                    "name": true,
                    "countries": {
                        "code": true,
                        "capital": true,
                        "languages": { "code": true, "name": true }
                    }
                },
                "$fragments": [{ "spread": "countryFields" }]
            }
        },
        "fragments": {
            "countryFields": {
                "$on": "Country",
                "currency": true,
                "phone": true
            }
        }
    }))
    .expect("benchmark definition should deserialize")
}

fn encode_pipeline(c: &mut Criterion) {
    let definition = nested_definition();
    let options = EncodeOptions::default();

    c.bench_function("encode_nested_query", |b| {
        b.iter(|| {
            let bb_definition = black_box(&definition);
            let bb_options = black_box(&options);
            bb_definition.encode_with(bb_options)
        })
    });

    c.bench_function("deserialize_and_encode", |b| {
        b.iter(|| {
            let definition = nested_definition();
            black_box(definition.encode())
        })
    });
}

criterion_group!(benches, encode_pipeline);
criterion_main!(benches);
