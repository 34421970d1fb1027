//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod ast_fixtures;
pub mod model_assertions;

use syster_mapping::mapping::{AstTreeParser, IdStrategy, MappingOptions, MappingOutcome};

/// Install a test-writer subscriber so `RUST_LOG=debug cargo test` shows
/// mapping logs. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Options producing `e0`, `e1`, ... ids.
pub fn sequential_options() -> MappingOptions {
    MappingOptions {
        id_strategy: IdStrategy::Sequential,
        ..MappingOptions::default()
    }
}

/// Map `tree` with the default rules.
pub fn map_tree(tree: &serde_json::Value) -> MappingOutcome {
    init_tracing();
    AstTreeParser::new(sequential_options())
        .parse_value(tree)
        .expect("tree should map")
}
