//! Loading externally selected tests from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::types::TestObject;

/// Parse a JSON array of test descriptors (`[{"name": "<path>"}, ...]`).
pub fn parse_test_objects(raw: &str) -> Result<Vec<TestObject>> {
    serde_json::from_str(raw).context("parse test objects")
}

/// Read test descriptors from `path`, preserving their order.
pub fn load_test_objects(path: &Path) -> Result<Vec<TestObject>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_test_objects(&raw).with_context(|| format!("load {}", path.display()))
}
