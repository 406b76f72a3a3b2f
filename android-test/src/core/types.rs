//! Shared value types for assembling and dispatching gradle runs.

use serde::{Deserialize, Serialize};

/// A test selected by an external source, naming its source file by path.
///
/// Extra fields supplied by the producer are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestObject {
    pub name: String,
}

impl TestObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Result of handing a command to a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Exit code of the dispatched command, `None` if it was terminated by a signal.
    pub code: Option<i32>,
    pub timed_out: bool,
}

impl DispatchOutcome {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            timed_out: false,
        }
    }
}
