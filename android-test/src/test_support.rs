//! Test-only helpers for building selections and observing dispatches.

use std::cell::RefCell;

use anyhow::Result;

use crate::core::path::AC_COMPONENTS_DIR;
use crate::core::types::{DispatchOutcome, TestObject};
use crate::io::dispatch::Dispatcher;

/// Path of an android-components unit test, e.g. `ac_test("feature/addons", "x/y/FooTest")`.
pub fn ac_test(project_dir: &str, class_path: &str) -> String {
    format!("{AC_COMPONENTS_DIR}/{project_dir}/src/test/java/{class_path}.kt")
}

/// Test descriptor for an android-components unit test.
pub fn ac_test_object(project_dir: &str, class_path: &str) -> TestObject {
    TestObject::new(ac_test(project_dir, class_path))
}

/// Dispatcher that records every call and returns a fixed outcome.
#[derive(Debug)]
pub struct RecordingDispatcher {
    outcome: DispatchOutcome,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl RecordingDispatcher {
    pub fn exiting(code: i32) -> Self {
        Self {
            outcome: DispatchOutcome::exited(code),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Recorded `(command, args)` pairs, in dispatch order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, command: &str, args: &[String]) -> Result<DispatchOutcome> {
        self.calls
            .borrow_mut()
            .push((command.to_string(), args.to_vec()));
        Ok(self.outcome)
    }
}
