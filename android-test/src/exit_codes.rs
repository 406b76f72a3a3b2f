//! Stable exit codes for the android-test CLI.
//!
//! When gradle runs to completion its own exit code is passed through instead.

/// Command succeeded (or was only printed with `--dry-run`).
pub const OK: i32 = 0;
/// Adapter failure: bad config, unreadable test list, untranslatable path, spawn error.
pub const INVALID: i32 = 1;
/// Gradle exceeded the configured timeout and was killed.
pub const TIMED_OUT: i32 = 124;
