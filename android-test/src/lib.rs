//! Run Android unit tests through gradle, selected by test file path.
//!
//! A test file path such as
//! `mobile/android/android-components/components/feature/addons/src/test/java/.../FooTest.kt`
//! is translated into the gradle task and `--tests` filter that run it:
//!
//! - **[`core`]**: Pure path translation and argument assembly. No I/O.
//! - **[`io`]**: Config loading, test list loading and process execution.
//!
//! [`android_test`] ties the two together behind the [`io::dispatch::Dispatcher`] seam.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
