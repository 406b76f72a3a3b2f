//! I/O helpers for android-test commands.

pub mod config;
pub mod dispatch;
pub mod process;
pub mod test_objects;
