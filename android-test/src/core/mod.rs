//! Pure logic for turning test selections into gradle arguments. No I/O.

pub mod gradle_args;
pub mod path;
pub mod subproject;
pub mod types;
