//! Common utility functions shared across the domain modules.
//!
//! Pure functions only: no side effects, no I/O, WASM compatible.

pub mod string;

pub use string::{none_if_blank, some_if_present, starts_with_ignore_ascii_case};
