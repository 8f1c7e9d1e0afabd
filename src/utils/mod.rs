//! Utility modules
//!
//! Input handling shared by every command.

pub mod input;

pub use input::{resolve, resolve_from};
