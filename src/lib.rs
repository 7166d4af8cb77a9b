//! 2048 (workspace facade crate).
//!
//! The game rules live in dedicated crates under `crates/`; this package
//! re-exports them as `twenty48::{core, types}` and ships the headless
//! `twenty48` driver binary.

pub use twenty48_core as core;
pub use twenty48_types as types;
