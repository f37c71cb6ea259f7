//! Blub (workspace facade crate).
//!
//! Re-exports the workspace crates as `blub::{core,input,term,types}` and hosts
//! the pieces that only the binary needs: environment configuration, logging
//! setup and the headless runner.

pub use blub_core as core;
pub use blub_input as input;
pub use blub_term as term;
pub use blub_types as types;

pub mod config;
pub mod headless;
pub mod logging;
