//! Tower Stack (workspace facade crate).
//!
//! Re-exports the workspace crates under one `tower_stack::{core,input,term,types}`
//! namespace so the binary, integration tests and benches share a single path.

pub use tower_stack_core as core;
pub use tower_stack_input as input;
pub use tower_stack_term as term;
pub use tower_stack_types as types;
