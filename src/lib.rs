//! gridfx (workspace facade crate).
//!
//! Re-exports the member crates under stable module names so applications
//! use `gridfx::{types, core, engine, input, term}` regardless of how the
//! implementation is split.

pub use gridfx_core as core;
pub use gridfx_engine as engine;
pub use gridfx_input as input;
pub use gridfx_term as term;
pub use gridfx_types as types;
