//! The two pattern generators.
//!
//! Each generator consumes one descriptor and synthesizes complete Java
//! source text. Emitted text is an opaque, fully specified template: no
//! source-emission library sits between the descriptor and the output.

pub mod builder;
pub mod singleton;
