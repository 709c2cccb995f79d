//! Descriptor model and manifest parsing for the molde pattern generator.
//!
//! This crate is the input boundary of the pipeline: it defines the
//! read-only shape description of an annotated declaration (name,
//! namespace, ordered members) and parses `molde.toml` manifests into
//! that shape.
//!
//! ```text
//! molde.toml (TOML) → molde-descriptor (declarations) → molde-codegen
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
mod error;
mod manifest;
mod validate;

pub use descriptor::{
    Declaration, InitPolicy, MemberDescriptor, MemberKind, PatternKind, TypeDescriptor,
};
pub use error::{Error, Result};
pub use manifest::{Manifest, ProjectConfig, TypeConfig};
