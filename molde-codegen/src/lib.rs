//! Builder and Singleton source generators for the molde pattern generator.
//!
//! Each generator is a pure function from a [`molde_descriptor::TypeDescriptor`]
//! to one or more [`Artifact`]s: deterministic, order-preserving, and free of
//! shared state, so regenerating from the same descriptor is byte-identical
//! and independent descriptors can be processed in parallel.
//!
//! # Module Organization
//!
//! - [`code`] - Indented source-text building blocks (CodeBuilder, Indent)
//! - [`naming`] - The naming/derivation scheme (pure string transforms)
//! - [`generators`] - The two pattern generators (builder, singleton)
//! - [`artifact`] - Generated source units and emission sinks
//! - [`dispatch`] - Batch routing with per-declaration failure isolation

pub mod artifact;
pub mod code;
pub mod dispatch;
mod error;
pub mod generators;
pub mod naming;

pub use artifact::{Artifact, ArtifactSink, MemorySink, SourceTreeSink};
pub use code::{CodeBuilder, Indent};
pub use dispatch::{Failure, Report, dispatch};
pub use error::{Error, Result};
