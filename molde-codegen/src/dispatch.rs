//! Batch routing of annotated declarations to their generators.
//!
//! Policy is best-effort, never fail-fast: a configuration error skips
//! that declaration, an emission error loses that artifact, and in both
//! cases the rest of the batch proceeds. No error here is fatal.

use molde_descriptor::{Declaration, PatternKind};

use crate::{
    Artifact, ArtifactSink, Error,
    generators::{builder, singleton},
};

/// One isolated failure inside a batch.
#[derive(Debug)]
pub struct Failure {
    /// Qualified name of the declaration or artifact that failed.
    pub subject: String,
    pub error: Error,
}

/// Outcome of one batch: what was emitted, what failed.
#[derive(Debug, Default)]
pub struct Report {
    /// Qualified names of emitted artifacts, in emission order.
    pub written: Vec<String>,
    /// Per-declaration and per-artifact failures.
    pub failures: Vec<Failure>,
}

impl Report {
    /// Whether the batch completed without any failure.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Route each declaration to its generator and forward every resulting
/// artifact to the sink.
///
/// A builder declaration's two artifacts keep their (builder, built)
/// emission order; order across declarations follows the input batch.
pub fn dispatch(declarations: &[Declaration], sink: &mut impl ArtifactSink) -> Report {
    let mut report = Report::default();

    for declaration in declarations {
        let subject = declaration.descriptor.qualified_name();
        match declaration.pattern {
            PatternKind::Singleton => {
                match singleton::generate(&declaration.descriptor, declaration.init) {
                    Ok(artifact) => emit(sink, artifact, &mut report),
                    Err(error) => report.failures.push(Failure { subject, error }),
                }
            }
            PatternKind::Builder => match builder::generate(&declaration.descriptor) {
                Ok(artifacts) => {
                    for artifact in artifacts {
                        emit(sink, artifact, &mut report);
                    }
                }
                Err(error) => report.failures.push(Failure { subject, error }),
            },
        }
    }

    report
}

fn emit(sink: &mut impl ArtifactSink, artifact: Artifact, report: &mut Report) {
    let name = artifact.qualified_name();
    match sink.emit(artifact) {
        Ok(()) => report.written.push(name),
        Err(source) => report.failures.push(Failure {
            subject: name.clone(),
            error: Error::Emit {
                artifact: name,
                source,
            },
        }),
    }
}
