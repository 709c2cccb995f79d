//! Generated source units and emission sinks.
//!
//! An [`Artifact`] is one generated file: namespace, type name, and full
//! source text. Artifacts are produced fresh on every generation call and
//! owned solely by the sink once handed off.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// One generated source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Enclosing namespace as a dotted path.
    pub namespace: String,
    /// Simple name of the generated type.
    pub type_name: String,
    /// Full source text.
    pub source: String,
}

impl Artifact {
    /// Fully qualified name of the generated type.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.type_name)
    }

    /// File name for this artifact.
    pub fn file_name(&self) -> String {
        format!("{}.java", self.type_name)
    }

    /// Path relative to a source root: one directory per namespace segment,
    /// then the file name.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.namespace.split('.').collect();
        path.push(self.file_name());
        path
    }
}

/// Destination for generated artifacts.
///
/// The sink owns each artifact after handoff. An emission failure concerns
/// that artifact only; callers are expected to continue with siblings.
pub trait ArtifactSink {
    /// Persist one artifact.
    fn emit(&mut self, artifact: Artifact) -> io::Result<()>;
}

/// Sink that writes artifacts into a generated-source tree on disk.
pub struct SourceTreeSink {
    root: PathBuf,
}

impl SourceTreeSink {
    /// Create a sink rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The source-tree root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for SourceTreeSink {
    fn emit(&mut self, artifact: Artifact) -> io::Result<()> {
        let path = self.root.join(artifact.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &artifact.source)
    }
}

/// Sink that collects artifacts in memory, for previews and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected artifacts, in emission order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Consume the sink and return the collected artifacts.
    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn emit(&mut self, artifact: Artifact) -> io::Result<()> {
        self.artifacts.push(artifact);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn carro_artifact() -> Artifact {
        Artifact {
            namespace: "br.me.patterns.model".to_string(),
            type_name: "Carro".to_string(),
            source: "public class Carro {\n}\n".to_string(),
        }
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            carro_artifact().qualified_name(),
            "br.me.patterns.model.Carro"
        );
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            carro_artifact().relative_path(),
            PathBuf::from("br/me/patterns/model/Carro.java")
        );
    }

    #[test]
    fn test_source_tree_sink_writes_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let mut sink = SourceTreeSink::new(temp.path());

        sink.emit(carro_artifact()).unwrap();

        let written = temp.path().join("br/me/patterns/model/Carro.java");
        assert!(written.exists());
        assert_eq!(
            fs::read_to_string(written).unwrap(),
            "public class Carro {\n}\n"
        );
    }

    #[test]
    fn test_source_tree_sink_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut sink = SourceTreeSink::new(temp.path());

        sink.emit(carro_artifact()).unwrap();
        let mut updated = carro_artifact();
        updated.source = "public class Carro { int x; }\n".to_string();
        sink.emit(updated.clone()).unwrap();

        let written = temp.path().join("br/me/patterns/model/Carro.java");
        assert_eq!(fs::read_to_string(written).unwrap(), updated.source);
    }

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        let mut second = carro_artifact();
        second.type_name = "CarroBuilder_".to_string();

        sink.emit(carro_artifact()).unwrap();
        sink.emit(second).unwrap();

        let names: Vec<&str> = sink
            .artifacts()
            .iter()
            .map(|a| a.type_name.as_str())
            .collect();
        assert_eq!(names, ["Carro", "CarroBuilder_"]);
    }
}
