//! `molde.toml` manifest parsing and validation.
//!
//! The manifest is the declarative stand-in for a compiler's reflection
//! facility: it names each annotated type, its pattern marker, and its
//! member fields. TOML table order is preserved, so the field table order
//! *is* the member declaration order.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Declaration, Error, InitPolicy, PatternKind, Result, TypeDescriptor,
    error::SourceContext,
    validate::{is_identifier, is_namespace, is_reserved},
};

/// Root schema for molde.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project-wide settings
    pub project: ProjectConfig,

    /// Annotated type declarations, keyed by simple name
    #[serde(default)]
    pub types: IndexMap<String, TypeConfig>,
}

/// Project-wide settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Default namespace for generated artifacts
    pub namespace: String,
}

/// One annotated type declaration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    /// Which pattern to apply
    pub pattern: PatternKind,

    /// Namespace override for this type
    #[serde(default)]
    pub namespace: Option<String>,

    /// Singleton initialization policy (ignored by the builder pattern)
    #[serde(default)]
    pub init: InitPolicy,

    /// Whether the type has a reachable no-argument constructor
    #[serde(default = "default_true")]
    pub no_arg_constructor: bool,

    /// Member fields in declaration order: name -> declared type
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "molde.toml")
    }
}

impl Manifest {
    /// Parse a molde.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a molde.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Lower the manifest into annotated declarations, in manifest order.
    pub fn declarations(&self) -> Vec<Declaration> {
        self.types
            .iter()
            .map(|(name, config)| {
                let namespace = config
                    .namespace
                    .as_deref()
                    .unwrap_or(&self.project.namespace);
                let mut descriptor = TypeDescriptor::new(name.as_str(), namespace);
                descriptor.has_no_arg_constructor = config.no_arg_constructor;
                for (field, type_name) in &config.fields {
                    descriptor = descriptor.member(field.as_str(), type_name.as_str());
                }
                Declaration::new(descriptor, config.pattern).with_init(config.init)
            })
            .collect()
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

/// Validate declared names after parsing.
///
/// Duplicate member names never reach this point: TOML rejects duplicate
/// keys during parsing, which enforces the descriptor uniqueness invariant
/// for manifest input.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if !is_namespace(&manifest.project.namespace) {
        return Err(ctx.validation_error(
            format!("invalid namespace '{}'", manifest.project.namespace),
            &manifest.project.namespace,
        ));
    }

    for (name, config) in &manifest.types {
        validate_name(ctx, name, "type")?;

        if let Some(namespace) = &config.namespace
            && !is_namespace(namespace)
        {
            return Err(
                ctx.validation_error(format!("invalid namespace '{namespace}'"), namespace)
            );
        }

        for field in config.fields.keys() {
            validate_name(ctx, field, "field")?;
        }
    }

    Ok(())
}

fn validate_name(ctx: &SourceContext, name: &str, context: &str) -> Result<()> {
    if !is_identifier(name) {
        return Err(ctx.invalid_identifier_error(name, context));
    }
    if is_reserved(name) {
        return Err(ctx.reserved_keyword_error(name, context));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARRO_MANIFEST: &str = r#"
        [project]
        namespace = "br.me.patterns.model"

        [types.CarroBuilder]
        pattern = "builder"

        [types.CarroBuilder.fields]
        cor = "String"
        anoFabricacao = "int"
        arCondicionado = "boolean"

        [types.MathSingleton]
        pattern = "singleton"
        namespace = "br.me.patterns.math"
    "#;

    #[test]
    fn test_parse_carro_manifest() {
        let manifest = Manifest::from_str(CARRO_MANIFEST).unwrap();

        assert_eq!(manifest.project.namespace, "br.me.patterns.model");
        assert_eq!(manifest.types.len(), 2);

        let carro = &manifest.types["CarroBuilder"];
        assert_eq!(carro.pattern, PatternKind::Builder);
        assert_eq!(carro.fields.len(), 3);

        let math = &manifest.types["MathSingleton"];
        assert_eq!(math.pattern, PatternKind::Singleton);
        assert_eq!(math.init, InitPolicy::Lazy);
        assert!(math.no_arg_constructor);
    }

    #[test]
    fn test_field_order_preserved() {
        let manifest = Manifest::from_str(CARRO_MANIFEST).unwrap();
        let fields: Vec<&str> = manifest.types["CarroBuilder"]
            .fields
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(fields, ["cor", "anoFabricacao", "arCondicionado"]);
    }

    #[test]
    fn test_declarations_lowering() {
        let manifest = Manifest::from_str(CARRO_MANIFEST).unwrap();
        let declarations = manifest.declarations();

        assert_eq!(declarations.len(), 2);

        let carro = &declarations[0];
        assert_eq!(carro.pattern, PatternKind::Builder);
        assert_eq!(carro.descriptor.namespace, "br.me.patterns.model");
        let members: Vec<&str> = carro
            .descriptor
            .members
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(members, ["cor", "anoFabricacao", "arCondicionado"]);

        let math = &declarations[1];
        assert_eq!(math.descriptor.namespace, "br.me.patterns.math");
        assert_eq!(math.init, InitPolicy::Lazy);
    }

    #[test]
    fn test_init_policy_parsing() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            namespace = "app"

            [types.Config]
            pattern = "singleton"
            init = "eager"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.types["Config"].init, InitPolicy::Eager);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Manifest::from_str("[project").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_field_is_parse_error() {
        let err = Manifest::from_str(
            r#"
            [project]
            namespace = "app"

            [types.FooBuilder]
            pattern = "builder"

            [types.FooBuilder.fields]
            cor = "String"
            cor = "int"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_reserved_field_name_rejected() {
        let err = Manifest::from_str(
            r#"
            [project]
            namespace = "app"

            [types.FooBuilder]
            pattern = "builder"

            [types.FooBuilder.fields]
            class = "String"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_invalid_type_name_rejected() {
        let err = Manifest::from_str(
            r#"
            [project]
            namespace = "app"

            [types."1Foo"]
            pattern = "builder"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let err = Manifest::from_str(
            r#"
            [project]
            namespace = "br..me"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        let err = Manifest::from_str(
            r#"
            [project]
            namespace = "app"

            [types.Foo]
            pattern = "factory"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }
}
