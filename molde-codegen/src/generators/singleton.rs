//! Singleton wrapper generation.
//!
//! Emits one artifact: a class extending the original type so all of its
//! public behavior stays directly callable, with a non-public constructor
//! and a single class-scoped instance slot behind `getInstance`.

use molde_descriptor::{InitPolicy, TypeDescriptor};

use crate::{Artifact, CodeBuilder, Error, Result, naming};

/// Generate the singleton wrapper for one descriptor.
///
/// The instance slot's initialization moment is governed by the explicit
/// [`InitPolicy`]. The default `Lazy` template is an unsynchronized
/// check-then-act, which has a race window under concurrent first access;
/// callers wanting a stronger guarantee opt into `Synchronized` or `Eager`
/// deliberately.
pub fn generate(descriptor: &TypeDescriptor, policy: InitPolicy) -> Result<Artifact> {
    if !descriptor.has_no_arg_constructor {
        return Err(Error::NoDefaultConstructor {
            type_name: descriptor.qualified_name(),
        });
    }

    let original = descriptor.name.as_str();
    let generated = naming::generated_name(original);

    let source = CodeBuilder::java()
        .line(&format!("package {};", descriptor.namespace))
        .blank()
        .block_with_close(
            &format!("public class {generated} extends {original} {{"),
            "}",
            |b| {
                b.line(&instance_slot(original, policy))
                    .blank()
                    .block_with_close(&format!("private {generated}() {{"), "}", |b| b)
                    .blank()
                    .block_with_close(&accessor_header(original, policy), "}", |b| {
                        accessor_body(b, original, policy)
                    })
            },
        )
        .build();

    Ok(Artifact {
        namespace: descriptor.namespace.clone(),
        type_name: generated,
        source,
    })
}

fn instance_slot(original: &str, policy: InitPolicy) -> String {
    match policy {
        InitPolicy::Lazy | InitPolicy::Synchronized => {
            format!("private static {original} {};", naming::INSTANCE_FIELD)
        }
        InitPolicy::Eager => format!(
            "private static final {original} {} = new {original}();",
            naming::EAGER_INSTANCE_FIELD
        ),
    }
}

fn accessor_header(original: &str, policy: InitPolicy) -> String {
    let modifiers = match policy {
        InitPolicy::Synchronized => "public static synchronized",
        InitPolicy::Lazy | InitPolicy::Eager => "public static",
    };
    format!("{modifiers} {original} {}() {{", naming::ACCESSOR_NAME)
}

fn accessor_body(b: CodeBuilder, original: &str, policy: InitPolicy) -> CodeBuilder {
    match policy {
        InitPolicy::Lazy | InitPolicy::Synchronized => b
            .block_with_close(
                &format!("if ({} == null) {{", naming::INSTANCE_FIELD),
                "}",
                |b| {
                    b.line(&format!(
                        "{} = new {original}();",
                        naming::INSTANCE_FIELD
                    ))
                },
            )
            .line(&format!("return {};", naming::INSTANCE_FIELD)),
        InitPolicy::Eager => b.line(&format!("return {};", naming::EAGER_INSTANCE_FIELD)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math_descriptor() -> TypeDescriptor {
        TypeDescriptor::new("MathSingleton", "br.me.patterns.math")
    }

    #[test]
    fn test_lazy_singleton_full_text() {
        let artifact = generate(&math_descriptor(), InitPolicy::Lazy).unwrap();

        assert_eq!(artifact.namespace, "br.me.patterns.math");
        assert_eq!(artifact.type_name, "MathSingleton_");
        assert_eq!(
            artifact.source,
            "\
package br.me.patterns.math;

public class MathSingleton_ extends MathSingleton {
  private static MathSingleton instance;

  private MathSingleton_() {
  }

  public static MathSingleton getInstance() {
    if (instance == null) {
      instance = new MathSingleton();
    }
    return instance;
  }
}
"
        );
    }

    #[test]
    fn test_synchronized_singleton_accessor() {
        let artifact = generate(&math_descriptor(), InitPolicy::Synchronized).unwrap();

        assert!(
            artifact
                .source
                .contains("public static synchronized MathSingleton getInstance() {")
        );
        assert!(artifact.source.contains("if (instance == null) {"));
    }

    #[test]
    fn test_eager_singleton_full_text() {
        let artifact = generate(&math_descriptor(), InitPolicy::Eager).unwrap();

        assert_eq!(
            artifact.source,
            "\
package br.me.patterns.math;

public class MathSingleton_ extends MathSingleton {
  private static final MathSingleton INSTANCE = new MathSingleton();

  private MathSingleton_() {
  }

  public static MathSingleton getInstance() {
    return INSTANCE;
  }
}
"
        );
    }

    #[test]
    fn test_constructor_is_private() {
        let artifact = generate(&math_descriptor(), InitPolicy::Lazy).unwrap();
        assert!(artifact.source.contains("private MathSingleton_() {"));
        assert!(!artifact.source.contains("public MathSingleton_("));
    }

    #[test]
    fn test_no_arg_constructor_required() {
        let descriptor = math_descriptor().without_no_arg_constructor();
        let err = generate(&descriptor, InitPolicy::Lazy).unwrap_err();

        assert!(matches!(err, Error::NoDefaultConstructor { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_generation_is_idempotent() {
        let descriptor = math_descriptor();
        let first = generate(&descriptor, InitPolicy::Lazy).unwrap();
        let second = generate(&descriptor, InitPolicy::Lazy).unwrap();

        assert_eq!(first.source, second.source);
    }
}
