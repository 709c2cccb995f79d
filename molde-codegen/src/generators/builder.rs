//! Fluent builder generation.
//!
//! Emits two coupled artifacts per descriptor: the builder class itself,
//! which extends the annotated type and gains one fluent setter per
//! eligible member plus `build()`, and the plain built value type the
//! builder populates.
//!
//! The builder extends the annotated type for field storage; the built
//! type is freestanding, serializable, and carries the generated
//! `toString` with its intentional trailing comma.

use molde_descriptor::{MemberDescriptor, TypeDescriptor};

use crate::{Artifact, CodeBuilder, Result, naming};

/// Generate the builder and built artifacts for one descriptor, in that
/// emission order.
pub fn generate(descriptor: &TypeDescriptor) -> Result<[Artifact; 2]> {
    let built = naming::built_name(&descriptor.name)?;
    let generated = naming::generated_name(&descriptor.name);
    let members: Vec<&MemberDescriptor> = descriptor
        .members
        .iter()
        .filter(|m| m.kind.is_eligible())
        .collect();

    let builder_artifact = Artifact {
        namespace: descriptor.namespace.clone(),
        source: builder_source(descriptor, &generated, &built, &members),
        type_name: generated,
    };
    let built_artifact = Artifact {
        namespace: descriptor.namespace.clone(),
        source: built_source(descriptor, &built, &members),
        type_name: built,
    };

    Ok([builder_artifact, built_artifact])
}

/// The builder class: `public class <Name>_ extends <Name>`, a fluent
/// setter per member in declaration order, then `build()`.
fn builder_source(
    descriptor: &TypeDescriptor,
    generated: &str,
    built: &str,
    members: &[&MemberDescriptor],
) -> String {
    let original = descriptor.name.as_str();
    let var = naming::built_var_name(built);

    CodeBuilder::java()
        .line(&format!("package {};", descriptor.namespace))
        .blank()
        .block_with_close(
            &format!("public class {generated} extends {original} {{"),
            "}",
            |b| {
                b.block_with_close(&format!("public {generated}() {{"), "}", |b| b)
                    .each(members, |b, m| {
                        b.blank().block_with_close(
                            &format!(
                                "public {generated} {}({} {}) {{",
                                naming::setter_name(&m.name),
                                m.type_name,
                                m.name
                            ),
                            "}",
                            |b| {
                                // No spaces around '=': the setter
                                // template is pinned byte-exact.
                                b.line(&format!("super.{}={};", m.name, m.name))
                                    .line("return this;")
                            },
                        )
                    })
                    .blank()
                    .block_with_close(&format!("public {built} build() {{"), "}", |b| {
                        b.line(&format!("{built} {var} = new {built}();"))
                            .each(members, |b, m| {
                                b.line(&format!("{var}.{} = {};", m.name, m.name))
                            })
                            .line(&format!("return {var};"))
                    })
            },
        )
        .build()
}

/// The built value type: independently instantiable, serializable across
/// process or storage boundaries, one public field per member, and the
/// `toString` override.
fn built_source(descriptor: &TypeDescriptor, built: &str, members: &[&MemberDescriptor]) -> String {
    CodeBuilder::java()
        .line(&format!("package {};", descriptor.namespace))
        .blank()
        .line("import java.io.Serializable;")
        .blank()
        .block_with_close(
            &format!("public class {built} implements Serializable {{"),
            "}",
            |b| {
                b.each(members, |b, m| {
                    b.line(&format!("public {} {};", m.type_name, m.name)).blank()
                })
                .block_with_close(&format!("public {built}() {{"), "}", |b| b)
                .blank()
                .line("@Override")
                .block_with_close("public String toString() {", "}", |b| {
                    to_string_body(b, built, members)
                })
            },
        )
        .build()
}

/// The concatenation template: `"<Name> {" + "<m>=" + m + "," + ... + "}"`.
/// Every member contributes a trailing comma, including the last; the
/// resulting `<Name> {m1=v1,...,mN=vN,}` shape is specified behavior.
fn to_string_body(b: CodeBuilder, built: &str, members: &[&MemberDescriptor]) -> CodeBuilder {
    b.line("return \"\" +")
        .indent()
        .indent()
        .line(&format!("\"{built} {{\" +"))
        .each(members, |b, m| {
            b.line(&format!("\"{}=\" + {} + \",\" +", m.name, m.name))
        })
        .line("\"}\";")
        .dedent()
        .dedent()
}
