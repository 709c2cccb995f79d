//! The naming/derivation scheme.
//!
//! Pure string transforms shared by both generators. The scheme is part of
//! the compatibility contract: generated names must match these rules
//! bit-exactly, case-sensitively.

use crate::{Error, Result};

/// Literal token that marks a builder-annotated type name.
pub const PATTERN_TOKEN: &str = "Builder";

/// Suffix appended to the source name to form the generated type name.
pub const GENERATED_SUFFIX: &str = "_";

/// Prefix of every generated fluent setter.
pub const SETTER_PREFIX: &str = "set";

/// Name of the singleton instance slot under lazy policies.
pub const INSTANCE_FIELD: &str = "instance";

/// Name of the singleton instance slot under the eager policy.
pub const EAGER_INSTANCE_FIELD: &str = "INSTANCE";

/// Name of the singleton accessor operation.
pub const ACCESSOR_NAME: &str = "getInstance";

/// Derive the generated wrapper/builder type name: `<Name>` + `_`.
pub fn generated_name(source: &str) -> String {
    format!("{source}{GENERATED_SUFFIX}")
}

/// Derive the built value type name by truncating at the *first*
/// occurrence of the `Builder` token. A token appearing mid-name truncates
/// there too; this is an index search, not a suffix match.
///
/// Absence of the token is a configuration error, as is a name that starts
/// with the token (nothing left to name the built type).
pub fn built_name(source: &str) -> Result<String> {
    match source.find(PATTERN_TOKEN) {
        Some(0) => Err(Error::EmptyBuiltName {
            type_name: source.to_string(),
        }),
        Some(idx) => Ok(source[..idx].to_string()),
        None => Err(Error::MissingPatternToken {
            type_name: source.to_string(),
        }),
    }
}

/// Derive a fluent setter name: `set` + first char uppercased + remainder
/// unchanged.
pub fn setter_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!(
            "{SETTER_PREFIX}{}{}",
            first.to_uppercase(),
            chars.as_str()
        ),
        None => SETTER_PREFIX.to_string(),
    }
}

/// Local variable name for the built instance inside `build()`: the built
/// type name lowercased in full.
pub fn built_var_name(built: &str) -> String {
    built.to_lowercase()
}
