//! Identifier validation for manifest-declared names.
//!
//! Generated artifacts are Java source, so every type name, field name,
//! and namespace segment must be a valid, non-reserved Java identifier.

/// Java reserved words (keywords plus the boolean/null literals), which
/// cannot be used as identifiers in generated source.
const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Whether `name` is a syntactically valid Java identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Whether `name` is a Java reserved word.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Whether `namespace` is a valid dotted package path.
///
/// Namespace segments may be reserved words in the wild (`int` cannot, but
/// conventions like `br.me` are fine); only the identifier syntax is
/// checked per segment.
pub fn is_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace.split('.').all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("cor"));
        assert!(is_identifier("anoFabricacao"));
        assert!(is_identifier("_internal"));
        assert!(is_identifier("$gen"));
        assert!(is_identifier("CarroBuilder_"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("foo-bar"));
        assert!(!is_identifier("foo bar"));
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("class"));
        assert!(is_reserved("int"));
        assert!(is_reserved("true"));
        assert!(!is_reserved("cor"));
        assert!(!is_reserved("Carro"));
    }

    #[test]
    fn test_is_namespace() {
        assert!(is_namespace("br.me.patterns.model"));
        assert!(is_namespace("single"));
        assert!(!is_namespace(""));
        assert!(!is_namespace("br..me"));
        assert!(!is_namespace("br.1me"));
        assert!(!is_namespace(".br"));
    }
}
