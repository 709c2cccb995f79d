//! Shape descriptions of annotated declarations.
//!
//! A [`TypeDescriptor`] is a read-only view of one declaration: its simple
//! name, enclosing namespace, and ordered member list. Member order is
//! significant and preserved exactly as declared; it drives setter order,
//! field order, and the order of the generated `toString` concatenation.

use serde::Deserialize;

/// Java primitive type names, as classified by the member eligibility filter.
const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "char", "float", "double",
];

/// Semantic classification of a member's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// One of the eight Java primitive types.
    Primitive,
    /// A declared class or interface type.
    Reference,
    /// An array type (`String[]`, `int[][]`).
    Array,
    /// A generic or wildcard type (`List<String>`, `?`).
    Generic,
}

impl MemberKind {
    /// Classify a declared Java type name.
    pub fn classify(type_name: &str) -> Self {
        if type_name.ends_with("[]") {
            Self::Array
        } else if type_name.contains('<') || type_name.contains('?') {
            Self::Generic
        } else if PRIMITIVES.contains(&type_name) {
            Self::Primitive
        } else {
            Self::Reference
        }
    }

    /// Whether members of this kind participate in builder/field generation.
    ///
    /// Primitive and reference members are included; array and generic
    /// members are silently excluded. This is applied as a filter on every
    /// member, never assumed universal.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Primitive | Self::Reference)
    }
}

/// One member field of an annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    /// Field name as declared.
    pub name: String,
    /// Semantic type classification.
    pub kind: MemberKind,
    /// Declared type name, verbatim (`String`, `int`, `List<String>`).
    pub type_name: String,
}

impl MemberDescriptor {
    /// Create a member, classifying its kind from the declared type name.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            name: name.into(),
            kind: MemberKind::classify(&type_name),
            type_name,
        }
    }
}

/// Read-only shape of one annotated declaration.
///
/// Invariant: member names are unique within one descriptor. Manifest
/// parsing enforces this (duplicate TOML keys are a parse error);
/// programmatic construction is expected to uphold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Simple name of the declaration (`CarroBuilder`).
    pub name: String,
    /// Enclosing namespace as a dotted path (`br.me.patterns.model`).
    pub namespace: String,
    /// Members in exact declaration order.
    pub members: Vec<MemberDescriptor>,
    /// Whether the declaration has a reachable no-argument constructor.
    pub has_no_arg_constructor: bool,
}

impl TypeDescriptor {
    /// Create a descriptor with no members and a no-argument constructor.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            members: Vec::new(),
            has_no_arg_constructor: true,
        }
    }

    /// Append a member, preserving declaration order.
    pub fn member(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.members.push(MemberDescriptor::new(name, type_name));
        self
    }

    /// Mark the declaration as lacking a no-argument constructor.
    pub fn without_no_arg_constructor(mut self) -> Self {
        self.has_no_arg_constructor = false;
        self
    }

    /// Fully qualified name (`namespace.Name`).
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

/// Which pattern annotation a declaration carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Fluent builder plus a plain built value type.
    Builder,
    /// Wrapper restricting construction to one reused instance.
    Singleton,
}

/// Initialization policy for the generated singleton's instance slot.
///
/// The policy is explicit configuration, not an implicit property of the
/// emitted template. The default [`InitPolicy::Lazy`] is an unsynchronized
/// check-then-act, race window included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitPolicy {
    /// Unsynchronized lazy initialization. Not safe under concurrent
    /// first access.
    #[default]
    Lazy,
    /// Lazy initialization behind a synchronized accessor.
    Synchronized,
    /// Instance constructed at class-initialization time.
    Eager,
}

/// One annotated declaration routed through the dispatcher: the descriptor
/// plus its pattern marker and configuration.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub descriptor: TypeDescriptor,
    pub pattern: PatternKind,
    pub init: InitPolicy,
}

impl Declaration {
    /// Annotate a descriptor with a pattern, using the default init policy.
    pub fn new(descriptor: TypeDescriptor, pattern: PatternKind) -> Self {
        Self {
            descriptor,
            pattern,
            init: InitPolicy::default(),
        }
    }

    /// Override the singleton initialization policy.
    pub fn with_init(mut self, init: InitPolicy) -> Self {
        self.init = init;
        self
    }
}
