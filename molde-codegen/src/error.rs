use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error: the builder pattern requires the literal
    /// `Builder` token somewhere in the annotated type's name.
    #[error("type '{type_name}' does not contain the 'Builder' pattern token")]
    MissingPatternToken { type_name: String },

    /// Configuration error: truncating at the pattern token left nothing
    /// to name the built type with.
    #[error("type '{type_name}' has no name left of the 'Builder' pattern token")]
    EmptyBuiltName { type_name: String },

    /// Configuration error: the singleton pattern constructs the wrapped
    /// type through its no-argument constructor.
    #[error("type '{type_name}' has no reachable no-argument constructor")]
    NoDefaultConstructor { type_name: String },

    /// The emission sink could not persist an artifact.
    #[error("failed to emit '{artifact}'")]
    Emit {
        artifact: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this is a configuration error (the annotated declaration
    /// lacks the required shape) as opposed to an emission failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingPatternToken { .. }
                | Self::EmptyBuiltName { .. }
                | Self::NoDefaultConstructor { .. }
        )
    }
}
