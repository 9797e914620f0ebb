use thiserror::Error;

/// Which allele of a variant failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlleleRole {
    Reference,
    Alternate,
}

impl std::fmt::Display for AlleleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlleleRole::Reference => write!(f, "reference"),
            AlleleRole::Alternate => write!(f, "alternate"),
        }
    }
}

/// Errors raised while generating or parsing variant identifiers.
///
/// The first four variants come from normalization (generation time), the
/// last three from decoding an identifier string. Every variant carries the
/// offending input and the rule it broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VrsError {
    #[error("Invalid chromosome '{input}': {reason}")]
    InvalidChromosome { input: String, reason: String },

    #[error("Invalid position '{input}': {reason}")]
    InvalidPosition { input: String, reason: String },

    #[error("Invalid {role} allele '{input}': {reason}")]
    InvalidAllele {
        role: AlleleRole,
        input: String,
        reason: String,
    },

    #[error("Unknown assembly '{0}'. Use a canonical name such as GRCh38 or GRCh37")]
    UnknownAssembly(String),

    #[error("Malformed identifier '{input}': {reason}")]
    MalformedIdentifier { input: String, reason: String },

    #[error("Unsupported variant type '{type_field}' in identifier '{input}'")]
    UnsupportedType { input: String, type_field: String },

    #[error("Malformed digest '{digest}' in identifier '{input}': {reason}")]
    MalformedDigest {
        input: String,
        digest: String,
        reason: String,
    },
}

/// Result type alias for aiva-vrs operations.
pub type Result<T> = std::result::Result<T, VrsError>;
