use jdecl_common::SourceLocation;

/// Error returned when a type's declaration cannot be synthesized.
///
/// Only the offending type is abandoned; other types in a batch still emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// The input model breaks a rule the front end must uphold.
    InvariantViolation {
        type_name: String,
        location: SourceLocation,
        message: String,
    },
}

impl EmitError {
    pub fn invariant(type_name: &str, location: &SourceLocation, message: impl Into<String>) -> Self {
        EmitError::InvariantViolation {
            type_name: type_name.to_string(),
            location: location.clone(),
            message: message.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            EmitError::InvariantViolation { type_name, .. } => type_name,
        }
    }
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitError::InvariantViolation {
                type_name,
                location,
                message,
            } => write!(f, "{location}: invariant violated in {type_name}: {message}"),
        }
    }
}

impl std::error::Error for EmitError {}
