use thiserror::Error;

/// How a failed action is surfaced to the user. Neither level ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Error)]
pub enum RiscError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("'{0}' is already in the contaminant list")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Chemical '{0}' is not in the degradation table")]
    Lookup(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),
}

impl RiscError {
    /// Input problems are warnings; I/O and table or config faults are errors.
    pub fn severity(&self) -> Severity {
        match self {
            RiscError::Validation(_) | RiscError::Duplicate(_) | RiscError::NotFound(_) => {
                Severity::Warning
            }
            RiscError::Lookup(_)
            | RiscError::FileIO(..)
            | RiscError::ConfigError(_)
            | RiscError::YamlParsing(..) => Severity::Error,
        }
    }
}
