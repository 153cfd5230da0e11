use thiserror::Error;

/// Result type for naming configuration operations
pub type Result<T> = std::result::Result<T, NamingError>;

/// Errors raised while loading naming configuration.
///
/// The naming helpers themselves never fail; only configuration does.
#[derive(Error, Debug)]
pub enum NamingError {
    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for `NamingConfig`
    #[error("Invalid naming config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Acronym is empty or not uppercase ASCII alphanumeric
    #[error("Invalid acronym: {0:?}")]
    InvalidAcronym(String),
}

impl NamingError {
    pub fn invalid_acronym(acronym: impl Into<String>) -> Self {
        Self::InvalidAcronym(acronym.into())
    }
}
