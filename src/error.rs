//! Error types for Record Desk
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Name or age was left empty on submission
    #[snafu(display("Please fill all required fields"))]
    MissingRequired,

    /// Age parsed but below zero
    #[snafu(display("Age cannot be negative (got {age})"))]
    NegativeAge { age: i64 },

    /// Age text is not a whole number
    #[snafu(display("Age must be a whole number (got {input:?})"))]
    InvalidAge { input: String },

    /// Row action target no longer exists in the store
    #[snafu(display("Record not found: {target}"))]
    RecordNotFound { target: String },

    /// Invalid input or environment
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (settings and log files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Translation key of the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            Error::MissingRequired => "errors.missing_required",
            Error::NegativeAge { .. } => "errors.negative_age",
            Error::InvalidAge { .. } => "errors.invalid_age",
            Error::RecordNotFound { .. } => "errors.record_not_found",
            Error::Invalid { .. } | Error::Io { .. } | Error::TomlDe { .. } | Error::TomlSe { .. } => {
                "errors.unexpected"
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_alert_text() {
        assert_eq!(Error::MissingRequired.to_string(), "Please fill all required fields");
        assert_eq!(
            Error::NegativeAge { age: -4 }.to_string(),
            "Age cannot be negative (got -4)"
        );
    }
}
