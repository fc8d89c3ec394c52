//! Error types for Strata token lookups

use thiserror::Error;

/// Main error type for token resolution, audits and string-keyed lookups
#[derive(Error, Debug)]
pub enum TokenError {
    /// Rendering mode name did not parse
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// Status name did not parse
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// Icon name is not part of the icon set
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    /// Icon library name did not parse
    #[error("Unknown icon library: {0}")]
    UnknownIconLibrary(String),

    /// Illustration name is not part of the illustration set
    #[error("Unknown illustration: {0}")]
    UnknownIllustration(String),

    /// Data-table density level did not parse
    #[error("Unknown density level: {0}")]
    UnknownDensity(String),

    /// Chart palette name did not parse
    #[error("Unknown chart palette: {0}")]
    UnknownPalette(String),

    /// Interaction state name did not parse
    #[error("Unknown interaction state: {0}")]
    UnknownState(String),

    /// A closed-set value (control size, dock zone) did not parse
    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },

    /// Dotted token path does not exist in the resolved set
    #[error("Unknown token path: {0}")]
    UnknownToken(String),

    /// A token above the base tier does not trace back to a base value
    #[error("Untraceable token {path} = {value}")]
    Untraceable { path: String, value: String },

    /// A patch sets a leaf whose kind differs from the baseline
    #[error("Shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// Theme configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using TokenError
pub type TokenResult<T> = Result<T, TokenError>;
