use thiserror::Error;

/// Error type for Shamir's Secret Sharing operations
#[derive(Error, Debug)]
pub enum SssError {
    /// Invalid split parameters (minimum and shares must be >= 1, minimum <= shares)
    #[error("Invalid parameters: minimum {minimum}, shares {shares}")]
    InvalidParameters { minimum: usize, shares: usize },

    /// The secret to split is empty
    #[error("Secret must not be empty")]
    EmptySecret,

    /// No shares were supplied for reconstruction
    #[error("Share list must not be empty")]
    EmptyShareList,

    /// Share text has a bad length, bad alphabet, or an inconsistent chunk count
    #[error("Malformed share: {0}")]
    MalformedShare(String),

    /// A decoded field element lies outside the open interval (0, P), or a
    /// secret chunk window parses to a value >= P
    #[error("Decoded value outside the valid field range")]
    OutOfRangeValue,

    /// Field arithmetic failed (non-invertible denominator, exhausted random draws)
    #[error("Arithmetic failure: {0}")]
    ArithmeticFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SssError>;
