use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored role value is neither `ADMIN` nor `USER`.
    ///
    /// Surfaces as a repository failure and results in a 500 Internal Server Error.
    #[error("Unknown account role '{0}'")]
    UnknownRole(String),

    /// The password hasher rejected its salt or parameters.
    ///
    /// Results in a 500 Internal Server Error.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}
