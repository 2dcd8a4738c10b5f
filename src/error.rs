//! Error types for the text-to-file pipeline.
//!
//! Every variant is terminal. The CLI maps all of them to exit status 1 and
//! tells them apart only by the message it prints.

use std::string::FromUtf8Error;

/// Failure while reversing the base64 transport encoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The argument is not valid standard base64.
    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not UTF-8 text.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Top-level error for a single invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong argument count or an unparseable option. The rendered message
    /// already carries the usage line.
    #[error(transparent)]
    Argument(#[from] clap::Error),
    /// The encoded variant could not recover text from its argument.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The synthesis collaborator failed.
    #[error("{0:#}")]
    Synthesis(anyhow::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
