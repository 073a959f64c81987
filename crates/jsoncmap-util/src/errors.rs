use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all jsoncmap operations.
#[derive(Debug, Error, Diagnostic)]
pub enum JsoncmapError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not valid JSON after JSONC preprocessing.
    #[error("JSON syntax error: {message}")]
    #[diagnostic(help(
        "Comments and trailing commas are stripped before parsing; the remaining text must be valid JSON"
    ))]
    Syntax { message: String },

    /// Invalid or incomplete publish configuration (e.g. publish.jsonc).
    #[error("Publish configuration error: {message}")]
    #[diagnostic(help("Check your publish.jsonc and .publish.env"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type JsoncmapResult<T> = miette::Result<T>;
