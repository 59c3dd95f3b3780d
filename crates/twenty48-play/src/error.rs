//! Text protocol errors.

use twenty48_core::{BoardError, ParseError};

/// Errors that can occur while parsing or running a protocol command.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// A command that needs arguments was given none or too few.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that was short of arguments.
        command: String,
    },

    /// An argument could not be parsed.
    #[error("invalid {param}: {value}")]
    InvalidArgument {
        /// What the argument was meant to be.
        param: String,
        /// The token that failed to parse.
        value: String,
    },

    /// `set` named a setting that does not exist.
    #[error("unknown setting: {name}")]
    UnknownSetting {
        /// The unrecognized setting name.
        name: String,
    },

    /// A board or direction failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A checked board operation was rejected.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
