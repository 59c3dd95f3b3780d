//! Text protocol driver for twenty48.

pub mod command;
pub mod error;
pub mod session;

pub use command::{parse_command, Command, Setting};
pub use error::PlayError;
pub use session::{Session, SessionConfig};
