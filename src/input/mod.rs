//! Input module - turns console lines into engine requests
//!
//! - `command` - [`Command`] and its line parser

pub mod command;

pub use command::{parse_command, Command, CommandError};
