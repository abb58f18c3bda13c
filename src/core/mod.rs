//! Core module - application infrastructure for the terminal front end
//!
//! - `error` - [`CoreError`] and the [`CoreResult`] alias
//! - `logging` - tracing subscriber setup shared by the binaries

pub mod error;
pub mod logging;

pub use error::{CoreError, CoreResult};
pub use logging::init_tracing;
