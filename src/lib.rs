//! FlowCLI: command-line task and project tracker.
//!
//! This crate holds the presentation layer shared by every command: the
//! semantic color palette in [`utils::colors`] and the user-facing error
//! types in [`errors`].

pub mod cli;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{FlowCliError, MissingArgument};
pub use utils::colors::{set_colors_enabled, ColorScheme, Colors, Role};
