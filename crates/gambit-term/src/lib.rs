//! Terminal shell for gambit.
//!
//! Squares typed at the prompt are fed to the game exactly like board clicks;
//! the board is redrawn as text after every change.

pub mod command;
pub mod config;
pub mod render;
pub mod shell;

pub use command::ShellCommand;
pub use config::{ConfigError, Glyphs, ShellConfig};
pub use shell::{Flow, Shell, ShellError};
