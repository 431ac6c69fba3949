//! Thin interactive collaborator around the directory tree.
//!
//! The shell turns user text into calls on [`crate::fs::DirTree`]: one
//! command per tree operation, plus the line-splitting that the core
//! deliberately does not do (multi-segment `cd` paths).

mod command;
mod shell;

pub use command::{Command, CommandParseError};
pub use shell::{Outcome, Shell, ShellError};
