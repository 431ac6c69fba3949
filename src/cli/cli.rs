use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Interactive shell over an in-memory directory tree")]
pub struct Cli {
    /// Start from a named preset layout instead of an empty root
    #[clap(long, short)]
    pub preset: Option<String>,

    /// Run commands from a script file instead of the interactive prompt
    #[clap(long, short)]
    pub script: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
