use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::fs::DirTree;
use crate::presets::{self, PresetError};
use crate::shell::{Shell, ShellError};

pub struct Application;

impl Application {
    pub async fn run(config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let config: RuntimeConfig = config.into();

        let tree = match &config.preset {
            Some(name) => presets::build_preset(name).context(PresetSnafu)?,
            None => DirTree::new(),
        };
        debug!("Starting tree:\n{}", tree.tree());

        let mut shell = Shell::new(tree);
        match &config.script {
            Some(path) => shell.run_script(path).await.context(ScriptSnafu)?,
            None => shell.run_interactive().context(InteractiveSnafu)?,
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure while building the starting tree"))]
    PresetError { source: PresetError },
    #[snafu(display("Critical failure while running the script"))]
    ScriptError { source: ShellError },
    #[snafu(display("Critical failure in the interactive shell"))]
    InteractiveError { source: ShellError },
}
