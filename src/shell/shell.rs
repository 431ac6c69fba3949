use std::fmt::Display;
use std::io::{self, Cursor, Write};
use std::path::Path;

use colored::Colorize;
use compio::{fs::File, io::AsyncReadExt, io::BufReader};
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::fs::{DirTree, FsError};
use crate::shell::command::{Command, CommandParseError};

const HELP: &str = "\
cd <path>        change the current directory (.., ., /, ~ and a/b/c work)
ls               list the current directory
pwd              print the current directory path
tree             print the subtree below the current directory
touch <name>     create an empty file
mkdir <name>     create an empty directory
rm <name>        remove a file
rmdir <name>     remove an empty directory
mv <src> <dest>  move into an existing directory (or ..), or rename
help             show this help
exit             leave the shell";

/// What a single executed command produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Directory entries (`ls`, `tree`); highlighted when printed.
    Entries(String),
    /// Plain text (`pwd`, `help`).
    Output(String),
    Quiet,
    Exit,
}

/// Interactive front over a [`DirTree`].
pub struct Shell {
    tree: DirTree,
    colorize: bool,
}

impl Shell {
    pub fn new(tree: DirTree) -> Self {
        let colorize = supports_color::on(supports_color::Stream::Stdout).is_some();
        Shell { tree, colorize }
    }

    pub fn tree(&self) -> &DirTree {
        &self.tree
    }

    /// Prompt loop: read a line, parse, execute, print. Parse and tree
    /// errors are reported and the loop continues; EOF or `exit` ends it.
    pub fn run_interactive(&mut self) -> Result<(), ShellError> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            self.print_prompt()?;
            line.clear();
            let read = stdin.read_line(&mut line).context(PromptIoSnafu)?;
            if read == 0 {
                // EOF
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Command::parse(trimmed) {
                Ok(command) => match self.execute(&command) {
                    Ok(Outcome::Exit) => break,
                    Ok(outcome) => self.print_outcome(outcome),
                    Err(error) => self.print_error(&error),
                },
                Err(error) => self.print_error(&error),
            }
        }
        Ok(())
    }

    /// Executes a command file line by line. Blank lines and `#` comments
    /// are skipped; the first failing line aborts the run with its line
    /// number, and `exit` stops the script early.
    pub async fn run_script(&mut self, path: &Path) -> Result<(), ShellError> {
        debug!("Opening script file: {}", path.display());
        let file = File::open(path).await.context(OpenScriptSnafu {
            path: path.display().to_string(),
        })?;

        debug!("Reading script file");
        let cursor = Cursor::new(file);
        let mut reader = BufReader::new(cursor);
        let res = reader.read_to_string(String::new()).await;
        match res.0 {
            Ok(n) => debug!("Successfully read script file: {n} bytes"),
            _ => {
                res.0.context(ReadScriptSnafu {
                    path: path.display().to_string(),
                })?;
            }
        }

        for (index, raw) in res.1.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let command =
                Command::parse(line).context(ScriptParseSnafu { line: line_number })?;
            match self
                .execute(&command)
                .context(ScriptCommandSnafu { line: line_number })?
            {
                Outcome::Exit => {
                    debug!("Script requested exit at line {}", line_number);
                    break;
                }
                outcome => self.print_outcome(outcome),
            }
        }
        Ok(())
    }

    /// Runs one command against the tree.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, FsError> {
        match command {
            Command::Cd { path } => {
                self.cd_path(path)?;
                Ok(Outcome::Quiet)
            }
            Command::Ls => Ok(Outcome::Entries(self.tree.ls())),
            Command::Pwd => Ok(Outcome::Output(self.tree.pwd())),
            Command::Tree => Ok(Outcome::Entries(self.tree.tree())),
            Command::Touch { name } => self.tree.touch(name).map(|()| Outcome::Quiet),
            Command::Mkdir { name } => self.tree.mkdir(name).map(|()| Outcome::Quiet),
            Command::Rm { name } => self.tree.rm(name).map(|()| Outcome::Quiet),
            Command::Rmdir { name } => self.tree.rmdir(name).map(|()| Outcome::Quiet),
            Command::Mv { src, dest } => self.tree.mv(src, dest).map(|()| Outcome::Quiet),
            Command::Help => Ok(Outcome::Output(HELP.to_string())),
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    /// Multi-segment `cd`: the core resolves one token at a time, so the
    /// shell splits on `/` (a leading `/` meaning "from root") and replays
    /// the segments, restoring the saved cursor if any of them fails.
    fn cd_path(&mut self, path: &str) -> Result<(), FsError> {
        let saved = self.tree.cursor_id();
        let result = self.cd_segments(path);
        if result.is_err() {
            self.tree.restore_cursor(saved);
        }
        result
    }

    fn cd_segments(&mut self, path: &str) -> Result<(), FsError> {
        if matches!(path, "/" | "~" | "." | "..") {
            return self.tree.cd(path);
        }
        let rest = match path.strip_prefix('/') {
            Some(rest) => {
                self.tree.cd("/")?;
                rest
            }
            None => path,
        };
        for segment in rest.split('/').filter(|s| !s.is_empty()) {
            self.tree.cd(segment)?;
        }
        Ok(())
    }

    fn print_prompt(&self) -> Result<(), ShellError> {
        let pwd = self.tree.pwd();
        if self.colorize {
            print!("{} $ ", pwd.cyan());
        } else {
            print!("{pwd} $ ");
        }
        io::stdout().flush().context(PromptIoSnafu)
    }

    fn print_outcome(&self, outcome: Outcome) {
        match outcome {
            Outcome::Entries(text) if !text.is_empty() => {
                println!("{}", self.highlight_entries(&text));
            }
            Outcome::Output(text) => println!("{text}"),
            _ => {}
        }
    }

    fn print_error(&self, error: &impl Display) {
        if self.colorize {
            eprintln!("{}", error.to_string().red());
        } else {
            eprintln!("{error}");
        }
    }

    fn highlight_entries(&self, text: &str) -> String {
        if !self.colorize {
            return text.to_string();
        }
        text.lines()
            .map(|line| {
                if line.ends_with('/') {
                    line.blue().bold().to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Snafu)]
pub enum ShellError {
    #[snafu(display("Failed to open script file: {path}"))]
    OpenScriptError {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read script file: {path}"))]
    ReadScriptError {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read from the prompt"))]
    PromptIoError { source: std::io::Error },
    #[snafu(display("Script line {line} could not be parsed"))]
    ScriptParseError {
        line: usize,
        source: CommandParseError,
    },
    #[snafu(display("Script line {line} failed"))]
    ScriptCommandError { line: usize, source: FsError },
}
