use snafu::{Snafu, ensure};

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Cd { path: String },
    Ls,
    Pwd,
    Tree,
    Touch { name: String },
    Mkdir { name: String },
    Rm { name: String },
    Rmdir { name: String },
    Mv { src: String, dest: String },
    Help,
    Exit,
}

impl Command {
    /// Parses a non-empty line into a command. Tokens are split on
    /// whitespace; every command has a fixed arity.
    pub fn parse(line: &str) -> Result<Command, CommandParseError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(CommandParseError::EmptyLine)?;
        let args: Vec<&str> = tokens.collect();

        let command = match verb {
            "cd" => Command::Cd {
                path: single_arg(verb, &args)?,
            },
            "ls" => no_args(verb, &args, Command::Ls)?,
            "pwd" => no_args(verb, &args, Command::Pwd)?,
            "tree" => no_args(verb, &args, Command::Tree)?,
            "touch" => Command::Touch {
                name: single_arg(verb, &args)?,
            },
            "mkdir" => Command::Mkdir {
                name: single_arg(verb, &args)?,
            },
            "rm" => Command::Rm {
                name: single_arg(verb, &args)?,
            },
            "rmdir" => Command::Rmdir {
                name: single_arg(verb, &args)?,
            },
            "mv" => {
                ensure!(
                    args.len() == 2,
                    WrongArgumentCountSnafu {
                        command: verb,
                        expected: 2usize,
                        got: args.len(),
                    }
                );
                Command::Mv {
                    src: args[0].to_string(),
                    dest: args[1].to_string(),
                }
            }
            "help" => no_args(verb, &args, Command::Help)?,
            "exit" | "quit" => no_args(verb, &args, Command::Exit)?,
            other => {
                return UnknownCommandSnafu { command: other }.fail();
            }
        };
        Ok(command)
    }
}

fn single_arg(verb: &str, args: &[&str]) -> Result<String, CommandParseError> {
    ensure!(
        args.len() == 1,
        WrongArgumentCountSnafu {
            command: verb,
            expected: 1usize,
            got: args.len(),
        }
    );
    Ok(args[0].to_string())
}

fn no_args(verb: &str, args: &[&str], command: Command) -> Result<Command, CommandParseError> {
    ensure!(
        args.is_empty(),
        WrongArgumentCountSnafu {
            command: verb,
            expected: 0usize,
            got: args.len(),
        }
    );
    Ok(command)
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CommandParseError {
    #[snafu(display("empty command line"))]
    EmptyLine,
    #[snafu(display("unknown command '{command}' (try 'help')"))]
    UnknownCommand { command: String },
    #[snafu(display("'{command}' expects {expected} argument(s), got {got}"))]
    WrongArgumentCount {
        command: String,
        expected: usize,
        got: usize,
    },
}
