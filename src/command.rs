use anyhow::Result;
use std::io::Write;

/// Whether the interactive loop keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Shell commands, written with a leading `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/exit`: leave the calculator.
    Exit,
    /// `/help`: print usage.
    Help,
    /// Any other `/...` line.
    Unknown(String),
}

pub const HELP: &str = "\
This is a command-line calculator that will evaluate an expression you enter.  It is
limited to integers, but they can be arbitrarily large.  Operators are limited to
addition (+), subtraction (-), multiplication (*), division(/), and exponentiation (^).
The normal precedence of operator is enforced and parentheses can override this.  Errors
are displayed for malformed expressions.  Variables can be set to hold values (but not
expressions).  Identifiers are made of upper and lowercase Latin character.  Using
variables looks like this:

a = 12
b = 4
a + b

Type /exit to quit the program and /help to see this message.";

impl Command {
    /// Recognize a command line. Lines not starting with `/` are not commands.
    pub fn parse(line: &str) -> Option<Self> {
        let name = line.trim().strip_prefix('/')?;
        Some(match name {
            "exit" => Command::Exit,
            "help" => Command::Help,
            other => Command::Unknown(other.to_string()),
        })
    }

    pub fn execute(&self, stdout: &mut dyn Write) -> Result<Flow> {
        match self {
            Command::Exit => Ok(Flow::Exit),
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                Ok(Flow::Continue)
            }
            Command::Unknown(_) => {
                writeln!(stdout, "Unknown Command")?;
                Ok(Flow::Continue)
            }
        }
    }
}
