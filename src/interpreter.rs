use crate::assignment::Assignment;
use crate::command::{Command, Flow};
use crate::env::Environment;
use crate::error::Result;
use crate::evaluator::evaluate_postfix;
use crate::parser::to_postfix;
use num_bigint::BigInt;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;

pub const GREETING: &str = "Enter your expression.  Type /help for help or /exit to quit:";
pub const FAREWELL: &str = "Exiting calculator";

/// An integer calculator with its own variable bindings.
///
/// Lines without `=` are expressions; lines with `=` are assignments.
///
/// Example
/// ```
/// use int_calculator::Calculator;
/// let mut calc = Calculator::new();
/// calc.assign("a = 5").unwrap();
/// calc.assign("b = a").unwrap();
/// assert_eq!(calc.evaluate("a + b").unwrap().to_string(), "10");
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    env: Environment,
}

impl Calculator {
    /// Create a calculator with no variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator that starts from existing bindings.
    pub fn with_environment(env: Environment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Evaluate an expression line (one that contains no `=`).
    pub fn evaluate(&self, line: &str) -> Result<BigInt> {
        let postfix = to_postfix(line)?;
        evaluate_postfix(postfix, |name| self.env.lookup(name))
    }

    /// Parse and apply an assignment line. On failure the bindings are untouched.
    pub fn assign(&mut self, line: &str) -> Result<()> {
        Assignment::parse(line, &self.env)?.commit(&mut self.env);
        Ok(())
    }

    /// Route a line to [`Calculator::assign`] or [`Calculator::evaluate`].
    ///
    /// Returns the value of an expression, or `None` for an assignment.
    pub fn process(&mut self, line: &str) -> Result<Option<BigInt>> {
        if line.contains('=') {
            self.assign(line).map(|()| None)
        } else {
            self.evaluate(line).map(Some)
        }
    }

    /// Handle one line of interactive input, writing any response to `stdout`.
    ///
    /// Calculation errors are written as messages and never end the session.
    pub fn execute_line(&mut self, line: &str, stdout: &mut dyn Write) -> anyhow::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if let Some(command) = Command::parse(line) {
            return command.execute(stdout);
        }

        match self.process(line) {
            Ok(Some(value)) => writeln!(stdout, "{value}")?,
            Ok(None) => {}
            Err(err) => writeln!(stdout, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    /// Read-Eval-Print Loop over the terminal.
    pub fn repl(&mut self, quiet: bool) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = std::io::stdout();

        if !quiet {
            println!("{GREETING}");
        }

        loop {
            match rl.readline("") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    if self.execute_line(&line, &mut stdout)? == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        if !quiet {
            println!("{FAREWELL}");
        }
        Ok(())
    }
}
