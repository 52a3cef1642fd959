//! Line-oriented front-end driving a [`StrategyBuilder`].
//!
//! Each input line is one command. Results go to the output stream; problems
//! with a line are reported there too and never end the session.

use log::{debug, info};
use std::io::{BufRead, Write};

use crate::error::{self, CommandError};
use crate::view;
use crate::StrategyBuilder;

pub const HELP: &str = "\
Commands:
  pools                 list the pools available for allocation
  name <text>           set the strategy name
  set <pool> <amount>   allocate a USD amount to a pool (0 or invalid clears it)
  show                  show the current draft
  save                  save the draft as a strategy
  list                  list saved strategies
  help                  show this message
  quit                  end the session
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Pools,
    Name(String),
    Set { pool_id: String, amount: String },
    Show,
    Save,
    List,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "pools" => Command::Pools,
            "name" => Command::Name(rest.to_string()),
            "set" => {
                let mut parts = rest.split_whitespace();
                let pool_id = parts
                    .next()
                    .ok_or(CommandError::MissingArgument("set <pool> <amount>"))?;
                // The amount text is passed through as typed; the engine decides what it means.
                let amount = parts.collect::<Vec<_>>().join(" ");
                Command::Set {
                    pool_id: pool_id.to_string(),
                    amount,
                }
            }
            "show" => Command::Show,
            "save" => Command::Save,
            "list" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

pub struct Session<W: Write> {
    builder: StrategyBuilder,
    output: W,
}

impl<W: Write> Session<W> {
    pub fn new(builder: StrategyBuilder, output: W) -> Self {
        Self { builder, output }
    }

    /// Executes one command. Returns `false` when the session should end.
    pub fn execute(&mut self, command: Command) -> std::io::Result<bool> {
        debug!("Executing {:?}", command);
        match command {
            Command::Pools => {
                let rows = self.builder.pool_rows();
                write!(self.output, "{}", view::render_pool_rows(&rows))?;
            }
            Command::Name(name) => {
                self.builder.set_name(name);
            }
            Command::Set { pool_id, amount } => {
                self.builder.set_allocation(pool_id.as_str(), &amount);
                let summary = self.builder.get_summary();
                writeln!(
                    self.output,
                    "Total Value: {}  Expected Yield: {}",
                    view::format_currency(summary.total_value),
                    view::format_percentage(summary.weighted_yield)
                )?;
            }
            Command::Show => {
                write!(self.output, "{}", view::render_draft(&self.builder))?;
            }
            Command::Save => {
                let index = self.builder.get_store().len();
                let saved = self.builder.commit().cloned();
                match saved {
                    Some(saved) => write!(
                        self.output,
                        "Saved:\n{}",
                        view::render_strategy(&self.builder, index, &saved)
                    )?,
                    None => writeln!(
                        self.output,
                        "Nothing saved: a strategy needs a name and at least one allocation."
                    )?,
                }
            }
            Command::List => {
                write!(self.output, "{}", view::render_saved(&self.builder))?;
            }
            Command::Help => {
                write!(self.output, "{}", HELP)?;
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> error::Result<()> {
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.execute(command)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(self.output, "{}", e)?,
            }
            self.output.flush()?;
        }
        info!(
            "Session ended with {} saved strategies",
            self.builder.get_store().len()
        );
        Ok(())
    }

    pub fn into_parts(self) -> (StrategyBuilder, W) {
        (self.builder, self.output)
    }
}
