use anyhow::{bail, Result};
use itertools::Itertools;
use log::debug;
use std::io::Write;

use crate::command::{Command, CommandTable};
use crate::config::Config;
use crate::decimal;
use crate::error::ConfigError;
use crate::operation::OperationTable;
use crate::session::{Phase, Session};

pub const INTRO: &str = "Calculator v. 1.0";
pub const DELIMITER: &str = "------------------------------------------------------------------------";
pub const OPERAND_PROMPT: &str = "Enter decimal number or application command: ";
pub const OPERATION_PROMPT: &str = "Enter operation alias or application command: ";
pub const INVALID_VALUE: &str = "This is not a valid value. Type \"help\" if you need to see command list.";
pub const ANSWER_PREFIX: &str = ">>  answer is:  ";

/// Whether the console loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Configuration, operation and command tables, and the help text built from them.
pub struct Calculator {
    config: Config,
    operations: OperationTable,
    commands: CommandTable,
    help: String,
}

fn help_text(operations: &OperationTable, commands: &CommandTable) -> String {
    fn or_placeholder(listing: String) -> String {
        if listing.is_empty() { String::from("---") } else { listing }
    }
    let commands = or_placeholder(commands.iter().map(|command| format!("  {}", command.alias())).join("\n"));
    let operations = or_placeholder(
        operations
            .all_aliases()
            .into_iter()
            .map(|(alias, name)| format!("  {:<2} {}", alias, name))
            .join("\n"),
    );
    format!(
        "{d}\nAvailable commands:\n{commands}\n\nAvailable operations:\n{operations}\n{d}\n",
        d = DELIMITER
    )
}

impl Calculator {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_tables(config, OperationTable::builtin()?, CommandTable::builtin()?)
    }

    pub fn with_tables(config: Config, operations: OperationTable, commands: CommandTable) -> Result<Self, ConfigError> {
        config.validate()?;
        // A command shadowing an operation would make the operation unreachable
        if let Some(clash) = commands.iter().find(|command| operations.lookup(command.alias()).is_some()) {
            return Err(ConfigError::AmbiguousAlias { alias: clash.alias().to_string() });
        }
        let help = help_text(&operations, &commands);
        Ok(Calculator { config, operations, commands, help })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn help_text(&self) -> &str {
        &self.help
    }

    pub fn prompt(&self, session: &Session) -> &'static str {
        match session.phase() {
            Phase::AwaitOperation => OPERATION_PROMPT,
            _ => OPERAND_PROMPT,
        }
    }

    pub fn show_intro<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", INTRO)?;
        self.show_help(out)
    }

    pub fn show_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.help)?;
        Ok(())
    }

    fn show_invalid_value<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", INVALID_VALUE)?;
        writeln!(out)?;
        Ok(())
    }

    // Leaves the session waiting for input again unless it returns `Flow::Exit`
    pub fn handle_line<W: Write>(&self, session: &mut Session, line: &str, out: &mut W) -> Result<Flow> {
        self.settle(session, out)?;
        let input = line.trim();

        if let Some(&command) = self.commands.lookup(input) {
            return self.execute_command(command, session, out);
        }

        match session.phase() {
            Phase::AwaitOperand1 | Phase::AwaitOperand2 => match decimal::parse_decimal(input) {
                Ok(value) => {
                    session.accept_operand(value);
                }
                Err(e) => {
                    debug!("rejected operand {:?}: {}", input, e);
                    self.show_invalid_value(out)?;
                }
            },
            Phase::AwaitOperation => match self.operations.lookup(input) {
                Some(&op) => {
                    session.accept_operation(op);
                }
                None => {
                    debug!("no operation with alias {:?}", input);
                    self.show_invalid_value(out)?;
                }
            },
            phase => bail!("session cannot take input in the {:?} phase", phase),
        }

        self.settle(session, out)?;
        Ok(Flow::Continue)
    }

    fn execute_command<W: Write>(&self, command: Command, session: &mut Session, out: &mut W) -> Result<Flow> {
        debug!("executing command {}", command.alias());
        match command {
            Command::Help => self.show_help(out)?,
            Command::Reset => {
                session.reset();
                writeln!(out)?;
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    // Runs the phases that need no input (compute, then show the answer) until input is needed again
    fn settle<W: Write>(&self, session: &mut Session, out: &mut W) -> Result<()> {
        loop {
            match session.phase() {
                Phase::Compute => {
                    if let Err(e) = session.calculate(self.config.division_precision) {
                        writeln!(out, "Sorry, {}", e)?;
                        writeln!(out)?;
                    }
                }
                Phase::ShowAnswer => {
                    if let Some(answer) = session.release_answer() {
                        writeln!(out, "{}{}", ANSWER_PREFIX, decimal::to_plain_string(answer))?;
                    }
                }
                _ => return Ok(()),
            }
        }
    }
}
