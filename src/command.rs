use crate::error::ConfigError;
use crate::table::{Aliased, AliasTable};

/// Application commands, accepted wherever an operand or operation is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Reset,
    Exit,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Help, Command::Reset, Command::Exit];

    pub fn alias(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Reset => "reset",
            Command::Exit => "exit",
        }
    }
}

impl Aliased for Command {
    fn alias(&self) -> &str {
        Command::alias(self)
    }
}

pub type CommandTable = AliasTable<Command>;

impl AliasTable<Command> {
    pub fn builtin() -> Result<Self, ConfigError> {
        AliasTable::new("command", Command::ALL)
    }
}
