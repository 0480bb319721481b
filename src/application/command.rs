use crate::domain::menu::Drink;
use crate::error::Result;

/// A line typed at the "What would you like?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Off,
    Report,
    Order(Drink),
}

impl Command {
    /// Drops the line terminator, lower-cases the rest and maps it to a command.
    ///
    /// Other whitespace is kept, so `" espresso"` is not a drink.
    ///
    /// Unrecognized text yields `MachineError::InvalidChoice`.
    pub fn parse(input: &str) -> Result<Self> {
        let choice = input.trim_end_matches(['\r', '\n']).to_lowercase();
        match choice.as_str() {
            "off" => Ok(Command::Off),
            "report" => Ok(Command::Report),
            other => other.parse().map(Command::Order),
        }
    }
}
