use crate::application::command::Command;
use crate::application::machine::CoffeeMachine;
use crate::domain::menu::Drink;
use crate::domain::money::{Coin, CoinCounts, Money};
use crate::error::{MachineError, Result};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

pub const ORDER_PROMPT: &str = "What would you like? (espresso/latte/cappuccino): ";

/// Whether the console keeps asking for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// Text front panel of the machine.
///
/// Reads one command per line from any `BufRead` (stdin, a byte slice in tests)
/// and writes prompts and messages to any `Write`. Customer mistakes are
/// answered with a message and never end the session; only I/O failures are
/// returned as errors.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    machine: CoffeeMachine,
    state: SessionState,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, machine: CoffeeMachine) -> Self {
        Self {
            input,
            output,
            machine,
            state: SessionState::Running,
        }
    }

    pub fn machine(&self) -> &CoffeeMachine {
        &self.machine
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Consumes the console, handing back the machine and the output sink.
    pub fn into_parts(self) -> (CoffeeMachine, W) {
        (self.machine, self.output)
    }

    /// Serves commands until "off" or the end of input.
    pub fn run(&mut self) -> Result<()> {
        info!("Machine on");
        while self.state == SessionState::Running {
            self.step()?;
        }
        info!("Machine off, revenue {}", self.machine.revenue());
        Ok(())
    }

    /// Handles a single command line.
    pub fn step(&mut self) -> Result<SessionState> {
        let Some(line) = self.prompt(ORDER_PROMPT)? else {
            debug!("End of input, stopping");
            self.state = SessionState::Stopped;
            return Ok(self.state);
        };

        match Command::parse(&line) {
            Ok(Command::Off) => {
                self.say("Turning off. Goodbye!")?;
                self.state = SessionState::Stopped;
            }
            Ok(Command::Report) => {
                let report = self.machine.report();
                self.say(report)?;
            }
            Ok(Command::Order(drink)) => {
                debug!("Order for {}", drink);
                self.serve(drink)?;
            }
            Err(e @ MachineError::InvalidChoice(_)) => {
                debug!("Rejected command {:?}", line.trim_end());
                self.say(e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(self.state)
    }

    /// Runs one order: stock check, payment, then dispensing.
    ///
    /// Stops quietly at the first step that fails; the customer has to order
    /// again to retry.
    fn serve(&mut self, drink: Drink) -> Result<()> {
        if let Err(e) = self.machine.check_stock(drink) {
            return self.say(e);
        }

        let tendered = self.collect_payment()?;
        let settlement = match self.machine.take_payment(drink, tendered) {
            Ok(settlement) => settlement,
            Err(e @ MachineError::InsufficientPayment { .. }) => return self.say(e),
            Err(e) => return Err(e),
        };
        if settlement.change.is_positive() {
            self.say(format!("Here is {} in change.", settlement.change))?;
        }

        self.machine.dispense(drink);
        self.say(format!("Here is your {} ☕. Enjoy!", drink))
    }

    /// Asks for each coin in turn and returns the amount inserted.
    ///
    /// The first answer that is not a count stops the questions and the whole
    /// attempt is treated as no coins at all.
    pub fn collect_payment(&mut self) -> Result<Money> {
        self.say("Please insert coins.")?;
        let counts = match self.read_coin_counts()? {
            Ok(counts) => counts,
            Err(e) => {
                if let MachineError::InvalidCoinInput { coin, input } = &e {
                    warn!("Rejected {} count {:?}", coin, input.trim());
                }
                self.say(e)?;
                CoinCounts::default()
            }
        };
        let total = counts.total();
        debug!("Inserted {:?} = {}", counts, total);
        Ok(total)
    }

    /// Outer result carries I/O failures, inner result the customer's answer.
    fn read_coin_counts(&mut self) -> Result<Result<CoinCounts>> {
        let mut counts = CoinCounts::default();
        for coin in Coin::ALL {
            let answer = self
                .prompt(&format!("How many {}? ", coin.plural()))?
                .unwrap_or_default();
            match coin.parse_count(&answer) {
                Ok(count) => counts.set(coin, count),
                Err(e) => return Ok(Err(e)),
            }
        }
        Ok(Ok(counts))
    }

    /// Writes the prompt and reads one line; `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
