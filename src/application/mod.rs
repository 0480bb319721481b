//! Application layer: the machine's owned state and the commands it accepts.
//!
//! `CoffeeMachine` is the single place inventory and revenue change; the
//! console only decides which step to run next.

pub mod command;
pub mod machine;
