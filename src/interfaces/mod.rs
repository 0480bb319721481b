//! Interfaces layer: how customers talk to the machine.

pub mod console;
