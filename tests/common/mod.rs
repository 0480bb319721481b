use coffee_machine::application::machine::CoffeeMachine;
use coffee_machine::interfaces::console::Console;

/// Feeds `lines` to a console, one per line, and returns the final machine and transcript.
#[allow(dead_code)]
pub fn run_session(machine: CoffeeMachine, lines: &[&str]) -> (CoffeeMachine, String) {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut console = Console::new(input.as_bytes(), Vec::new(), machine);
    console.run().expect("in-memory session should not fail");
    let (machine, output) = console.into_parts();
    (machine, String::from_utf8(output).expect("transcript is UTF-8"))
}
