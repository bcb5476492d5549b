use console::style;
use ino_core::SearchReporter;

/// Prints `Searching for <name> ... <result>` to stderr, leaving stdout for
/// the resolved value.
pub struct ConsoleReporter;

impl SearchReporter for ConsoleReporter {
    fn searching(&mut self, human_name: &str) {
        eprint!("Searching for {human_name} ... ");
    }

    fn found(&mut self, result: &str) {
        eprintln!("{}", style(result).green());
    }

    fn failed(&mut self) {
        eprintln!("{}", style("FAILED").red());
    }
}
