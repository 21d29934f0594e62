//! Console output capability for commands.
//!
//! Commands receive a `Reporter` instead of printing directly, so tests can
//! capture what was said and in what order.

/// Emits informational lines for the user.
pub trait Reporter {
    fn info(&self, message: &str);
}

/// Writes messages to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }
}
