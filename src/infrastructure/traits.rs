//! I/O boundary traits for testability
//!
//! These traits abstract terminal input, allowing the interactive flow
//! to be tested with scripted implementations.

use std::io;
use std::io::{BufRead, Write};

/// Line-oriented console input.
pub trait Console: Send + Sync {
    /// Print `prompt` (no trailing newline), then read one line.
    ///
    /// The trailing newline is stripped. `Ok(None)` signals end of input
    /// (Ctrl-D), which the interactive flow treats as the cancel gesture.
    fn read_line(&self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console reading from stdin, prompting on stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
