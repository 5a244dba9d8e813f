use std::fs;

use colored::Colorize;

use crate::cli::commands::service_helpers;
use crate::cli::{context, output};
use crate::core::errors::Result;
use crate::core::observe::wrappers::around;

/// Execute the `rosterly log` command.
///
/// Renders the call log with optional filters. The handler is wrapped
/// like every other one, so its own "called" line shows up in the
/// output it prints.
pub fn execute(last: Option<usize>, errors_only: bool, verbose: bool) -> Result<()> {
    let (config, sink) = service_helpers::open_sink(verbose)?;

    around(sink.as_ref(), "commands::log", || {
        let path = context::rosterly_dir().join(config.log_file());
        if !path.exists() {
            output::header("rosterly log");
            output::warning("No call log yet");
            output::hint("Run any roster command first, e.g. rosterly list.");
            return Ok(());
        }

        let content = fs::read_to_string(&path)?;
        let lines: Vec<&str> = content
            .lines()
            .filter(|line| !errors_only || line.contains(" ERROR "))
            .collect();

        if lines.is_empty() {
            output::header("rosterly log");
            output::warning("No matching lines");
            return Ok(());
        }

        // Apply --last N (take from the end)
        let display: Vec<&str> = match last {
            Some(n) => lines
                .iter()
                .rev()
                .take(n)
                .copied()
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect(),
            None => lines,
        };

        output::header(&format!("rosterly log ({} lines)", display.len()));
        println!();
        for line in display {
            print_line(line);
        }
        Ok(())
    })
}

/// Timestamps dimmed, error lines red.
fn print_line(line: &str) {
    if line.contains(" ERROR ") {
        println!("  {}", line.red());
        return;
    }

    // "YYYY-MM-DD HH:MM:SS" is the first 19 characters of every line
    // the file sink writes.
    if line.len() > 19 && line.is_char_boundary(19) {
        let (timestamp, rest) = line.split_at(19);
        println!("  {}{}", timestamp.dimmed(), rest);
    } else {
        println!("  {line}");
    }
}
