/*!
## Rust Terminal Module

The prompt loop and file runner around the compiler and virtual machine.

*/

extern crate ansi_term;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{Listing, Runtime};
use ansi_term::{Colour, Style};
use linefeed::{Interface, ReadResult, Signal};
use std::path::Path;
use tracing::{debug, info};

/// Process exit statuses, following sysexits.
pub mod status {
    pub const OK: i32 = 0;
    pub const DATA_ERROR: i32 = 65;
    pub const SOFTWARE: i32 = 70;
    pub const IO_ERROR: i32 = 74;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub disassemble: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            disassemble: false,
            color: true,
        }
    }
}

/// Output of one compile-and-run cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

/// One runtime reused for every cycle, as a prompt needs.
pub struct Session {
    runtime: Runtime,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Session {
        Session {
            runtime: Runtime::new(),
            config,
        }
    }

    pub fn evaluate(&mut self, source: &str, name: &str) -> Report {
        let mut report = Report::default();
        let chunk = match crate::compile(source) {
            Ok(chunk) => chunk,
            Err(errors) => {
                debug!(count = errors.len(), "compile failed");
                for error in errors.iter() {
                    report
                        .stderr
                        .push_str(&render(error, name, self.config.color));
                }
                report.status = status::DATA_ERROR;
                return report;
            }
        };
        if self.config.disassemble {
            report.stdout.push_str(&Listing::disassemble(&chunk, name));
        }
        match self.runtime.run(&chunk) {
            Ok(val) => report.stdout.push_str(&format!("{}\n", val)),
            Err(error) => {
                report
                    .stderr
                    .push_str(&render(&error, name, self.config.color));
                report.status = status::SOFTWARE;
            }
        }
        report
    }
}

/// Formats a diagnostic as `error: message` followed by its location.
/// Runtime faults use the `fault:` label and a bytecode offset instead.
pub fn render(error: &Error, source: &str, color: bool) -> String {
    let (label, message) = if error.is_fault() {
        ("fault: ", error.to_string())
    } else {
        ("error: ", error.text().to_string())
    };
    let location = match error.offset() {
        Some(offset) => format!("{}@{:04}", source, offset),
        None => format!("{}:{}:{}", source, error.line(), error.column()),
    };
    if color {
        format!(
            "{}{}\n{}{}\n",
            Colour::Red.bold().paint(label),
            Style::new().bold().paint(message),
            Colour::Blue.paint(" --> "),
            location
        )
    } else {
        format!("{}{}\n --> {}\n", label, message, location)
    }
}

pub fn run_file(path: &Path, config: Config) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Could not read {}: {}", path.display(), error);
            return status::IO_ERROR;
        }
    };
    info!(path = %path.display(), bytes = source.len(), "running file");
    let report = Session::new(config).evaluate(&source, &path.display().to_string());
    print!("{}", report.stdout);
    eprint!("{}", report.stderr);
    report.status
}

pub fn main(config: Config) -> i32 {
    match main_loop(config) {
        Ok(()) => status::OK,
        Err(error) => {
            eprintln!("{}", error);
            status::IO_ERROR
        }
    }
}

fn main_loop(config: Config) -> std::io::Result<()> {
    let interface = Interface::new("nyx")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut session = Session::new(config);

    loop {
        let input = match interface.read_line()? {
            ReadResult::Input(input) => input,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if input.trim().is_empty() {
            continue;
        }
        let report = session.evaluate(&input, "STDIO");
        interface.write_fmt(format_args!("{}{}", report.stdout, report.stderr))?;
        interface.add_history_unique(input);
    }
    Ok(())
}
