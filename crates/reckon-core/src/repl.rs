//! Read-eval-print loop and per-line dispatch.
//!
//! A [`Session`] owns the loop state for one interactive user and borrows
//! the shared, immutable [`CommandRegistry`]. [`Session::dispatch`] handles
//! a single line and reports an [`Outcome`]; [`Session::run`] drives the
//! prompt/read/dispatch/print cycle over any buffered reader and writer.

use std::any::Any;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, warn};

use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// Text printed before every read.
pub const PROMPT: &str = ">>> ";

/// Directive that ends the session.
pub const EXIT_DIRECTIVE: &str = "exit";

/// Line printed when the session ends.
pub const FAREWELL: &str = "Exiting the interactive calculator...";

/// Line printed when the first token matches no command.
pub const UNKNOWN_COMMAND: &str =
    "Unknown command. Type 'menu' to see available commands, or 'exit' to quit.";

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next input line.
    AwaitingInput,
    /// A line is being resolved and executed.
    Dispatching,
    /// The exit directive was received; no further input is read.
    Terminated,
}

/// Result of dispatching a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing happens.
    Skipped,
    /// A command ran and had nothing to print.
    Silent,
    /// A line to show the user: a result, a rendered error, or the
    /// unknown-command notice.
    Print(String),
    /// The exit directive was received.
    Exit,
}

impl Outcome {
    /// The text this outcome prints, if any.
    pub fn render(&self) -> Option<&str> {
        match self {
            Self::Print(text) => Some(text.as_str()),
            Self::Exit => Some(FAREWELL),
            Self::Skipped | Self::Silent => None,
        }
    }
}

/// One interactive session over a shared registry.
pub struct Session<'r> {
    registry: &'r CommandRegistry,
    state: SessionState,
}

impl<'r> Session<'r> {
    /// Start a session in [`SessionState::AwaitingInput`].
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self {
            registry,
            state: SessionState::AwaitingInput,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle one raw input line.
    ///
    /// The first whitespace-separated token is the command name
    /// (case-insensitive); the remaining tokens are passed through as
    /// arguments. Command failures never escape: usage errors render as
    /// `Error: ...`, anything else (including a panic inside the command)
    /// as `Unexpected error: ...`.
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Outcome::Skipped;
        };
        let command_name = first.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        if command_name == EXIT_DIRECTIVE {
            debug!("exit directive received");
            self.state = SessionState::Terminated;
            return Outcome::Exit;
        }

        let Some(command) = self.registry.instantiate(&command_name) else {
            warn!(command = %command_name, "unknown command");
            return Outcome::Print(UNKNOWN_COMMAND.into());
        };

        self.state = SessionState::Dispatching;
        let registry = self.registry;
        let result =
            panic::catch_unwind(AssertUnwindSafe(|| command.execute(&args, Some(registry))));
        self.state = SessionState::AwaitingInput;

        match result {
            Ok(Ok(Some(text))) if !text.is_empty() => Outcome::Print(text),
            Ok(Ok(_)) => Outcome::Silent,
            Ok(Err(CommandError::Usage(message))) => {
                warn!(command = %command_name, error = %message, "command rejected");
                Outcome::Print(format!("Error: {message}"))
            }
            Ok(Err(err)) => {
                error!(command = %command_name, error = %err, "command failed");
                Outcome::Print(format!("Unexpected error: {err}"))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(command = %command_name, error = %message, "command panicked");
                Outcome::Print(format!("Unexpected error: {message}"))
            }
        }
    }

    /// Run the loop until the exit directive or end of input.
    ///
    /// Writes [`PROMPT`] before each read and one line per printable
    /// outcome. End of input is treated like the exit directive. Bytes that
    /// are not valid UTF-8 are replaced, so a garbled line is dispatched
    /// (and usually rejected) rather than ending the session. Only I/O
    /// errors on `input` or `output` are returned.
    pub fn run<R, W>(&mut self, mut input: R, output: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = Vec::new();
        while self.state != SessionState::Terminated {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                self.state = SessionState::Terminated;
                writeln!(output)?;
                writeln!(output, "{FAREWELL}")?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!("input line is not valid UTF-8");
            }
            let outcome = self.dispatch(&line);
            if let Some(text) = outcome.render() {
                writeln!(output, "{text}")?;
            }
        }
        output.flush()
    }
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "command panicked".to_string()
    }
}
