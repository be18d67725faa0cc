//! Terminal shell boundary: a small command interpreter over a virtual
//! home directory, and the history log that renders its output.
//!
//! The interpreter owns no global state. Everything it affects outside
//! itself goes through the [`ShellContext`] it is constructed with.

mod command;
mod history;
mod interpreter;
pub mod path;

pub use command::{CommandLine, ListAction, ShellCommand};
pub use history::{LogEntry, LogKind, TerminalLog, ENTRY_FADE};
pub use interpreter::{
    Interpreter, Output, ShellContext, HELP_TEXT, SAMPLE_LIST,
};
