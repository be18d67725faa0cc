//! Command execution against an explicit host context.

use super::command::{CommandLine, ListAction, ShellCommand};
use super::path::{self, HOME};

/// Items shown by `list show`.
pub const SAMPLE_LIST: [&str; 5] = [
    "Item 1: Welcome to the list",
    "Item 2: This is a test list",
    "Item 3: Displayed on the right side",
    "Item 4: Can be toggled with commands",
    "Item 5: Example list item",
];

/// Text printed by `help`.
pub const HELP_TEXT: &str = "Available commands:\n  list show - Display a list on the right\n  list hide - Hide the list\n  help - Show this message";

/// Host callbacks the interpreter drives. Every method defaults to a
/// no-op so hosts implement only what they display.
pub trait ShellContext {
    /// The current location changed.
    fn location_changed(&mut self, _location: &str) {}

    /// Open a file, or close the open one with `None`.
    fn view_file(&mut self, _path: Option<&str>) {}

    /// Show the side list.
    fn show_list(&mut self, _items: &[String]) {}

    /// Hide the side list.
    fn hide_list(&mut self) {}
}

impl ShellContext for () {}

/// Result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Nothing to print.
    None,
    /// One block of text.
    Text(String),
    /// Submit another command line through the terminal.
    Send(String),
}

/// Interprets command lines, tracking the current location.
#[derive(Debug)]
pub struct Interpreter<C> {
    context: C,
    location: String,
}

impl<C: ShellContext> Interpreter<C> {
    /// Interpreter at home.
    pub fn new(context: C) -> Self {
        Self {
            context,
            location: HOME.to_owned(),
        }
    }

    /// Current location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Host context.
    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Host context, mutably.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Run one command line.
    pub fn execute(&mut self, input: &str) -> Output {
        let command = ShellCommand::from(CommandLine::parse(input));
        log::debug!("shell: {command:?}");
        match command {
            ShellCommand::Cd(target) => {
                let target = target.as_deref().unwrap_or(HOME);
                match path::resolve(&self.location, target) {
                    Ok(location) => {
                        self.context.location_changed(&location);
                        self.context.view_file(None);
                        self.location = location;
                        Output::None
                    }
                    Err(err) => Output::Text(err.to_string()),
                }
            }
            ShellCommand::Cat(None) => {
                Output::Text("Usage: cat <filename>".to_owned())
            }
            ShellCommand::Cat(Some(file)) => {
                match path::resolve(&self.location, &file) {
                    Ok(path) => {
                        self.context.view_file(Some(&path));
                        Output::None
                    }
                    Err(err) => Output::Text(err.to_string()),
                }
            }
            ShellCommand::List(Some(ListAction::Show)) => {
                let items: Vec<String> =
                    SAMPLE_LIST.iter().map(|s| (*s).to_owned()).collect();
                self.context.show_list(&items);
                Output::Text("List displayed on the right.".to_owned())
            }
            ShellCommand::List(Some(ListAction::Hide)) => {
                self.context.hide_list();
                Output::Text("List hidden.".to_owned())
            }
            ShellCommand::List(None) => {
                Output::Text("Usage: list show|hide".to_owned())
            }
            ShellCommand::Help => Output::Text(HELP_TEXT.to_owned()),
            ShellCommand::Test => Output::Send("list show".to_owned()),
            ShellCommand::Unknown(name) => {
                Output::Text(format!("Unknown command: {name}"))
            }
        }
    }
}
