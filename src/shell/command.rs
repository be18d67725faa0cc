//! Command-line tokenizing and the shell's command vocabulary.

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandLine {
    /// First token; empty for a blank line.
    pub name: String,
    /// Remaining tokens.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split `input` on spaces, honoring single and double quotes.
    ///
    /// Quotes group characters into one token and are dropped. An
    /// unterminated quote runs to the end of the line.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut quote: Option<char> = None;

        for c in input.chars() {
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => current.push(c),
                None => match c {
                    '"' | '\'' => quote = Some(c),
                    ' ' => {
                        if !current.is_empty() {
                            tokens.push(std::mem::take(&mut current));
                        }
                    }
                    _ => current.push(c),
                },
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        let mut tokens = tokens.into_iter();
        Self {
            name: tokens.next().unwrap_or_default(),
            args: tokens.collect(),
        }
    }

    /// Argument at `index`.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// What `list` was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// Show the sample list.
    Show,
    /// Hide the list.
    Hide,
}

/// Every command the shell understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Change location; `None` goes home.
    Cd(Option<String>),
    /// View a file.
    Cat(Option<String>),
    /// Toggle the side list; `None` for a missing/unknown action.
    List(Option<ListAction>),
    /// Print the command summary.
    Help,
    /// Replay `list show` through the terminal.
    Test,
    /// Anything else, with the name as typed.
    Unknown(String),
}

impl From<CommandLine> for ShellCommand {
    fn from(line: CommandLine) -> Self {
        let first = line.args.first().cloned();
        match line.name.to_lowercase().as_str() {
            "cd" => Self::Cd(first),
            "cat" => Self::Cat(first),
            "list" => Self::List(match first.as_deref() {
                Some("show") => Some(ListAction::Show),
                Some("hide") => Some(ListAction::Hide),
                _ => None,
            }),
            "help" => Self::Help,
            "test" => Self::Test,
            _ => Self::Unknown(line.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain() {
        let line = CommandLine::parse("  cd   docs/notes ");
        assert_eq!(line.name, "cd");
        assert_eq!(line.args, ["docs/notes"]);
    }

    #[test]
    fn test_tokenize_quotes() {
        let line = CommandLine::parse(r#"cat "my file.md" 'it''s' a"b c"d"#);
        assert_eq!(line.name, "cat");
        assert_eq!(line.args, ["my file.md", "its", "ab cd"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        let line = CommandLine::parse("cat \"open ended");
        assert_eq!(line.args, ["open ended"]);
    }

    #[test]
    fn test_blank_line() {
        let line = CommandLine::parse("   ");
        assert!(line.name.is_empty());
        assert!(line.args.is_empty());
        assert_eq!(line.arg(0), None);
    }

    #[test]
    fn test_command_vocabulary() {
        let parse = |s: &str| ShellCommand::from(CommandLine::parse(s));
        assert_eq!(parse("CD .."), ShellCommand::Cd(Some("..".to_owned())));
        assert_eq!(parse("cd"), ShellCommand::Cd(None));
        assert_eq!(parse("list show"), ShellCommand::List(Some(ListAction::Show)));
        assert_eq!(parse("list hide"), ShellCommand::List(Some(ListAction::Hide)));
        assert_eq!(parse("list"), ShellCommand::List(None));
        assert_eq!(parse("Help"), ShellCommand::Help);
        assert_eq!(parse("rm -rf"), ShellCommand::Unknown("rm".to_owned()));
    }
}
