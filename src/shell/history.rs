//! Terminal history: what the user typed and what came back.

use web_time::Duration;

use super::interpreter::{Interpreter, Output, ShellContext};
use crate::transition::{FadeConfig, FadeDirection};

/// Fade-in duration of printed entries.
pub const ENTRY_FADE: Duration = Duration::from_millis(900);

/// Who produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// Banner or status text from the host.
    System,
    /// A submitted command line.
    Input,
    /// Interpreter output.
    Output,
}

/// One line (or block) of terminal history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Unique, increasing identifier.
    pub id: u64,
    /// Producer.
    pub kind: LogKind,
    /// Display text.
    pub content: String,
    /// Location at submit time; only set on input entries.
    pub location: Option<String>,
}

impl LogEntry {
    /// Fade played when the entry appears. Input lines appear at once.
    #[must_use]
    pub fn fade(&self) -> Option<FadeConfig> {
        match self.kind {
            LogKind::Input => None,
            LogKind::System | LogKind::Output => Some(FadeConfig {
                direction: FadeDirection::In,
                duration: ENTRY_FADE,
                ..FadeConfig::default()
            }),
        }
    }
}

/// Append-only terminal history.
#[derive(Debug, Clone, Default)]
pub struct TerminalLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl TerminalLog {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    fn push(&mut self, kind: LogKind, content: String, location: Option<String>) {
        self.entries.push(LogEntry {
            id: self.next_id,
            kind,
            content,
            location,
        });
        self.next_id += 1;
    }

    /// Append host text.
    pub fn system(&mut self, content: impl Into<String>) {
        self.push(LogKind::System, content.into(), None);
    }

    /// Append prepared entries as they are.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        for entry in entries {
            self.next_id = self.next_id.max(entry.id + 1);
            self.entries.push(entry);
        }
    }

    /// Record `input`, run it, and append whatever it printed.
    ///
    /// Blank input is ignored. Returns whether anything was submitted.
    pub fn submit<C: ShellContext>(
        &mut self,
        shell: &mut Interpreter<C>,
        input: &str,
    ) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return false;
        }
        self.push(
            LogKind::Input,
            input.to_owned(),
            Some(shell.location().to_owned()),
        );
        match shell.execute(input) {
            Output::None => {}
            Output::Text(text) => self.push(LogKind::Output, text, None),
            Output::Send(next) => {
                let _ = self.submit(shell, &next);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_records_input_and_output() {
        let mut log = TerminalLog::new();
        let mut shell = Interpreter::new(());
        log.system("welcome");
        assert!(log.submit(&mut shell, "  cd docs  "));
        assert!(log.submit(&mut shell, "nope"));

        let kinds: Vec<_> = log.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [LogKind::System, LogKind::Input, LogKind::Input, LogKind::Output]
        );
        let entries = log.entries();
        assert_eq!(entries[1].content, "cd docs");
        assert_eq!(entries[1].location.as_deref(), Some("~"));
        assert_eq!(entries[2].location.as_deref(), Some("~/docs"));
        assert_eq!(entries[3].content, "Unknown command: nope");
        assert!(entries.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut log = TerminalLog::new();
        let mut shell = Interpreter::new(());
        assert!(!log.submit(&mut shell, "   "));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_send_resubmits() {
        let mut log = TerminalLog::new();
        let mut shell = Interpreter::new(());
        assert!(log.submit(&mut shell, "test"));
        let contents: Vec<_> =
            log.entries().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(
            contents,
            ["test", "list show", "List displayed on the right."]
        );
    }

    #[test]
    fn test_output_fades_in() {
        let mut log = TerminalLog::new();
        let mut shell = Interpreter::new(());
        let _ = log.submit(&mut shell, "help");
        let entries = log.entries();
        assert!(entries[0].fade().is_none());
        let fade = entries[1].fade().unwrap();
        assert_eq!(fade.direction, FadeDirection::In);
        assert_eq!(fade.duration, ENTRY_FADE);
    }

    #[test]
    fn test_extend_keeps_ids_increasing() {
        let mut log = TerminalLog::new();
        log.extend([LogEntry {
            id: 41,
            kind: LogKind::Output,
            content: "fetched".to_owned(),
            location: None,
        }]);
        log.system("next");
        assert_eq!(log.entries()[1].id, 42);
    }
}
