//! Line editor abstraction for the console.
//!
//! The console only talks to [`LineEditor`], so tests drive it with a
//! scripted editor and the binary uses rustyline.

use std::borrow::Cow;
use std::path::Path;

use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use wayfarer_foundation::{Error, ErrorKind, Result};

use crate::session::COMMANDS;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);

    /// Loads history from a file. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn load_history(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    /// Writes history to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save_history(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

#[derive(Helper, Completer, Hinter, Validator)]
struct ConsoleHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ConsoleHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes command names in the first word and paths after `load`/`save`.
struct CommandCompleter {
    file_completer: FilenameCompleter,
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        match before.split_once(char::is_whitespace) {
            Some((command, _)) if matches!(command, "load" | "save") => {
                self.file_completer.complete(line, pos, ctx)
            }
            Some(_) => Ok((pos, Vec::new())),
            None => Ok((0, command_candidates(before))),
        }
    }
}

fn command_candidates(prefix: &str) -> Vec<Pair> {
    COMMANDS
        .iter()
        .filter(|command| command.starts_with(prefix))
        .map(|&command| Pair {
            display: command.to_string(),
            replacement: format!("{command} "),
        })
        .collect()
}

/// Line editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<ConsoleHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = ConsoleHelper {
            completer: CommandCompleter {
                file_completer: FilenameCompleter::new(),
            },
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn load_history(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        self.editor
            .load_history(path)
            .map_err(|e| Error::new(ErrorKind::Io(e.to_string())).with_context(path.display().to_string()))
    }

    fn save_history(&mut self, path: &Path) -> Result<()> {
        self.editor
            .save_history(path)
            .map_err(|e| Error::new(ErrorKind::Io(e.to_string())).with_context(path.display().to_string()))
    }
}
