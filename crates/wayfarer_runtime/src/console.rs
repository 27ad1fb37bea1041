//! The interactive console.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use wayfarer_foundation::{Error, ErrorKind, Result};

use crate::config::ConsoleConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::serialize::io_error;
use crate::session::{Reply, Session};

/// Reads commands, runs them against a [`Session`], and prints replies.
pub struct Console<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    prompt: String,
    history_file: Option<PathBuf>,
}

impl Console<RustylineEditor> {
    /// Creates a console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Console<E> {
    /// Creates a console with the given editor and an empty world.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::default(),
            prompt: ConsoleConfig::default().prompt,
            history_file: None,
        }
    }

    /// Sets the session for this console.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Applies a configuration to the console and its session.
    ///
    /// Call after [`with_session`](Self::with_session): the actor and
    /// threshold are applied to the current world.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured actor does not exist or the
    /// threshold is out of range.
    pub fn with_config(mut self, config: &ConsoleConfig) -> Result<Self> {
        config.validate()?;
        self.prompt.clone_from(&config.prompt);
        self.history_file.clone_from(&config.history_file);
        if let Some(actor) = config.actor {
            self.session.set_actor(actor)?;
        }
        if let Some(threshold) = config.threshold {
            self.session.set_threshold(threshold)?;
        }
        Ok(self)
    }

    /// Returns the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the session mutably.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the console on standard output until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Runs the console, writing replies to `out`.
    ///
    /// Command errors are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_with_output<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Some(path) = &self.history_file {
            if let Err(err) = self.editor.load_history(path) {
                tracing::warn!(error = %format_error(&err), "could not load history");
            }
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.session.execute(&line) {
                Ok(Reply::Quit) => break,
                Ok(Reply::Text(text)) => write_reply(out, &text)?,
                Err(err) => write_reply(out, &format!("error: {}", format_error(&err)))?,
            }
        }

        if let Some(path) = &self.history_file {
            if let Err(err) = self.editor.save_history(path) {
                tracing::warn!(error = %format_error(&err), "could not save history");
            }
        }
        Ok(())
    }

    /// Runs every command in a script file.
    ///
    /// Blank lines and lines starting with `;` are skipped. Each command is
    /// echoed after `> ` before its reply. A `quit` stops the script.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, output cannot be
    /// written, or a command fails; the error names the failing line.
    pub fn run_script<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| io_error("read", path, &e))?;

        for (index, line) in source.lines().enumerate() {
            let command = line.trim();
            if command.is_empty() || command.starts_with(';') {
                continue;
            }
            write_reply(out, &format!("> {command}"))?;

            let reply = self
                .session
                .execute(command)
                .map_err(|e| e.with_context(format!("{}:{}", path.display(), index + 1)))?;
            match reply {
                Reply::Quit => break,
                Reply::Text(text) => write_reply(out, &text)?,
            }
        }

        tracing::debug!(path = %path.display(), "ran script");
        Ok(())
    }
}

/// Formats an error with its context, if any.
#[must_use]
pub fn format_error(err: &Error) -> String {
    match &err.context {
        Some(context) => format!("{context}: {err}"),
        None => err.to_string(),
    }
}

fn write_reply<W: Write>(out: &mut W, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    writeln!(out, "{text}").map_err(|e| Error::new(ErrorKind::Io(e.to_string())))
}
