//! Maps a typed line to a transcript change and the next theme.
//!
//! [`execute`] never fails and performs no I/O; telemetry is left to the
//! [`Session`](crate::session::Session) through [`Execution::command`].

use crate::block::Block;
use crate::commands::{CommandContext, lookup};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What an entry shows after its input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendered {
    Block(Block),
    ThemeSwitched { theme: Theme },
    UnknownCommand { command: String },
}

/// One transcript line. `rendered` is `None` for the echo of the typed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
    pub input_text: String,
    pub timestamp: DateTime<Utc>,
    pub rendered: Option<Rendered>,
}

impl CommandEntry {
    fn echo(command: &str, at: DateTime<Utc>) -> Self {
        Self { input_text: command.to_owned(), timestamp: at, rendered: None }
    }

    fn result(command: &str, at: DateTime<Utc>, rendered: Rendered) -> Self {
        Self { input_text: command.to_owned(), timestamp: at, rendered: Some(rendered) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptOp {
    /// Append [`Execution::entries`].
    Append,
    /// Replace the transcript with an empty one.
    Clear,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub entries: Vec<CommandEntry>,
    pub transcript: TranscriptOp,
    pub theme: Theme,
    /// Normalized command to report as usage; `None` for blank input.
    pub command: Option<String>,
}

impl Execution {
    const fn unchanged(theme: Theme) -> Self {
        Self { entries: Vec::new(), transcript: TranscriptOp::Unchanged, theme, command: None }
    }
}

/// Trims and lower-cases a typed line.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Runs one typed line against the session context, stamping entries with the current time.
#[must_use]
pub fn execute(raw: &str, ctx: &CommandContext<'_>) -> Execution {
    execute_at(raw, ctx, Utc::now())
}

/// Like [`execute`], with an explicit timestamp for the produced entries.
#[must_use]
pub fn execute_at(raw: &str, ctx: &CommandContext<'_>, at: DateTime<Utc>) -> Execution {
    let command = normalize(raw);
    if command.is_empty() {
        return Execution::unchanged(ctx.theme);
    }

    let mut execution = Execution {
        entries: Vec::with_capacity(2),
        transcript: TranscriptOp::Append,
        theme: ctx.theme,
        command: Some(command.clone()),
    };

    if let Some(next) = theme_change(&command, ctx.theme) {
        execution.theme = next;
        execution.entries.push(CommandEntry::echo(&command, at));
        execution.entries.push(CommandEntry::result(
            &command,
            at,
            Rendered::ThemeSwitched { theme: next },
        ));
    } else if command == "clear" {
        execution.transcript = TranscriptOp::Clear;
    } else if let Some(build) = lookup(&command) {
        execution.entries.push(CommandEntry::echo(&command, at));
        execution.entries.push(CommandEntry::result(&command, at, Rendered::Block(build(ctx))));
    } else {
        debug!(command = %command, "Unknown command");
        execution.entries.push(CommandEntry::result(
            &command,
            at,
            Rendered::UnknownCommand { command: command.clone() },
        ));
    }

    execution
}

/// `theme` toggles; `theme <value>` selects green for `green` and red for anything else.
fn theme_change(command: &str, current: Theme) -> Option<Theme> {
    let rest = command.strip_prefix("theme")?;
    if rest.is_empty() {
        return Some(current.toggled());
    }
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let argument = rest.split_whitespace().next().unwrap_or_default();
    if !matches!(argument, "red" | "green") {
        debug!(argument, "Unknown theme, selecting red");
    }
    Some(Theme::from_argument(argument))
}
