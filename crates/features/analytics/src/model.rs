use folio_derive::api_model;
use folio_domain::constants::MAX_COMMAND_LEN;

/// Body of `POST /api/analytics/command`.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct TrackCommandRequest {
    /// Command as typed; trimmed and lower-cased before counting
    pub command: Option<String>,
}

/// Usage counter of one command.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct CommandUsage {
    pub command: String,
    /// Number of tracked invocations, at least 1
    pub count: i64,
    /// RFC 3339 timestamp of the latest invocation
    pub last_used_at: String,
}

/// Why a tracked command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandRejection {
    Empty,
    TooLong,
}

impl CommandRejection {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "Command is required",
            Self::TooLong => "Command must be at most 100 characters",
        }
    }
}

/// Trims and lower-cases a command the way the terminal dispatches it.
///
/// # Errors
/// Rejects commands that are empty after trimming or longer than
/// [`MAX_COMMAND_LEN`] characters.
pub fn normalize_command(raw: &str) -> Result<String, CommandRejection> {
    let command = raw.trim().to_lowercase();
    match command.chars().count() {
        0 => Err(CommandRejection::Empty),
        len if len > MAX_COMMAND_LEN => Err(CommandRejection::TooLong),
        _ => Ok(command),
    }
}
