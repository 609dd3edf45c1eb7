use crate::commands::CommandContext;
use crate::interpreter::{CommandEntry, Execution, TranscriptOp, execute};
use crate::theme::{DataSource, Theme};
use folio_domain::content::ContentBundle;
use std::fmt::Debug;
use std::sync::Arc;

/// Receives every dispatched command of an API-connected session.
///
/// Implementations must return immediately; failures stay invisible to the session.
pub trait CommandTracker: Debug + Send + Sync {
    fn track(&self, command: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracker;

impl CommandTracker for NoopTracker {
    fn track(&self, _command: &str) {}
}

/// One interactive session: loaded content, theme and transcript.
#[derive(Debug)]
pub struct Session {
    data: ContentBundle,
    source: DataSource,
    theme: Theme,
    transcript: Vec<CommandEntry>,
    tracker: Arc<dyn CommandTracker>,
}

impl Session {
    #[must_use]
    pub fn new(data: ContentBundle, source: DataSource) -> Self {
        Self {
            data,
            source,
            theme: Theme::default(),
            transcript: Vec::new(),
            tracker: Arc::new(NoopTracker),
        }
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_tracker(mut self, tracker: Arc<dyn CommandTracker>) -> Self {
        self.tracker = tracker;
        self
    }

    #[must_use]
    pub fn context(&self) -> CommandContext<'_> {
        CommandContext { data: &self.data, theme: self.theme, source: self.source }
    }

    /// Executes one typed line and applies its outcome to the session.
    pub fn submit(&mut self, raw: &str) -> Execution {
        let execution = execute(raw, &self.context());

        if let Some(command) = &execution.command
            && self.source.is_connected()
        {
            self.tracker.track(command);
        }

        self.theme = execution.theme;
        match execution.transcript {
            TranscriptOp::Append => self.transcript.extend(execution.entries.iter().cloned()),
            TranscriptOp::Clear => self.transcript.clear(),
            TranscriptOp::Unchanged => {}
        }
        execution
    }

    #[must_use]
    pub fn transcript(&self) -> &[CommandEntry] {
        &self.transcript
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn source(&self) -> DataSource {
        self.source
    }

    #[must_use]
    pub const fn data(&self) -> &ContentBundle {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Debug, Default)]
    struct RecordingTracker {
        commands: Mutex<Vec<String>>,
    }

    impl RecordingTracker {
        fn commands(&self) -> Vec<String> {
            self.commands.lock().clone()
        }
    }

    impl CommandTracker for RecordingTracker {
        fn track(&self, command: &str) {
            self.commands.lock().push(command.to_owned());
        }
    }

    fn session(source: DataSource) -> (Session, Arc<RecordingTracker>) {
        let tracker = Arc::new(RecordingTracker::default());
        let session = Session::new(ContentBundle::default(), source).with_tracker(tracker.clone());
        (session, tracker)
    }

    #[test]
    fn transcript_grows_and_clears() {
        let (mut session, _) = session(DataSource::Bundled);

        session.submit("info");
        session.submit("nope");
        assert_eq!(session.transcript().len(), 3);

        session.submit("clear");
        assert!(session.transcript().is_empty());
        session.submit("clear");
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn theme_changes_persist() {
        let (mut session, _) = session(DataSource::Bundled);
        assert_eq!(session.theme(), Theme::Green);

        session.submit("theme");
        assert_eq!(session.theme(), Theme::Red);
        assert_eq!(session.context().theme, Theme::Red);
    }

    #[test]
    fn connected_sessions_track_every_non_blank_command() {
        let (mut session, tracker) = session(DataSource::Api);

        for raw in ["About", "  ", "clear", "bogus", "theme red"] {
            session.submit(raw);
        }
        assert_eq!(tracker.commands(), ["about", "clear", "bogus", "theme red"]);
    }

    #[test]
    fn disconnected_sessions_never_track() {
        let (mut session, tracker) = session(DataSource::Bundled);
        session.submit("about");
        assert!(tracker.commands().is_empty());
    }
}
