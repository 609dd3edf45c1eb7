//! Terminal client core.
//!
//! A [`Session`] owns the loaded content, the theme and the transcript. Each
//! typed line goes through the pure [`interpreter`], which resolves it against
//! the [`commands`] table; the [`render`] module turns the resulting entries
//! into terminal output. The [`bridge`] loads content from the backend once
//! and falls back to the bundled copy.

pub mod block;
pub mod bridge;
pub mod commands;
pub mod config;
mod error;
pub mod interpreter;
pub mod render;
pub mod session;
pub mod theme;

pub use block::{Block, Icon, Node};
pub use bridge::{Bridge, BridgeTracker, DEFAULT_TIMEOUT, bundled};
pub use config::ClientConfig;
pub use error::{TerminalError, TerminalErrorExt};
pub use interpreter::{CommandEntry, Execution, Rendered, TranscriptOp, execute, execute_at};
pub use render::Renderer;
pub use session::{CommandTracker, NoopTracker, Session};
pub use theme::{DataSource, Theme};
