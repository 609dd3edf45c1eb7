//! # Folio Shell
//!
//! Command-line front end of the terminal portfolio. Without a subcommand it
//! loads the content through the [`Bridge`] and reads commands from stdin until
//! end of input; `run`, `health` and `contact` are one-shot variants.

pub mod cli;

use anyhow::{Context, Result};
use cli::{Cli, Command};
use folio::features::contact::model::ContactRequest;
use folio::features::terminal::{
    Bridge, BridgeTracker, ClientConfig, Execution, Renderer, Session, TranscriptOp,
};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Executes the parsed command line against `config`.
///
/// # Errors
/// Returns an error when the HTTP client cannot be built, the terminal cannot be
/// written or a contact submission gets no envelope back.
pub async fn run(cli: Cli, config: ClientConfig) -> Result<ExitCode> {
    let bridge = Bridge::new(&config.api_url, config.timeout())?;

    match cli.command {
        None => {
            interactive(&bridge, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Health) => health(&bridge, io::stdout().lock()).await,
        Some(Command::Contact { name, email, message }) => {
            let request = ContactRequest { name, email, message };
            contact(&bridge, &request, io::stdout().lock()).await
        }
        Some(Command::Run { json, commands }) => {
            let (mut session, tracker) = open_session(&bridge, &config).await?;
            let out = io::stdout().lock();
            if json {
                print_transcript(&mut session, &commands, out)?;
            } else {
                let color = io::stdout().is_terminal();
                render_commands(&mut session, &commands, Renderer::new(out, color))?;
            }
            flush(tracker.as_ref(), &config).await;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Loads the content once and wires usage reporting when enabled.
///
/// The returned tracker, if any, should be flushed before the runtime shuts down.
///
/// # Errors
/// Returns an error when telemetry is on and no Tokio runtime is running.
pub async fn open_session(
    bridge: &Bridge,
    config: &ClientConfig,
) -> Result<(Session, Option<BridgeTracker>)> {
    let (data, source) = bridge.load().await;
    let mut session = Session::new(data, source).with_theme(config.theme);
    let tracker = if config.telemetry { Some(BridgeTracker::new(bridge.clone())?) } else { None };
    if let Some(tracker) = &tracker {
        session = session.with_tracker(Arc::new(tracker.clone()));
    }
    debug!(source = source.label(), theme = %config.theme, "Session ready");
    Ok((session, tracker))
}

/// Gives pending usage reports one request timeout to complete.
async fn flush(tracker: Option<&BridgeTracker>, config: &ClientConfig) {
    if let Some(tracker) = tracker {
        let abandoned = tracker.flush(config.timeout()).await;
        if abandoned > 0 {
            debug!(abandoned, "Usage reports dropped on exit");
        }
    }
}

async fn interactive(bridge: &Bridge, config: &ClientConfig) -> Result<()> {
    let color = io::stdout().is_terminal();
    let mut renderer = Renderer::new(io::stdout(), color);
    renderer.booting(config.theme)?;

    let (mut session, tracker) = open_session(bridge, config).await?;
    renderer.loaded(session.source(), session.theme())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        renderer.prompt(session.theme())?;
        let Some(line) = lines.next_line().await.context("Reading stdin")? else {
            break;
        };
        let execution = session.submit(&line);
        show(&mut renderer, &execution)?;
    }

    flush(tracker.as_ref(), config).await;
    Ok(())
}

fn show<W: Write>(renderer: &mut Renderer<W>, execution: &Execution) -> io::Result<()> {
    match execution.transcript {
        TranscriptOp::Append => renderer.entries(&execution.entries, execution.theme),
        TranscriptOp::Clear => renderer.clear(),
        TranscriptOp::Unchanged => Ok(()),
    }
}

/// Submits every command and renders each outcome as it happens.
///
/// # Errors
/// Returns an error when the output cannot be written.
pub fn render_commands<W: Write>(
    session: &mut Session,
    commands: &[String],
    mut renderer: Renderer<W>,
) -> Result<W> {
    for command in commands {
        let execution = session.submit(command);
        show(&mut renderer, &execution)?;
    }
    Ok(renderer.into_inner())
}

/// Submits every command and writes the final transcript as JSON.
///
/// # Errors
/// Returns an error when the output cannot be written.
pub fn print_transcript<W: Write>(
    session: &mut Session,
    commands: &[String],
    mut out: W,
) -> Result<W> {
    for command in commands {
        session.submit(command);
    }
    serde_json::to_writer_pretty(&mut out, session.transcript()).context("Writing transcript")?;
    writeln!(out)?;
    Ok(out)
}

/// Reports whether the backend answers on `/health`.
///
/// # Errors
/// Returns an error when the output cannot be written.
pub async fn health<W: Write>(bridge: &Bridge, mut out: W) -> Result<ExitCode> {
    match bridge.health().await {
        Ok(true) => {
            writeln!(out, "{} is up", bridge.base_url())?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(false) => {
            writeln!(out, "{} reported a failure", bridge.base_url())?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            writeln!(out, "{} is unreachable: {err}", bridge.base_url())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Sends the contact form and prints the outcome, field errors included.
///
/// # Errors
/// Returns an error when the backend cannot be reached or does not answer with an envelope.
pub async fn contact<W: Write>(
    bridge: &Bridge,
    request: &ContactRequest,
    mut out: W,
) -> Result<ExitCode> {
    let envelope = bridge.submit_contact(request).await?;
    let message = envelope.message.as_deref().unwrap_or_default();

    if envelope.success {
        writeln!(out, "{message}")?;
        if let Some(receipt) = &envelope.data {
            writeln!(out, "reference: {}", receipt.id)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    writeln!(out, "{message}")?;
    for error in envelope.errors.iter().flatten() {
        writeln!(out, "  - {error}")?;
    }
    Ok(ExitCode::FAILURE)
}
