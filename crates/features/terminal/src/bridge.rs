//! HTTP access to the backend.
//!
//! Content is loaded once per session within a bounded wait and replaced by
//! the bundled copy on any failure. Usage tracking is fire-and-forget.

use crate::error::{TerminalError, TerminalErrorExt};
use crate::session::CommandTracker;
use crate::theme::DataSource;
use folio_contact::model::{ContactRequest, SubmissionReceipt};
use folio_domain::content::{BUNDLED_PORTFOLIO, ContentBundle};
use folio_kernel::envelope::ApiEnvelope;
use serde::Deserialize;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

/// Upper bound for every request, including the initial content load.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The bundled portfolio, in the same shape as `GET /api/portfolio`.
#[must_use]
pub fn bundled() -> ContentBundle {
    serde_json::from_str(BUNDLED_PORTFOLIO).unwrap_or_else(|err| {
        error!(error = %err, "Bundled portfolio is malformed");
        ContentBundle::default()
    })
}

#[derive(Debug, Deserialize)]
struct HealthProbe {
    success: bool,
}

fn into_data<T>(envelope: ApiEnvelope<T>) -> Result<T, TerminalError> {
    match envelope {
        ApiEnvelope { success: true, data: Some(data), .. } => Ok(data),
        ApiEnvelope { message, .. } => Err(TerminalError::Api {
            message: message.unwrap_or_else(|| "response carried no data".to_owned()).into(),
            context: None,
        }),
    }
}

/// Client for the folio backend.
#[derive(Debug, Clone)]
pub struct Bridge {
    base_url: String,
    http: reqwest::Client,
}

impl Bridge {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns an error for an empty base URL or when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TerminalError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(TerminalError::Internal {
                message: "API base URL is empty".into(),
                context: Some("Creating bridge".into()),
            });
        }

        let http =
            reqwest::Client::builder().timeout(timeout).build().context("Building HTTP client")?;
        Ok(Self { base_url: base_url.to_owned(), http })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Loads the session content. Never fails: any error yields the bundled copy.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn load(&self) -> (ContentBundle, DataSource) {
        match self.fetch_portfolio().await {
            Ok(data) => {
                info!("Portfolio loaded from the API");
                (data, DataSource::Api)
            }
            Err(err) => {
                warn!(error = %err, "API unavailable, using the bundled portfolio");
                (bundled(), DataSource::Bundled)
            }
        }
    }

    /// Fetches `GET /api/portfolio` and decodes its `data`.
    ///
    /// # Errors
    /// Transport failures, non-2xx statuses, failure envelopes and undecodable bodies.
    pub async fn fetch_portfolio(&self) -> Result<ContentBundle, TerminalError> {
        into_data(self.get_json::<ApiEnvelope<ContentBundle>>("/api/portfolio").await?)
    }

    /// Reports one command to `POST /api/analytics/command`.
    ///
    /// # Errors
    /// Transport failures, non-2xx statuses and failure envelopes.
    pub async fn track(&self, command: &str) -> Result<(), TerminalError> {
        let response = self
            .http
            .post(self.endpoint("/api/analytics/command"))
            .json(&serde_json::json!({ "command": command }))
            .send()
            .await
            .context("Tracking command")?
            .error_for_status()
            .context("Tracking command")?;

        let bytes = response.bytes().await.context("Reading tracking response")?;
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_slice(&bytes).context("Decoding tracking response")?;
        if envelope.success {
            Ok(())
        } else {
            Err(TerminalError::Api {
                message: envelope.message.unwrap_or_default().into(),
                context: Some("Tracking command".into()),
            })
        }
    }

    /// Reads `GET /health` and returns its `success` flag.
    ///
    /// # Errors
    /// Transport failures, non-2xx statuses and undecodable bodies.
    pub async fn health(&self) -> Result<bool, TerminalError> {
        Ok(self.get_json::<HealthProbe>("/health").await?.success)
    }

    /// Posts a contact form submission and returns the envelope as sent by
    /// the server, validation failures included.
    ///
    /// # Errors
    /// Transport failures and bodies that are not an envelope.
    pub async fn submit_contact(
        &self,
        request: &ContactRequest,
    ) -> Result<ApiEnvelope<SubmissionReceipt>, TerminalError> {
        let response = self
            .http
            .post(self.endpoint("/api/contact"))
            .json(request)
            .send()
            .await
            .context("Submitting contact form")?;

        let bytes = response.bytes().await.context("Reading contact response")?;
        serde_json::from_slice(&bytes).context("Decoding contact response")
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TerminalError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .context(format!("GET {path}"))?
            .error_for_status()
            .context(format!("GET {path}"))?;

        let bytes = response.bytes().await.context(format!("Reading {path}"))?;
        serde_json::from_slice(&bytes).context(format!("Decoding {path}"))
    }
}

/// Tracks commands through the bridge on spawned tasks.
///
/// Tasks run detached from the session; [`BridgeTracker::flush`] waits for the
/// pending ones before the runtime goes away.
#[derive(Debug, Clone)]
pub struct BridgeTracker {
    bridge: Bridge,
    runtime: Handle,
    pending: Arc<Mutex<JoinSet<()>>>,
}

impl BridgeTracker {
    /// Binds the tracker to the current Tokio runtime.
    ///
    /// # Errors
    /// Returns an error when called outside a Tokio runtime.
    pub fn new(bridge: Bridge) -> Result<Self, TerminalError> {
        let runtime = Handle::try_current().map_err(|err| TerminalError::Internal {
            message: err.to_string().into(),
            context: Some("Creating usage tracker".into()),
        })?;
        Ok(Self { bridge, runtime, pending: Arc::default() })
    }

    /// Number of tracking calls not yet finished.
    #[must_use]
    pub fn pending(&self) -> usize {
        let mut pending = self.pending.lock();
        while pending.try_join_next().is_some() {}
        pending.len()
    }

    /// Waits up to `timeout` for pending tracking calls and returns how many were abandoned.
    pub async fn flush(&self, timeout: Duration) -> usize {
        let mut pending = std::mem::take(&mut *self.pending.lock());
        let drained = tokio::time::timeout(timeout, async {
            while pending.join_next().await.is_some() {}
        })
        .await;

        if drained.is_err() {
            debug!(abandoned = pending.len(), "Usage tracking flush timed out");
        }
        pending.len()
    }
}

impl CommandTracker for BridgeTracker {
    fn track(&self, command: &str) {
        let bridge = self.bridge.clone();
        let command = command.to_owned();
        let mut pending = self.pending.lock();
        while pending.try_join_next().is_some() {}
        pending.spawn_on(
            async move {
                if let Err(err) = bridge.track(&command).await {
                    debug!(error = %err, command = %command, "Usage tracking failed");
                }
            },
            &self.runtime,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_portfolio_decodes() {
        let data = bundled();
        assert_eq!(data.about.map(|about| about.name).as_deref(), Some("Kalpick Sharma"));
        assert_eq!(data.links.map(|links| links.len()), Some(5));
    }

    #[test]
    fn base_urls_are_normalized() {
        let bridge = Bridge::new(" http://localhost:5000/ ", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(bridge.base_url(), "http://localhost:5000");
        assert_eq!(bridge.endpoint("/health"), "http://localhost:5000/health");
        assert!(Bridge::new("  ", DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn failure_envelopes_carry_their_message() {
        let err = into_data(ApiEnvelope::<u8>::failure("Database down")).unwrap_err();
        assert!(err.to_string().contains("Database down"));
        let empty = ApiEnvelope { success: true, message: None, data: None::<u8>, errors: None };
        assert!(into_data(empty).is_err());
    }

    #[test]
    fn contact_envelopes_decode_with_and_without_a_receipt() {
        let created: ApiEnvelope<SubmissionReceipt> = serde_json::from_str(
            r#"{"success":true,"message":"ok","data":{"id":"abc","name":"Ada","email":"a@b.c","submittedAt":"2024-01-01T00:00:00Z"}}"#,
        )
        .unwrap();
        assert_eq!(created.data.map(|receipt| receipt.id).as_deref(), Some("abc"));

        let rejected: ApiEnvelope<SubmissionReceipt> = serde_json::from_str(
            r#"{"success":false,"message":"Validation error","errors":["\"name\" is required"]}"#,
        )
        .unwrap();
        assert!(rejected.data.is_none());
        assert_eq!(rejected.errors.map(|errors| errors.len()), Some(1));
    }
}
