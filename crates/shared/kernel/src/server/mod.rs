//! HTTP plumbing shared by every feature slice: state, errors, extractors and system routes.

mod error;
mod extract;
mod health;
mod router;
mod state;

pub use error::{ApiError, ApiErrorExt, ApiResult};
pub use extract::{ApiJson, ClientMeta};
pub use health::HealthResponse;
pub use router::system_router;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
