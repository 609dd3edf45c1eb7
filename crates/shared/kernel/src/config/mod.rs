use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Environment prefix used by the server configuration.
pub const SERVER_ENV_PREFIX: &str = "FOLIO";

/// Loads the server configuration: an optional file layered with `FOLIO__*` variables.
///
/// See [`load_layered_config`] for the rules.
///
/// # Errors
/// Returns an error when the given file is missing or the merged values do not fit `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered_config(path, "server", SERVER_ENV_PREFIX)
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from `path`, which must exist when given. Without a path the
///    loader looks for `default_name` (any format supported by `config`) and skips it when absent.
/// 2. **Environment Overrides**: Overlays values from variables prefixed with `<prefix>__`.
///    Nested structures use double underscores (e.g., `FOLIO__DATABASE__URL` maps to `database.url`).
///
/// # Errors
/// This function will return an error if:
/// * The specified configuration file cannot be found.
/// * The merged content does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_layered_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig =
///     load_layered_config(Some("config/local.toml"), "local", "APP").unwrap_or_default();
/// ```
pub fn load_layered_config<T>(
    path: Option<impl AsRef<Path>>,
    default_name: &str,
    prefix: &str,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => {
            let path = path.as_ref();
            info!("Loading config from {}", path.display());
            File::from(path).required(true)
        }
        None => File::with_name(default_name).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(prefix).separator("__").convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
