use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors raised while assembling the layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `rollcall.toml`). If no path is provided,
///    it defaults to `"rollcall"` in the current working directory. The file is optional: a
///    desktop client must start with pure defaults when no file exists.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `ROLLCALL__`. Nested structures are accessed using double underscores
///    (e.g., `ROLLCALL__SUBMISSION__DELAY_MS` maps to `submission.delay_ms`).
///
/// # Errors
/// Returns [`ConfigError`] if the file exists but is malformed, if an environment
/// override cannot be parsed, or if deserialization into `T` fails.
///
/// # Example
/// ```rust
/// use rollcall_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     delay_ms: u64,
/// }
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("rollcall"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("ROLLCALL")
                .separator("__")
                .convert_case(config::Case::Snake), // Env var overrides (e.g., ROLLCALL__LOG__FILTER)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
