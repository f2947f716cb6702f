//! Ledger configuration loading, including the policy applied to partially invalid results.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the ledger looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/ledger.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAME_LEDGER_CONFIG_PATH";

/// What to do with a result whose player, game, or score is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultPolicy {
    /// Reject the whole result; nothing is recorded.
    #[default]
    Atomic,
    /// Record the result anyway, leaving every rejected field unset.
    Partial,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Immutable configuration of a [`Ledger`](crate::state::Ledger).
pub struct LedgerConfig {
    /// Policy applied by [`Ledger::record_result`](crate::state::Ledger::record_result).
    pub result_policy: ResultPolicy,
}

impl LedgerConfig {
    /// Configuration with an explicit result policy.
    pub fn with_result_policy(result_policy: ResultPolicy) -> Self {
        Self { result_policy }
    }

    /// Load the configuration from the default location, honouring the environment override.
    pub fn load() -> Self {
        Self::load_from(&resolve_config_path())
    }

    /// Load the configuration from `path`, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        result_policy = ?config.result_policy,
                        "loaded ledger config"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    result_policy: ResultPolicy,
}

impl From<RawConfig> for LedgerConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            result_policy: value.result_policy,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    fn scratch_file(contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("game-ledger-{}.json", Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_policy_is_atomic() {
        assert_eq!(LedgerConfig::default().result_policy, ResultPolicy::Atomic);
    }

    #[test]
    fn parses_partial_policy() {
        let raw: RawConfig = serde_json::from_str(r#"{ "result_policy": "partial" }"#).unwrap();
        let config: LedgerConfig = raw.into();
        assert_eq!(config.result_policy, ResultPolicy::Partial);
    }

    #[test]
    fn missing_policy_uses_default() {
        let raw: RawConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(LedgerConfig::from(raw), LedgerConfig::default());
    }

    #[test]
    fn load_from_missing_file_falls_back() {
        let path = env::temp_dir().join(format!("game-ledger-missing-{}.json", Uuid::new_v4()));
        assert_eq!(LedgerConfig::load_from(&path), LedgerConfig::default());
    }

    #[test]
    fn load_from_file() {
        let path = scratch_file(r#"{ "result_policy": "partial" }"#);
        let config = LedgerConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config, LedgerConfig::with_result_policy(ResultPolicy::Partial));
    }

    #[test]
    fn load_honours_env_override() {
        let path = scratch_file(r#"{ "result_policy": "partial" }"#);

        // SAFETY: no other test reads or writes this variable.
        unsafe { env::set_var(CONFIG_PATH_ENV, &path) };
        assert_eq!(resolve_config_path(), path);
        let overridden = LedgerConfig::load();

        unsafe { env::set_var(CONFIG_PATH_ENV, "") };
        assert_eq!(resolve_config_path(), PathBuf::from(DEFAULT_CONFIG_PATH));
        let fallback = LedgerConfig::load();

        unsafe { env::remove_var(CONFIG_PATH_ENV) };
        fs::remove_file(&path).unwrap();

        assert_eq!(overridden.result_policy, ResultPolicy::Partial);
        assert_eq!(fallback, LedgerConfig::default());
    }

    #[test]
    fn load_from_malformed_file_falls_back() {
        let path = scratch_file(r#"{ "result_policy": "sometimes" }"#);
        let config = LedgerConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config, LedgerConfig::default());
    }
}
