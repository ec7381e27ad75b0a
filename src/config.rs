//! Application configuration loaded from environment variables.
//!
//! - `BOWL_API_URL`: backend base URL (default `http://localhost:5000`)
//! - `BOWL_REQUEST_TIMEOUT_MS`: per-request timeout (default `5000`)
//! - `BOWL_ORDER_POLICY`: `lenient` or `strict` (default `lenient`)
//! - `BOWL_OFFLINE`: `1`/`true` to run without contacting the backend
//! - `BOWL_LOG_FILE`: file to write logs to; logging is off when unset

use std::path::PathBuf;
use std::time::Duration;

use crate::order::OrderPolicy;

/// Default backend endpoint.
const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default per-request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub order_policy: OrderPolicy,
    pub log_file: Option<PathBuf>,
}

/// Backend connection settings.
#[derive(Debug)]
pub struct BackendConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub offline: bool,
}

/// Loads the application configuration from environment variables.
///
/// Empty variables are treated as unset.
///
/// # Errors
///
/// Returns [`BowlError::Config`](crate::BowlError::Config) if the timeout is
/// not a positive integer, the order policy is unknown, or `BOWL_OFFLINE`
/// is not a boolean.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url = non_empty_var("BOWL_API_URL")
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let timeout_ms = match non_empty_var("BOWL_REQUEST_TIMEOUT_MS") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(ms) if ms > 0 => ms,
            _ => {
                return Err(crate::BowlError::Config(format!(
                    "BOWL_REQUEST_TIMEOUT_MS must be a positive integer, got `{raw}`"
                )));
            }
        },
        None => DEFAULT_TIMEOUT_MS,
    };

    let order_policy = match non_empty_var("BOWL_ORDER_POLICY") {
        Some(raw) => raw.parse()?,
        None => OrderPolicy::default(),
    };

    let offline = match non_empty_var("BOWL_OFFLINE").as_deref() {
        None | Some("0") | Some("false") => false,
        Some("1") | Some("true") => true,
        Some(other) => {
            return Err(crate::BowlError::Config(format!(
                "BOWL_OFFLINE must be 1/0/true/false, got `{other}`"
            )));
        }
    };

    Ok(AppConfig {
        backend: BackendConfig {
            api_url,
            timeout: Duration::from_millis(timeout_ms),
            offline,
        },
        order_policy,
        log_file: non_empty_var("BOWL_LOG_FILE").map(PathBuf::from),
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    const VARS: [&str; 5] = [
        "BOWL_API_URL",
        "BOWL_REQUEST_TIMEOUT_MS",
        "BOWL_ORDER_POLICY",
        "BOWL_OFFLINE",
        "BOWL_LOG_FILE",
    ];

    /// Serializes tests that touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Helper that sets the given env vars (clearing all other `BOWL_*`
    /// vars), runs `f`, then restores the originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let originals: Vec<(&str, Option<String>)> =
            VARS.iter().map(|k| (*k, std::env::var(k).ok())).collect();

        for k in VARS {
            // SAFETY: all env access in this module is serialized by ENV_LOCK.
            unsafe { std::env::remove_var(k) };
        }
        for (k, v) in vars {
            // SAFETY: see above.
            unsafe { std::env::set_var(k, v) };
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&[], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.backend.api_url, DEFAULT_API_URL);
            assert_eq!(config.backend.timeout, Duration::from_millis(5_000));
            assert!(!config.backend.offline);
            assert_eq!(config.order_policy, OrderPolicy::Lenient);
            assert!(config.log_file.is_none());
        });
    }

    #[test]
    fn custom_values() {
        with_env(
            &[
                ("BOWL_API_URL", "https://bowls.example.com/"),
                ("BOWL_REQUEST_TIMEOUT_MS", "250"),
                ("BOWL_ORDER_POLICY", "strict"),
                ("BOWL_OFFLINE", "true"),
                ("BOWL_LOG_FILE", "/tmp/bowlr.log"),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.backend.api_url, "https://bowls.example.com");
                assert_eq!(config.backend.timeout, Duration::from_millis(250));
                assert!(config.backend.offline);
                assert_eq!(config.order_policy, OrderPolicy::Strict);
                assert_eq!(config.log_file, Some(PathBuf::from("/tmp/bowlr.log")));
            },
        );
    }

    #[test]
    fn rejects_zero_timeout() {
        with_env(&[("BOWL_REQUEST_TIMEOUT_MS", "0")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("BOWL_REQUEST_TIMEOUT_MS"));
        });
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        with_env(&[("BOWL_REQUEST_TIMEOUT_MS", "soon")], || {
            assert!(fetch_config().is_err());
        });
    }

    #[test]
    fn rejects_unknown_policy() {
        with_env(&[("BOWL_ORDER_POLICY", "optimistic")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("BOWL_ORDER_POLICY"));
        });
    }

    #[test]
    fn rejects_bad_offline_flag() {
        with_env(&[("BOWL_OFFLINE", "yes")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("BOWL_OFFLINE"));
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("BOWL_API_URL", ""),
                ("BOWL_REQUEST_TIMEOUT_MS", ""),
                ("BOWL_ORDER_POLICY", ""),
                ("BOWL_LOG_FILE", ""),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.backend.api_url, DEFAULT_API_URL);
                assert_eq!(config.order_policy, OrderPolicy::Lenient);
                assert!(config.log_file.is_none());
            },
        );
    }
}
