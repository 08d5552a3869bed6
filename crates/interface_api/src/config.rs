//! API configuration

use core_kernel::{CenturyPolicy, CoreError};
use serde::Deserialize;
use std::time::Duration;

/// API configuration
///
/// Read from `WILL_`-prefixed environment variables; anything unset keeps
/// its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log filter directive when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Fixed two-digit pivot year for NRIC century inference
    ///
    /// Unset means years are resolved relative to today.
    pub century_pivot: Option<u8>,
    /// Upper bound on one advisory lookup
    pub advisory_timeout_ms: u64,
    /// Largest batch accepted by the batch endpoint
    pub batch_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_json: false,
            century_pivot: None,
            advisory_timeout_ms: 5_000,
            batch_limit: 50,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, CoreError> {
        let config: ApiConfig = config::Config::builder()
            .add_source(config::Environment::with_prefix("WILL").try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the server cannot run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.host.trim().is_empty() {
            return Err(CoreError::configuration("host must not be empty"));
        }
        if self.batch_limit == 0 {
            return Err(CoreError::configuration("batch_limit must be at least 1"));
        }
        if self.advisory_timeout_ms == 0 {
            return Err(CoreError::configuration("advisory_timeout_ms must be positive"));
        }
        if let Some(pivot) = self.century_pivot {
            if pivot > 99 {
                return Err(CoreError::configuration(format!(
                    "century_pivot must be a two-digit year, got {}",
                    pivot
                )));
            }
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn century_policy(&self) -> CenturyPolicy {
        self.century_pivot
            .map_or(CenturyPolicy::RelativeToToday, CenturyPolicy::Pivot)
    }

    pub fn advisory_timeout(&self) -> Duration {
        Duration::from_millis(self.advisory_timeout_ms)
    }
}
