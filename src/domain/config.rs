use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TARGET_URL: &str = "http://127.0.0.1:8080/";
pub const DEFAULT_WAVE_COUNT: u64 = 1000;
pub const DEFAULT_BATCH_SIZE: u32 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1000;

/// Shape of a dispatch run. The binary always runs with [`DispatchConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DispatchConfig {
    pub target_url: String,
    pub wave_count: u64,
    pub batch_size: u32,
    pub request_timeout_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            wave_count: DEFAULT_WAVE_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl DispatchConfig {
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.wave_count == 0 {
            return Err(DispatchError::InvalidConfig(
                "waveCount must be greater than 0".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(DispatchError::InvalidConfig(
                "batchSize must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(DispatchError::InvalidConfig(
                "requestTimeoutMs must be greater than 0".to_string(),
            ));
        }
        reqwest::Url::parse(&self.target_url).map_err(|err| {
            DispatchError::InvalidConfig(format!("Invalid target URL `{}`: {err}", self.target_url))
        })?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn total_requests(&self) -> u64 {
        self.wave_count.saturating_mul(u64::from(self.batch_size))
    }
}
