//! Engine configuration.
//!
//! The only gameplay tunable is the mismatch delay: how long a mismatched
//! pair stays visible before the engine turns it back face-down. The seed
//! makes deck order reproducible for tests and replays. Hosts that poll
//! snapshots instead of draining events can switch event recording off.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default time a mismatched pair stays face-up, in milliseconds.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1_000;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay before a mismatched pair is hidden again (default: 1000).
    /// Zero hides the pair on the next clock advance.
    pub mismatch_delay_ms: u64,

    /// Random seed for deck shuffling.
    /// `None` seeds from entropy; the chosen seed is logged.
    pub seed: Option<u64>,

    /// Record events for `drain_events` (default: true).
    pub record_events: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            seed: None,
            record_events: true,
        }
    }
}

impl EngineConfig {
    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn event recording on or off.
    #[must_use]
    pub fn with_event_recording(mut self, record: bool) -> Self {
        self.record_events = record;
        self
    }

    /// The mismatch delay as a `Duration`.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use memory_match::core::EngineConfig;
    ///
    /// let config = EngineConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.mismatch_delay_ms, 1000);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.mismatch_delay(), Duration::from_secs(1));
        assert_eq!(config.seed, None);
        assert!(config.record_events);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_mismatch_delay(Duration::from_millis(250))
            .with_seed(42)
            .with_event_recording(false);

        assert_eq!(config.mismatch_delay_ms, 250);
        assert_eq!(config.seed, Some(42));
        assert!(!config.record_events);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{ "mismatch_delay_ms": 0 }"#).unwrap();

        assert_eq!(config.mismatch_delay(), Duration::ZERO);
        assert_eq!(config.seed, None);
        assert!(config.record_events);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = EngineConfig::from_json(r#"{ "mismatch_delay_ms": "soon" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = EngineConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
