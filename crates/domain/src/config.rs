//! Configuration structures for the scheduling core.

use serde::{Deserialize, Serialize};

/// Default minimum time a job must have been suspended before the
/// scheduler considers resuming it.
pub const DEFAULT_MINIMUM_SUSPEND_DURATION_MILLIS: u64 = 60_000;

/// Scheduler configuration.
///
/// Misconfiguration must never halt scheduling: an absent or unknown
/// `strategy_identifier` resolves to the first-come-first-serve strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Identifier of the job selection strategy, e.g.
    /// `"only-one-scan-per-project-at-a-time"`. `None` selects the
    /// first-come-first-serve default.
    #[serde(default)]
    pub strategy_identifier: Option<String>,

    /// Minimum suspend duration in milliseconds before a suspended job is
    /// eligible for resume.
    #[serde(default = "default_minimum_suspend_duration_millis")]
    pub minimum_suspend_duration_millis: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            strategy_identifier: None,
            minimum_suspend_duration_millis: DEFAULT_MINIMUM_SUSPEND_DURATION_MILLIS,
        }
    }
}

fn default_minimum_suspend_duration_millis() -> u64 {
    DEFAULT_MINIMUM_SUSPEND_DURATION_MILLIS
}

#[cfg(test)]
mod tests {
    //! Unit tests for scheduler configuration.
    use super::*;

    /// Validates `SchedulerConfig::default` behavior for the default values
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `config.strategy_identifier` equals `None`.
    /// - Confirms `config.minimum_suspend_duration_millis` equals `60_000`.
    #[test]
    fn test_default_config() {
        let config = SchedulerConfig::default();

        assert_eq!(config.strategy_identifier, None);
        assert_eq!(config.minimum_suspend_duration_millis, 60_000);
    }

    /// Validates `serde_json::from_str` behavior for the partial config
    /// deserialization scenario.
    ///
    /// Assertions:
    /// - Confirms missing fields fall back to documented defaults.
    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SchedulerConfig =
            serde_json::from_str(r#"{"strategy_identifier":"first-come-first-serve"}"#).unwrap();

        assert_eq!(config.strategy_identifier.as_deref(), Some("first-come-first-serve"));
        assert_eq!(config.minimum_suspend_duration_millis, 60_000);
    }
}
