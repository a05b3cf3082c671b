//! Verifier configuration

use serde::{Deserialize, Serialize};

/// Settings of a [`PlanRegistry`](crate::model::PlanRegistry).
///
/// Deserializes from partial input; missing keys take their defaults.
///
/// ```rust,ignore
/// let config: VerifierConfig = serde_json::from_str(r#"{ "trace_execution": true }"#)?;
/// PlanRegistry::install_global(config).ok();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Emit a `trace` event for every plan execution.
    pub trace_execution: bool,
    /// Number of plan slots reserved up front.
    pub initial_capacity: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            trace_execution: false,
            initial_capacity: 16,
        }
    }
}

impl VerifierConfig {
    #[must_use]
    pub fn with_trace_execution(mut self, enabled: bool) -> Self {
        self.trace_execution = enabled;
        self
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
