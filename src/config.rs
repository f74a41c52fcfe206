//! Store configuration.

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// How the id counter reacts to entities saved with a caller-supplied id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Advance the counter past every caller-supplied id, so a later
    /// allocation never lands on an id that is already in use.
    #[default]
    Reconcile,
    /// Leave the counter alone. Allocation still steps over ids that are in
    /// use, so lower free ids below a manual id get handed out first.
    Preserve,
}

/// Configuration for an `InMemoryEntityStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// First id handed out by the counter.
    pub first_id: u64,
    pub id_policy: IdPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            first_id: 1,
            id_policy: IdPolicy::default(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        serde_json::from_str(json).map_err(|e| StoreError::Config(e.to_string()))
    }

    pub fn with_first_id(mut self, first_id: u64) -> Self {
        self.first_id = first_id;
        self
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }
}
