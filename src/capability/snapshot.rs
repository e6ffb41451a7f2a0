use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Usability state reported by the capability registry for one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapabilityState {
    Ready,
    NeedsConfig,
    Beta,
    NotImplemented,
}

/// One capability record: how usable a component is right now, and what it
/// would take to make it usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRecord {
    pub status: CapabilityState,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub dependencies_met: bool,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub setup_steps: Vec<String>,
}

impl CapabilityRecord {
    pub fn ready() -> Self {
        Self::with_status(CapabilityState::Ready)
    }

    pub fn beta(message: impl Into<String>) -> Self {
        let mut record = Self::with_status(CapabilityState::Beta);
        record.message = message.into();
        record
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        let mut record = Self::with_status(CapabilityState::NotImplemented);
        record.message = message.into();
        record
    }

    pub fn needs_config(dependencies: Vec<String>, setup_steps: Vec<String>, met: bool) -> Self {
        let mut record = Self::with_status(CapabilityState::NeedsConfig);
        record.dependencies = dependencies;
        record.setup_steps = setup_steps;
        record.dependencies_met = met;
        record
    }

    fn with_status(status: CapabilityState) -> Self {
        Self {
            status,
            message: String::new(),
            dependencies_met: false,
            dependencies: Vec::new(),
            setup_steps: Vec::new(),
        }
    }
}

/// The fixed lookup categories of the capability registry, in resolution
/// order. The first category holding a matching record wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityCategory {
    Models,
    Inputs,
    Processing,
    Actions,
    Outputs,
    Advanced,
    Drone,
}

impl CapabilityCategory {
    pub const ALL: [CapabilityCategory; 7] = [
        CapabilityCategory::Models,
        CapabilityCategory::Inputs,
        CapabilityCategory::Processing,
        CapabilityCategory::Actions,
        CapabilityCategory::Outputs,
        CapabilityCategory::Advanced,
        CapabilityCategory::Drone,
    ];
}

/// A point-in-time snapshot of the capability registry, keyed by category
/// and then by component id or node type.
///
/// Every category is optional on the wire; a missing category simply holds
/// no records, and nodes that resolve to no record are treated as usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    #[serde(default)]
    pub models: AHashMap<String, CapabilityRecord>,
    #[serde(default)]
    pub inputs: AHashMap<String, CapabilityRecord>,
    #[serde(default)]
    pub processing: AHashMap<String, CapabilityRecord>,
    #[serde(default)]
    pub actions: AHashMap<String, CapabilityRecord>,
    #[serde(default)]
    pub outputs: AHashMap<String, CapabilityRecord>,
    #[serde(default)]
    pub advanced: AHashMap<String, CapabilityRecord>,
    #[serde(default)]
    pub drone: AHashMap<String, CapabilityRecord>,
}

impl CapabilitySnapshot {
    /// Parses a snapshot from the capability registry's JSON export.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(|e| ParseError::InvalidStatusJson(e.to_string()))
    }

    pub fn category(&self, category: CapabilityCategory) -> &AHashMap<String, CapabilityRecord> {
        match category {
            CapabilityCategory::Models => &self.models,
            CapabilityCategory::Inputs => &self.inputs,
            CapabilityCategory::Processing => &self.processing,
            CapabilityCategory::Actions => &self.actions,
            CapabilityCategory::Outputs => &self.outputs,
            CapabilityCategory::Advanced => &self.advanced,
            CapabilityCategory::Drone => &self.drone,
        }
    }
}
