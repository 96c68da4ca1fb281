//! Reference Allocation Provider
//!
//! Loads the per-risk-level target allocations from a JSON configuration
//! artifact. The allocations are mandatory: a missing file or a missing risk
//! level is fatal, and no default allocation is ever fabricated.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use advisor_core::{AdvisorError, ReferenceAllocation, Result, RiskProfile};

/// Default location of the reference allocation artifact.
pub const DEFAULT_CONFIG_PATH: &str = "config/reference_allocations.json";

/// Environment variable overriding the artifact location.
pub const CONFIG_PATH_ENV: &str = "REFERENCE_CONFIG";

/// All configured reference allocations, keyed by risk level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceBook {
    allocations: BTreeMap<RiskProfile, ReferenceAllocation>,
}

impl ReferenceBook {
    pub fn new(allocations: BTreeMap<RiskProfile, ReferenceAllocation>) -> Self {
        Self { allocations }
    }

    /// Load the reference book from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AdvisorError::Config(format!(
                "cannot open reference allocations at {}: {e}",
                path.display()
            ))
        })?;
        let book: Self = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            AdvisorError::Config(format!(
                "malformed reference allocations at {}: {e}",
                path.display()
            ))
        })?;

        tracing::info!(
            path = %path.display(),
            risk_levels = book.allocations.len(),
            "loaded reference allocations"
        );
        Ok(book)
    }

    /// Load from the path in `REFERENCE_CONFIG`, falling back to the default
    /// location.
    pub fn from_env() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::from_path(path)
    }

    /// Target allocation for a declared risk level.
    pub fn allocation_for(&self, risk: RiskProfile) -> Result<&ReferenceAllocation> {
        self.allocations
            .get(&risk)
            .ok_or(AdvisorError::MissingAllocation(risk))
    }

    /// Number of configured risk levels.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}
