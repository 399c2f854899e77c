//! Deployment result types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a deployment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Success,
    Failed,
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentStatus::Success => write!(f, "success"),
            DeploymentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Where and when a token contract was deployed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentResult {
    pub address: String,
    pub network: String,
    pub timestamp: DateTime<Utc>,
    pub status: DeploymentStatus,
}
