use serde::{Deserialize, Serialize};

// ===== Service Response Types =====

/// Error body returned by the jobs API on non-2xx responses
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message).filter(|m| !m.trim().is_empty())
    }
}

/// Liveness payload from `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl HealthStatus {
    pub const UNHEALTHY: &'static str = "unhealthy";

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: Self::UNHEALTHY.to_string(),
            error: Some(error.into()),
            details: serde_json::Map::new(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status != Self::UNHEALTHY && self.error.is_none()
    }
}

// ===== Derived View Models =====

/// Jobs grouped by a shared company or location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub name: String,
    pub job_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_jobs: usize,
    pub companies: usize,
    pub locations: usize,
    pub recent_jobs: usize,
}
