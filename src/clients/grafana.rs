//! Grafana dashboards client, proxied through the platform's REST API.
//!
//! Dashboards are opaque JSON documents; only the envelope is typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use super::rest::RestClient;
use crate::error::ClientError;


/// Body of `POST /grafana/api/dashboards/db`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSaveRequest {
    pub dashboard: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSaveResponse {
    #[serde(default)]
    pub id: i64,
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// Response of `GET /grafana/api/dashboards/uid/{uid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFull {
    pub dashboard: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<DashboardMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GrafanaClient {
    rest: RestClient,
}

impl GrafanaClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Create or overwrite a dashboard.
    #[instrument(skip(self, request), fields(overwrite = request.overwrite), name = "grafana.save")]
    pub async fn save(
        &self,
        request: &DashboardSaveRequest,
    ) -> Result<Option<DashboardSaveResponse>, ClientError> {
        self.rest.post(&["grafana", "api", "dashboards", "db"], request).await
    }

    #[instrument(skip(self), name = "grafana.get")]
    pub async fn get(&self, uid: &str) -> Result<Option<DashboardFull>, ClientError> {
        self.rest
            .get(&["grafana", "api", "dashboards", "uid", uid])
            .await
    }

    #[instrument(skip(self), name = "grafana.delete")]
    pub async fn delete(&self, uid: &str) -> Result<(), ClientError> {
        self.rest
            .delete(&["grafana", "api", "dashboards", "uid", uid])
            .await
    }
}
