//! TCO policy overrides client.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::rest::RestClient;
use crate::error::ClientError;

const OVERRIDES: [&str; 5] = ["api", "v1", "external", "tco", "overrides"];

fn override_path(id: &str) -> [&str; 6] {
    let [a, b, c, d, e] = OVERRIDES;
    [a, b, c, d, e, id]
}

/// Routes logs matching application/subsystem/severity into a cost tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoPolicyOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub priority: String,
    pub severity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsystem_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TcoOverridesClient {
    rest: RestClient,
}

impl TcoOverridesClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    #[instrument(skip(self, policy), name = "tco_overrides.create")]
    pub async fn create(
        &self,
        policy: &TcoPolicyOverride,
    ) -> Result<Option<TcoPolicyOverride>, ClientError> {
        self.rest.post(&OVERRIDES, policy).await
    }

    #[instrument(skip(self), name = "tco_overrides.get")]
    pub async fn get(&self, id: &str) -> Result<Option<TcoPolicyOverride>, ClientError> {
        self.rest.get(&override_path(id)).await
    }

    #[instrument(skip(self, policy), name = "tco_overrides.update")]
    pub async fn update(
        &self,
        id: &str,
        policy: &TcoPolicyOverride,
    ) -> Result<Option<TcoPolicyOverride>, ClientError> {
        self.rest.put(&override_path(id), policy).await
    }

    #[instrument(skip(self), name = "tco_overrides.delete")]
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.rest.delete(&override_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::Credentials;

    fn overrides(url: String) -> TcoOverridesClient {
        let credentials = Credentials::new("example.com:443", "k").with_rest_url(url);
        TcoOverridesClient::new(RestClient::new(&credentials).unwrap())
    }

    #[tokio::test]
    async fn test_create_then_update() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/external/tco/overrides")
            .match_body(mockito::Matcher::Json(json!({
                "priority": "low",
                "severity": 1,
                "applicationName": "checkout",
            })))
            .with_status(201)
            .with_body(
                json!({"id": "o-1", "priority": "low", "severity": 1, "applicationName": "checkout"})
                    .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("PUT", "/api/v1/external/tco/overrides/o-1")
            .with_status(200)
            .with_body(r#""ok""#)
            .create_async()
            .await;

        let client = overrides(server.url());
        let mut policy = TcoPolicyOverride {
            priority: "low".to_string(),
            severity: 1,
            application_name: Some("checkout".to_string()),
            ..Default::default()
        };
        let created = client.create(&policy).await.unwrap().unwrap();
        assert_eq!(created.id.as_deref(), Some("o-1"));

        policy.priority = "high".to_string();
        let updated = client.update("o-1", &policy).await.unwrap();
        assert!(updated.is_none());
    }
}
