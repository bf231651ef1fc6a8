//! Grafana dashboards managed as raw JSON.
//!
//! `config_json` holds the dashboard document. It is stored in a normalized
//! form (compact, keys sorted, without the server-managed `id` and `version`)
//! so that reads compare equal to what was written.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{deleted, empty_response, from_state, read_or_removed, require_id, to_state, Resource};
use crate::clients::grafana::{DashboardFull, DashboardSaveRequest};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

const TYPE_NAME: &str = "observability_grafana_dashboard";

const SERVER_MANAGED: [&str; 2] = ["id", "version"];

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct DashboardModel {
    id: Option<String>,
    config_json: String,
    folder_uid: Option<String>,
    url: Option<String>,
}

/// Parse a dashboard document and strip server-managed keys.
fn parse_dashboard(config_json: &str) -> Result<serde_json::Map<String, Value>, ProviderError> {
    match serde_json::from_str(config_json) {
        Ok(Value::Object(mut dashboard)) => {
            for key in SERVER_MANAGED {
                dashboard.remove(key);
            }
            Ok(dashboard)
        },
        Ok(_) => Err(ProviderError::Validation(
            "config_json must be a JSON object".to_string(),
        )),
        Err(e) => Err(ProviderError::Validation(format!(
            "config_json is not valid JSON: {}",
            e
        ))),
    }
}

fn normalize(dashboard: serde_json::Map<String, Value>) -> Result<String, ProviderError> {
    Ok(serde_json::to_string(&Value::Object(dashboard))?)
}

impl DashboardModel {
    fn flatten(&mut self, full: DashboardFull) -> Result<(), ProviderError> {
        let mut dashboard = match full.dashboard {
            Value::Object(dashboard) => dashboard,
            _ => return Err(empty_response("Error reading dashboard")),
        };
        for key in SERVER_MANAGED {
            dashboard.remove(key);
        }
        if let Some(uid) = dashboard.get("uid").and_then(Value::as_str) {
            self.id = Some(uid.to_string());
        }
        self.config_json = normalize(dashboard)?;
        if let Some(meta) = full.meta {
            self.folder_uid = meta.folder_uid.filter(|uid| !uid.is_empty());
            self.url = meta.url;
        }
        Ok(())
    }
}

pub struct GrafanaDashboardResource;

impl GrafanaDashboardResource {
    /// Save the planned dashboard and read it back.
    async fn save(
        &self,
        clients: &ClientSet,
        mut model: DashboardModel,
        uid: Option<String>,
        summary: &str,
    ) -> Result<Value, ProviderError> {
        let mut dashboard = parse_dashboard(&model.config_json)?;
        let overwrite = uid.is_some();
        if let Some(uid) = uid {
            dashboard.insert("uid".to_string(), Value::String(uid));
        }

        let saved = clients
            .grafana()
            .save(&DashboardSaveRequest {
                dashboard: Value::Object(dashboard),
                folder_uid: model.folder_uid.clone(),
                overwrite,
                message: None,
            })
            .await
            .map_err(|e| ProviderError::from_client(summary, e))?
            .ok_or_else(|| empty_response(summary))?;
        model.id = Some(saved.uid.clone());
        model.url = saved.url;

        let full = clients
            .grafana()
            .get(&saved.uid)
            .await
            .map_err(|e| ProviderError::from_client("Error reading dashboard", e))?
            .ok_or_else(|| empty_response("Error reading dashboard"))?;
        model.flatten(full)?;
        to_state(&model)
    }
}

#[async_trait]
impl Resource for GrafanaDashboardResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_description("A Grafana dashboard")
            .with_attribute(
                "id",
                Attribute::computed_string().with_description("Dashboard uid"),
            )
            .with_attribute(
                "config_json",
                Attribute::required_string().with_description("Dashboard JSON document"),
            )
            .with_attribute("folder_uid", Attribute::optional_string())
            .with_attribute("url", Attribute::computed_string())
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let model: DashboardModel = from_state(planned)?;
        self.save(clients, model, None, "Error creating dashboard")
            .await
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let mut model: DashboardModel = from_state(current)?;
        let uid = require_id(model.id.as_deref(), TYPE_NAME)?;

        let result = clients.grafana().get(&uid).await;
        match read_or_removed(result, TYPE_NAME, &uid, "Error reading dashboard")? {
            Some(full) => {
                let full = full.ok_or_else(|| empty_response("Error reading dashboard"))?;
                model.flatten(full)?;
                to_state(&model)
            },
            None => Ok(Value::Null),
        }
    }

    async fn update(
        &self,
        clients: &ClientSet,
        prior: Value,
        planned: Value,
    ) -> Result<Value, ProviderError> {
        let prior: DashboardModel = from_state(prior)?;
        let model: DashboardModel = from_state(planned)?;
        let uid = require_id(prior.id.as_deref(), TYPE_NAME)?;
        self.save(clients, model, Some(uid), "Error updating dashboard")
            .await
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: DashboardModel = from_state(current)?;
        let uid = require_id(model.id.as_deref(), TYPE_NAME)?;
        let result = clients.grafana().delete(&uid).await;
        deleted(result, TYPE_NAME, &uid, "Error deleting dashboard")
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::testing::{configured_provider, MockPlatform};

    #[test]
    fn test_parse_dashboard_strips_server_keys() {
        let dashboard = parse_dashboard(r#"{"title":"x","id":4,"version":9}"#).unwrap();
        assert_eq!(normalize(dashboard).unwrap(), r#"{"title":"x"}"#);

        assert!(matches!(
            parse_dashboard("[1, 2]"),
            Err(ProviderError::Validation(_))
        ));
        assert!(parse_dashboard("{").is_err());
    }

    #[tokio::test]
    async fn test_create_then_update_overwrites_by_uid() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/grafana/api/dashboards/db")
            .match_body(Matcher::Json(json!({
                "dashboard": {"title": "Latency"},
                "overwrite": false,
            })))
            .with_status(200)
            .with_body(r#"{"id":12,"uid":"abc","url":"/d/abc/latency","status":"success","version":1}"#)
            .create_async()
            .await;
        let overwrite = server
            .mock("POST", "/grafana/api/dashboards/db")
            .match_body(Matcher::PartialJson(json!({
                "dashboard": {"uid": "abc", "title": "Latency p99"},
                "overwrite": true,
            })))
            .with_status(200)
            .with_body(r#"{"id":12,"uid":"abc","url":"/d/abc/latency","status":"success","version":2}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/grafana/api/dashboards/uid/abc")
            .with_status(200)
            .with_body(
                json!({
                    "dashboard": {"id": 12, "uid": "abc", "title": "Latency", "version": 1},
                    "meta": {"folderUid": "", "url": "/d/abc/latency"},
                })
                .to_string(),
            )
            .expect_at_least(1)
            .create_async()
            .await;

        let platform = MockPlatform::start();
        let tester = configured_provider(&platform, &server.url()).await;

        let state = tester
            .create(
                "observability_grafana_dashboard",
                json!({"config_json": r#"{"title": "Latency"}"#}),
            )
            .await
            .unwrap();
        create.assert_async().await;
        assert_eq!(state["id"], "abc");
        assert_eq!(state["config_json"], r#"{"title":"Latency","uid":"abc"}"#);
        assert_eq!(state["url"], "/d/abc/latency");
        assert!(state["folder_uid"].is_null());

        let mut planned = state.clone();
        planned["config_json"] = json!(r#"{"title":"Latency p99"}"#);
        tester
            .update("observability_grafana_dashboard", state, planned)
            .await
            .unwrap();
        overwrite.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_is_rejected_before_any_request() {
        let server = mockito::Server::new_async().await;
        let platform = MockPlatform::start();
        let tester = configured_provider(&platform, &server.url()).await;

        let err = tester
            .create(
                "observability_grafana_dashboard",
                json!({"config_json": "not json"}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
    }
}
