//! SLO resource and data source.
//!
//! An SLO carries exactly one SLI: request based (good/total event queries)
//! or window based (one query compared against a threshold per window).

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    deleted, empty_response, from_state, read_or_removed, require_id, to_state, DataSource,
    Resource,
};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::generated::slos::{
    slo, ComparisonOperator, CreateSloRequest, DeleteSloRequest, GetSloRequest, Metric,
    ReplaceSloRequest, RequestBasedMetricSli, Slo, SloTimeFrame, WindowBasedMetricSli,
    WindowSloWindow,
};
use crate::schema::{Attribute, AttributeFlags, AttributeType, Block, NestedBlock, Schema};

const TYPE_NAME: &str = "observability_slo";

const TIME_FRAMES: [(&str, SloTimeFrame); 4] = [
    ("7d", SloTimeFrame::Days7),
    ("14d", SloTimeFrame::Days14),
    ("21d", SloTimeFrame::Days21),
    ("28d", SloTimeFrame::Days28),
];

const WINDOWS: [(&str, WindowSloWindow); 2] = [
    ("1m", WindowSloWindow::Minutes1),
    ("5m", WindowSloWindow::Minutes5),
];

const OPERATORS: [(&str, ComparisonOperator); 4] = [
    ("greater_than", ComparisonOperator::GreaterThan),
    ("less_than", ComparisonOperator::LessThan),
    ("greater_than_or_equals", ComparisonOperator::GreaterThanOrEquals),
    ("less_than_or_equals", ComparisonOperator::LessThanOrEquals),
];

fn to_wire<E: Copy + Into<i32>>(
    table: &[(&str, E)],
    value: &str,
    attribute: &str,
) -> Result<i32, ProviderError> {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, e)| (*e).into())
        .ok_or_else(|| {
            ProviderError::Validation(format!("unsupported {} {:?}", attribute, value))
        })
}

fn from_wire<E: Copy + Into<i32>>(table: &[(&str, E)], value: i32) -> Option<String> {
    table
        .iter()
        .find(|(_, e)| (*e).into() == value)
        .map(|(name, _)| name.to_string())
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SloModel {
    id: Option<String>,
    name: String,
    description: Option<String>,
    creator: Option<String>,
    labels: Option<BTreeMap<String, String>>,
    target_threshold_percentage: f64,
    slo_time_frame: Option<String>,
    request_based_metric_sli: Option<RequestBasedSliModel>,
    window_based_metric_sli: Option<WindowBasedSliModel>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RequestBasedSliModel {
    good_events_query: String,
    total_events_query: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct WindowBasedSliModel {
    query: String,
    window: String,
    comparison_operator: String,
    threshold: f64,
}

impl SloModel {
    fn extract(&self) -> Result<Slo, ProviderError> {
        let sli = match (&self.request_based_metric_sli, &self.window_based_metric_sli) {
            (Some(request), None) => slo::Sli::RequestBasedMetricSli(RequestBasedMetricSli {
                good_events: Some(Metric {
                    query: request.good_events_query.clone(),
                }),
                total_events: Some(Metric {
                    query: request.total_events_query.clone(),
                }),
            }),
            (None, Some(window)) => slo::Sli::WindowBasedMetricSli(WindowBasedMetricSli {
                query: Some(Metric {
                    query: window.query.clone(),
                }),
                window: to_wire(&WINDOWS, &window.window, "window")?,
                comparison_operator: to_wire(
                    &OPERATORS,
                    &window.comparison_operator,
                    "comparison_operator",
                )?,
                threshold: window.threshold,
            }),
            _ => {
                return Err(ProviderError::Validation(
                    "exactly one of request_based_metric_sli or window_based_metric_sli must be set"
                        .to_string(),
                ))
            },
        };

        let time_frame = self.slo_time_frame.as_deref().unwrap_or("28d");
        Ok(Slo {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            creator: self.creator.clone(),
            labels: self.labels.clone().unwrap_or_default().into_iter().collect(),
            target_threshold_percentage: self.target_threshold_percentage,
            slo_time_frame: to_wire(&TIME_FRAMES, time_frame, "slo_time_frame")?,
            sli: Some(sli),
        })
    }

    fn flatten(slo: Slo) -> Self {
        let (request_based_metric_sli, window_based_metric_sli) = match slo.sli {
            Some(slo::Sli::RequestBasedMetricSli(sli)) => (
                Some(RequestBasedSliModel {
                    good_events_query: sli.good_events.map(|m| m.query).unwrap_or_default(),
                    total_events_query: sli.total_events.map(|m| m.query).unwrap_or_default(),
                }),
                None,
            ),
            Some(slo::Sli::WindowBasedMetricSli(sli)) => (
                None,
                Some(WindowBasedSliModel {
                    query: sli.query.map(|m| m.query).unwrap_or_default(),
                    window: from_wire(&WINDOWS, sli.window).unwrap_or_default(),
                    comparison_operator: from_wire(&OPERATORS, sli.comparison_operator)
                        .unwrap_or_default(),
                    threshold: sli.threshold,
                }),
            ),
            None => (None, None),
        };

        Self {
            id: slo.id,
            name: slo.name,
            description: slo.description,
            creator: slo.creator,
            labels: (!slo.labels.is_empty()).then(|| slo.labels.into_iter().collect()),
            target_threshold_percentage: slo.target_threshold_percentage,
            slo_time_frame: from_wire(&TIME_FRAMES, slo.slo_time_frame),
            request_based_metric_sli,
            window_based_metric_sli,
        }
    }
}

fn slo_schema() -> Schema {
    let request_based = Block::new()
        .with_description("Ratio of good events to total events")
        .with_attribute("good_events_query", Attribute::required_string())
        .with_attribute("total_events_query", Attribute::required_string());

    let window_based = Block::new()
        .with_description("Share of windows in which the query meets the threshold")
        .with_attribute("query", Attribute::required_string())
        .with_attribute(
            "window",
            Attribute::required_string().with_one_of(WINDOWS.iter().map(|(n, _)| *n)),
        )
        .with_attribute(
            "comparison_operator",
            Attribute::required_string().with_one_of(OPERATORS.iter().map(|(n, _)| *n)),
        )
        .with_attribute("threshold", Attribute::required_float64());

    Schema::v0()
        .with_description("A service level objective")
        .with_attribute("id", Attribute::computed_string())
        .with_attribute("name", Attribute::required_string())
        .with_attribute("description", Attribute::optional_string())
        .with_attribute(
            "creator",
            Attribute::new(AttributeType::String, AttributeFlags::optional_computed()),
        )
        .with_attribute("labels", Attribute::string_map(AttributeFlags::optional()))
        .with_attribute(
            "target_threshold_percentage",
            Attribute::required_float64().with_description("Target in percent, e.g. 99.9"),
        )
        .with_attribute(
            "slo_time_frame",
            Attribute::optional_string()
                .with_one_of(TIME_FRAMES.iter().map(|(n, _)| *n))
                .with_default(Value::String("28d".to_string())),
        )
        .with_block("request_based_metric_sli", NestedBlock::single(request_based))
        .with_block("window_based_metric_sli", NestedBlock::single(window_based))
}

async fn get_slo(clients: &ClientSet, id: &str) -> Result<Option<Slo>, ProviderError> {
    let result = clients
        .slos()
        .get(GetSloRequest { id: id.to_string() })
        .await;
    match read_or_removed(result, TYPE_NAME, id, "Error reading SLO")? {
        Some(response) => Ok(Some(
            response.slo.ok_or_else(|| empty_response("Error reading SLO"))?,
        )),
        None => Ok(None),
    }
}

pub struct SloResource;

#[async_trait]
impl Resource for SloResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        slo_schema()
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let model: SloModel = from_state(planned)?;
        let mut slo = model.extract()?;
        slo.id = None;

        let created = clients
            .slos()
            .create(CreateSloRequest { slo: Some(slo) })
            .await
            .map_err(|e| ProviderError::from_client("Error creating SLO", e))?
            .slo
            .ok_or_else(|| empty_response("Error creating SLO"))?;
        to_state(&SloModel::flatten(created))
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let model: SloModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        match get_slo(clients, &id).await? {
            Some(slo) => to_state(&SloModel::flatten(slo)),
            None => Ok(Value::Null),
        }
    }

    async fn update(
        &self,
        clients: &ClientSet,
        prior: Value,
        planned: Value,
    ) -> Result<Value, ProviderError> {
        let prior: SloModel = from_state(prior)?;
        let mut model: SloModel = from_state(planned)?;
        model.id = Some(require_id(prior.id.as_deref(), TYPE_NAME)?);

        let replaced = clients
            .slos()
            .replace(ReplaceSloRequest {
                slo: Some(model.extract()?),
            })
            .await
            .map_err(|e| ProviderError::from_client("Error updating SLO", e))?
            .slo
            .ok_or_else(|| empty_response("Error updating SLO"))?;
        to_state(&SloModel::flatten(replaced))
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: SloModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;
        let result = clients
            .slos()
            .delete(DeleteSloRequest { id: id.clone() })
            .await;
        deleted(result, TYPE_NAME, &id, "Error deleting SLO")
    }
}

/// Looks up an existing SLO by id.
pub struct SloDataSource;

#[async_trait]
impl DataSource for SloDataSource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        let mut schema = slo_schema().with_attribute("id", Attribute::required_string());
        for (name, attr) in schema.block.attributes.iter_mut() {
            if name != "id" {
                attr.flags = AttributeFlags::computed();
                attr.default = None;
                attr.one_of = None;
            }
        }
        for block in schema.block.blocks.values_mut() {
            for attr in block.block.attributes.values_mut() {
                attr.flags = AttributeFlags::computed();
            }
        }
        schema
    }

    async fn read(&self, clients: &ClientSet, config: Value) -> Result<Value, ProviderError> {
        let model: SloModel = from_state(config)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        match get_slo(clients, &id).await? {
            Some(slo) => to_state(&SloModel::flatten(slo)),
            None => Err(ProviderError::NotFound(format!("SLO {} does not exist", id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use tonic::{Request, Status};

    use super::*;
    use crate::generated::slos::{CreateSloResponse, GetSloResponse, ReplaceSloResponse};
    use crate::testing::{
        assert_plan_no_changes, assert_plan_replaces, configured_provider, MockPlatform,
    };

    const CREATE: &str = "/com.observability.slos.v1.SlosService/CreateSlo";
    const GET: &str = "/com.observability.slos.v1.SlosService/GetSlo";
    const REPLACE: &str = "/com.observability.slos.v1.SlosService/ReplaceSlo";

    fn stored_slo() -> Slo {
        Slo {
            id: Some("slo-1".to_string()),
            name: "checkout availability".to_string(),
            description: None,
            creator: Some("ops@example.com".to_string()),
            labels: HashMap::from([("team".to_string(), "payments".to_string())]),
            target_threshold_percentage: 99.9,
            slo_time_frame: SloTimeFrame::Days7 as i32,
            sli: Some(slo::Sli::RequestBasedMetricSli(RequestBasedMetricSli {
                good_events: Some(Metric {
                    query: "sum(rate(http_requests_total{code!~\"5..\"}[5m]))".to_string(),
                }),
                total_events: Some(Metric {
                    query: "sum(rate(http_requests_total[5m]))".to_string(),
                }),
            })),
        }
    }

    fn platform() -> MockPlatform {
        let platform = MockPlatform::start();
        platform
            .on(CREATE, |req: Request<CreateSloRequest>| {
                let mut slo = req.into_inner().slo.unwrap_or_default();
                assert!(slo.id.is_none());
                slo.id = Some("slo-1".to_string());
                slo.creator = Some("ops@example.com".to_string());
                Ok(CreateSloResponse { slo: Some(slo) })
            })
            .on(GET, |req: Request<GetSloRequest>| {
                if req.get_ref().id != "slo-1" {
                    return Err(Status::not_found("slo not found"));
                }
                Ok(GetSloResponse {
                    slo: Some(stored_slo()),
                })
            });
        platform
    }

    #[tokio::test]
    async fn test_create_flattens_response() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let plan = tester
            .plan_create(
                "observability_slo",
                json!({
                    "name": "checkout availability",
                    "labels": {"team": "payments"},
                    "target_threshold_percentage": 99.9,
                    "request_based_metric_sli": {
                        "good_events_query": "good",
                        "total_events_query": "total",
                    },
                }),
            )
            .await
            .unwrap();
        assert_eq!(plan.planned_state["slo_time_frame"], "28d");

        let state = tester
            .create("observability_slo", plan.planned_state)
            .await
            .unwrap();

        assert_eq!(state["id"], "slo-1");
        assert_eq!(state["creator"], "ops@example.com");
        assert_eq!(state["slo_time_frame"], "28d");
        assert_eq!(state["request_based_metric_sli"]["good_events_query"], "good");
        assert!(state["window_based_metric_sli"].is_null());
    }

    #[tokio::test]
    async fn test_create_requires_one_sli() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let err = tester
            .create(
                "observability_slo",
                json!({"name": "x", "target_threshold_percentage": 99.0}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
        assert!(platform.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_window_sli() {
        let platform = platform();
        platform.on(REPLACE, |req: Request<ReplaceSloRequest>| {
            let slo = req.into_inner().slo.unwrap_or_default();
            assert_eq!(slo.id.as_deref(), Some("slo-1"));
            match &slo.sli {
                Some(slo::Sli::WindowBasedMetricSli(sli)) => {
                    assert_eq!(sli.window, WindowSloWindow::Minutes5 as i32);
                    assert_eq!(
                        sli.comparison_operator,
                        ComparisonOperator::LessThan as i32
                    );
                },
                other => panic!("unexpected sli {:?}", other),
            }
            Ok(ReplaceSloResponse { slo: Some(slo) })
        });
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let prior = tester
            .read("observability_slo", json!({"id": "slo-1"}))
            .await
            .unwrap();
        let mut planned = prior.clone();
        planned["request_based_metric_sli"] = Value::Null;
        planned["window_based_metric_sli"] = json!({
            "query": "histogram_quantile(0.99, rate(latency_bucket[5m]))",
            "window": "5m",
            "comparison_operator": "less_than",
            "threshold": 0.25,
        });

        let state = tester
            .update("observability_slo", prior, planned)
            .await
            .unwrap();
        assert_eq!(state["window_based_metric_sli"]["window"], "5m");
        assert_eq!(state["slo_time_frame"], "7d");
    }

    #[tokio::test]
    async fn test_data_source_reads_by_id() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let state = tester
            .read_data_source("observability_slo", json!({"id": "slo-1"}))
            .await
            .unwrap();
        assert_eq!(state["name"], "checkout availability");
        assert_eq!(state["labels"], json!({"team": "payments"}));
        assert_eq!(state["target_threshold_percentage"], 99.9);

        let err = tester
            .read_data_source("observability_slo", json!({"id": "slo-2"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_data_source_config_requires_id() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        tester
            .validate_data_source_config("observability_slo", json!({"id": "slo-1"}))
            .await
            .unwrap();
        assert!(tester
            .validate_data_source_config("observability_slo", json!({}))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_import_reads_full_state() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let imported = tester
            .import_resource("observability_slo", "slo-1")
            .await
            .unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].state["id"], "slo-1");

        let err = tester
            .import_resource("observability_slo", "slo-9")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[test]
    fn test_name_change_does_not_replace() {
        let schema = SloResource.schema();
        let prior = json!({"id": "slo-1", "name": "a", "target_threshold_percentage": 99.0, "slo_time_frame": "28d"});
        let result = crate::plan::plan(
            &schema,
            Some(&prior),
            json!({"name": "b", "target_threshold_percentage": 99.0, "slo_time_frame": "28d"}),
        );
        assert!(!result.requires_replace);
        assert_eq!(result.planned_state["id"], "slo-1");

        let schema = schema.with_attribute("name", Attribute::required_string().with_force_new());
        let result = crate::plan::plan(&schema, Some(&prior), json!({"name": "b"}));
        assert_plan_replaces(&result);
    }

    #[tokio::test]
    async fn test_plan_after_create_has_no_changes() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;
        let config = json!({
            "name": "latency",
            "target_threshold_percentage": 99,
            "window_based_metric_sli": {
                "query": "histogram_quantile(0.99, latency)",
                "window": "5m",
                "comparison_operator": "less_than",
                "threshold": 2,
            },
        });

        let planned = tester
            .plan_create("observability_slo", config.clone())
            .await
            .unwrap();
        let state = tester
            .create("observability_slo", planned.planned_state)
            .await
            .unwrap();
        assert_eq!(state["creator"], "ops@example.com");

        let result = tester
            .plan_update("observability_slo", state, config)
            .await
            .unwrap();
        assert_plan_no_changes(&result);
    }
}
