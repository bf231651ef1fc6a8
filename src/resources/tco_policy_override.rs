use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{deleted, empty_response, from_state, read_or_removed, require_id, to_state, Resource};
use crate::clients::tco_overrides::TcoPolicyOverride;
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

const TYPE_NAME: &str = "observability_tco_policy_override";

const PRIORITIES: [&str; 4] = ["block", "low", "medium", "high"];

/// Log severities in the platform's numbering, starting at 1.
const SEVERITIES: [&str; 6] = ["debug", "verbose", "info", "warning", "error", "critical"];

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct OverrideModel {
    id: Option<String>,
    priority: String,
    severity: String,
    application_name: Option<String>,
    subsystem_name: Option<String>,
}

impl OverrideModel {
    fn extract(&self) -> Result<TcoPolicyOverride, ProviderError> {
        let severity = SEVERITIES
            .iter()
            .position(|s| *s == self.severity)
            .ok_or_else(|| {
                ProviderError::Validation(format!("unsupported severity {:?}", self.severity))
            })?;
        Ok(TcoPolicyOverride {
            id: None,
            name: None,
            priority: self.priority.clone(),
            severity: severity as i64 + 1,
            application_name: self.application_name.clone(),
            subsystem_name: self.subsystem_name.clone(),
        })
    }

    fn flatten(policy: TcoPolicyOverride) -> Self {
        let severity = usize::try_from(policy.severity - 1)
            .ok()
            .and_then(|i| SEVERITIES.get(i))
            .map(|s| s.to_string())
            .unwrap_or_else(|| policy.severity.to_string());
        Self {
            id: policy.id,
            priority: policy.priority,
            severity,
            application_name: policy.application_name,
            subsystem_name: policy.subsystem_name,
        }
    }
}

/// Routes logs of one application, subsystem and severity into a cost tier.
pub struct TcoPolicyOverrideResource;

#[async_trait]
impl Resource for TcoPolicyOverrideResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_attribute("id", Attribute::computed_string())
            .with_attribute(
                "priority",
                Attribute::required_string().with_one_of(PRIORITIES),
            )
            .with_attribute(
                "severity",
                Attribute::required_string().with_one_of(SEVERITIES),
            )
            .with_attribute("application_name", Attribute::optional_string())
            .with_attribute("subsystem_name", Attribute::optional_string())
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let model: OverrideModel = from_state(planned)?;

        let created = clients
            .tco_overrides()
            .create(&model.extract()?)
            .await
            .map_err(|e| ProviderError::from_client("Error creating TCO policy override", e))?
            .ok_or_else(|| empty_response("Error creating TCO policy override"))?;
        to_state(&OverrideModel::flatten(created))
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let model: OverrideModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        let result = clients.tco_overrides().get(&id).await;
        match read_or_removed(result, TYPE_NAME, &id, "Error reading TCO policy override")? {
            Some(policy) => {
                let policy = policy
                    .ok_or_else(|| empty_response("Error reading TCO policy override"))?;
                to_state(&OverrideModel::flatten(policy))
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
        let prior: OverrideModel = from_state(prior)?;
        let model: OverrideModel = from_state(planned)?;
        let id = require_id(prior.id.as_deref(), TYPE_NAME)?;

        let mut policy = model.extract()?;
        policy.id = Some(id.clone());
        let updated = clients
            .tco_overrides()
            .update(&id, &policy)
            .await
            .map_err(|e| ProviderError::from_client("Error updating TCO policy override", e))?
            .ok_or_else(|| empty_response("Error updating TCO policy override"))?;
        to_state(&OverrideModel::flatten(updated))
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: OverrideModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;
        let result = clients.tco_overrides().delete(&id).await;
        deleted(result, TYPE_NAME, &id, "Error deleting TCO policy override")
    }
}
