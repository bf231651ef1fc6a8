//! Archive retention names.
//!
//! The platform keeps a fixed number of retention slots per company. The
//! first slot is the default and cannot be renamed; the remaining slots are
//! assigned the configured names in order. Deleting the resource clears the
//! names again.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::{from_state, to_state, Resource};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::generated::retentions::{
    ActivateRetentionsRequest, GetRetentionsEnabledRequest, GetRetentionsRequest, Retention,
    RetentionUpdateElement, UpdateRetentionsRequest,
};
use crate::schema::{Attribute, Block, NestedBlock, Schema};

const TYPE_NAME: &str = "observability_archive_retentions";
const SINGLETON_ID: &str = "archive-retentions";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RetentionsModel {
    id: Option<String>,
    retentions: Vec<RetentionModel>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RetentionModel {
    id: Option<String>,
    order: Option<i64>,
    name: String,
    editable: Option<bool>,
}

impl RetentionsModel {
    /// State lists slots up to the last named or non-editable one, matching
    /// how many names a configuration gives.
    fn flatten(mut retentions: Vec<Retention>) -> Self {
        retentions.sort_by_key(|r| r.order);
        let used = retentions
            .iter()
            .rposition(|r| !r.editable || !r.name.is_empty())
            .map_or(0, |i| i + 1);
        retentions.truncate(used);
        Self {
            id: Some(SINGLETON_ID.to_string()),
            retentions: retentions
                .into_iter()
                .map(|r| RetentionModel {
                    id: Some(r.id),
                    order: Some(r.order.into()),
                    name: r.name,
                    editable: Some(r.editable),
                })
                .collect(),
        }
    }
}

/// Pair the editable slots, in order, with `names`; slots past the end of
/// `names` are cleared.
fn assign_names(
    current: &[Retention],
    names: &[String],
) -> Result<Vec<RetentionUpdateElement>, ProviderError> {
    let mut slots: Vec<&Retention> = current.iter().filter(|r| r.editable).collect();
    slots.sort_by_key(|r| r.order);

    if names.len() > slots.len() {
        return Err(ProviderError::Validation(format!(
            "{} retentions configured but only {} can be named",
            names.len(),
            slots.len()
        )));
    }

    Ok(slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| RetentionUpdateElement {
            id: slot.id.clone(),
            name: names.get(i).cloned().unwrap_or_default(),
        })
        .collect())
}

pub struct ArchiveRetentionsResource;

impl ArchiveRetentionsResource {
    async fn current(&self, clients: &ClientSet) -> Result<Vec<Retention>, ProviderError> {
        Ok(clients
            .archive_retentions()
            .get(GetRetentionsRequest {})
            .await
            .map_err(|e| ProviderError::from_client("Error reading archive retentions", e))?
            .retentions)
    }

    async fn apply(&self, clients: &ClientSet, names: &[String]) -> Result<Value, ProviderError> {
        let current = self.current(clients).await?;
        let elements = assign_names(&current, names)?;

        let updated = clients
            .archive_retentions()
            .update(UpdateRetentionsRequest {
                retention_update_elements: elements,
            })
            .await
            .map_err(|e| ProviderError::from_client("Error updating archive retentions", e))?;
        to_state(&RetentionsModel::flatten(updated.retentions))
    }
}

#[async_trait]
impl Resource for ArchiveRetentionsResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        let retention = Block::new()
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("order", Attribute::computed_int64())
            .with_attribute("name", Attribute::required_string())
            .with_attribute("editable", Attribute::computed_bool());

        Schema::v0()
            .with_description("Names of the archive retention slots")
            .with_attribute("id", Attribute::computed_string())
            .with_block("retentions", NestedBlock::list(retention).with_min_items(1))
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let model: RetentionsModel = from_state(planned)?;

        let enabled = clients
            .archive_retentions()
            .get_enabled(GetRetentionsEnabledRequest {})
            .await
            .map_err(|e| ProviderError::from_client("Error reading archive retentions", e))?;
        if !enabled.enable_tags {
            info!("Activating archive retentions");
            clients
                .archive_retentions()
                .activate(ActivateRetentionsRequest {})
                .await
                .map_err(|e| {
                    ProviderError::from_client("Error activating archive retentions", e)
                })?;
        }

        // The default slot is listed first in configuration but cannot be renamed.
        let names = editable_names(&model);
        self.apply(clients, &names).await
    }

    async fn read(&self, clients: &ClientSet, _current: Value) -> Result<Value, ProviderError> {
        let current = self.current(clients).await?;
        to_state(&RetentionsModel::flatten(current))
    }

    async fn update(
        &self,
        clients: &ClientSet,
        _prior: Value,
        planned: Value,
    ) -> Result<Value, ProviderError> {
        let model: RetentionsModel = from_state(planned)?;
        self.apply(clients, &editable_names(&model)).await
    }

    async fn delete(&self, clients: &ClientSet, _current: Value) -> Result<(), ProviderError> {
        self.apply(clients, &[]).await?;
        Ok(())
    }

    async fn import_state(&self, clients: &ClientSet, _id: &str) -> Result<Value, ProviderError> {
        self.read(clients, Value::Null).await
    }
}

fn editable_names(model: &RetentionsModel) -> Vec<String> {
    model
        .retentions
        .iter()
        .skip(1)
        .map(|r| r.name.clone())
        .collect()
}
