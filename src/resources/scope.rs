use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    deleted, empty_response, from_state, read_or_removed, removed_from_state, require_id,
    to_state, Resource,
};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::generated::scopes::{
    CreateScopeRequest, DeleteScopeRequest, EntityType, Filter, GetTeamScopesByIdsRequest, Scope,
    UpdateScopeRequest,
};
use crate::schema::{Attribute, Block, NestedBlock, Schema};

const TYPE_NAME: &str = "observability_scope";

const ENTITY_TYPES: [(&str, EntityType); 2] =
    [("logs", EntityType::Logs), ("spans", EntityType::Spans)];

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ScopeModel {
    id: Option<String>,
    display_name: String,
    description: Option<String>,
    default_expression: String,
    filters: Vec<FilterModel>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct FilterModel {
    entity_type: String,
    expression: String,
}

impl ScopeModel {
    fn filters(&self) -> Result<Vec<Filter>, ProviderError> {
        self.filters
            .iter()
            .map(|filter| {
                let entity_type = ENTITY_TYPES
                    .iter()
                    .find(|(name, _)| *name == filter.entity_type)
                    .map(|(_, e)| *e as i32)
                    .ok_or_else(|| {
                        ProviderError::Validation(format!(
                            "unsupported entity_type {:?}",
                            filter.entity_type
                        ))
                    })?;
                Ok(Filter {
                    entity_type,
                    expression: filter.expression.clone(),
                })
            })
            .collect()
    }

    fn flatten(scope: Scope) -> Self {
        Self {
            id: Some(scope.id),
            display_name: scope.display_name,
            description: scope.description,
            default_expression: scope.default_expression,
            filters: scope
                .filters
                .into_iter()
                .map(|filter| FilterModel {
                    entity_type: ENTITY_TYPES
                        .iter()
                        .find(|(_, e)| *e as i32 == filter.entity_type)
                        .map(|(name, _)| name.to_string())
                        .unwrap_or_default(),
                    expression: filter.expression,
                })
                .collect(),
        }
    }
}

/// A scope restricting which logs and spans a team can see.
pub struct ScopeResource;

#[async_trait]
impl Resource for ScopeResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        let filter = Block::new()
            .with_attribute(
                "entity_type",
                Attribute::required_string().with_one_of(ENTITY_TYPES.iter().map(|(n, _)| *n)),
            )
            .with_attribute("expression", Attribute::required_string());

        Schema::v0()
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("display_name", Attribute::required_string())
            .with_attribute("description", Attribute::optional_string())
            .with_attribute(
                "default_expression",
                Attribute::required_string()
                    .with_description("Expression applied to entities no filter matches"),
            )
            .with_block("filters", NestedBlock::list(filter).with_min_items(1))
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let model: ScopeModel = from_state(planned)?;

        let scope = clients
            .scopes()
            .create(CreateScopeRequest {
                display_name: model.display_name.clone(),
                description: model.description.clone(),
                filters: model.filters()?,
                default_expression: model.default_expression.clone(),
            })
            .await
            .map_err(|e| ProviderError::from_client("Error creating scope", e))?
            .scope
            .ok_or_else(|| empty_response("Error creating scope"))?;
        to_state(&ScopeModel::flatten(scope))
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let model: ScopeModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        let result = clients
            .scopes()
            .get(GetTeamScopesByIdsRequest {
                ids: vec![id.clone()],
            })
            .await;
        let response = match read_or_removed(result, TYPE_NAME, &id, "Error reading scope")? {
            Some(response) => response,
            None => return Ok(Value::Null),
        };

        // Unknown ids are left out of the response rather than failing it.
        match response.scopes.into_iter().find(|scope| scope.id == id) {
            Some(scope) => to_state(&ScopeModel::flatten(scope)),
            None => Ok(removed_from_state(TYPE_NAME, &id)),
        }
    }

    async fn update(
        &self,
        clients: &ClientSet,
        prior: Value,
        planned: Value,
    ) -> Result<Value, ProviderError> {
        let prior: ScopeModel = from_state(prior)?;
        let model: ScopeModel = from_state(planned)?;
        let id = require_id(prior.id.as_deref(), TYPE_NAME)?;

        let scope = clients
            .scopes()
            .update(UpdateScopeRequest {
                id,
                display_name: model.display_name.clone(),
                description: model.description.clone(),
                filters: model.filters()?,
                default_expression: model.default_expression.clone(),
            })
            .await
            .map_err(|e| ProviderError::from_client("Error updating scope", e))?
            .scope
            .ok_or_else(|| empty_response("Error updating scope"))?;
        to_state(&ScopeModel::flatten(scope))
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: ScopeModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;
        let result = clients
            .scopes()
            .delete(DeleteScopeRequest { id: id.clone() })
            .await;
        deleted(result, TYPE_NAME, &id, "Error deleting scope")
    }
}
