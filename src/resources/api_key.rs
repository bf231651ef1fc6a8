use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{deleted, from_state, read_or_removed, require_id, to_state, Resource};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::generated::apikeys::{
    owner, update_api_key_request, CreateApiKeyRequest, DeleteApiKeyRequest, GetApiKeyRequest,
    KeyInfo, Owner, UpdateApiKeyRequest,
};
use crate::schema::{Attribute, AttributeFlags, AttributeType, Schema};

const TYPE_NAME: &str = "observability_api_key";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ApiKeyModel {
    id: Option<String>,
    name: String,
    owner_team_id: Option<i64>,
    owner_user_id: Option<String>,
    owner_organisation_id: Option<i64>,
    permissions: Option<Vec<String>>,
    presets: Option<Vec<String>>,
    hashed: bool,
    active: Option<bool>,
    value: Option<String>,
}

fn owner_id(value: i64, attribute: &str) -> Result<u32, ProviderError> {
    u32::try_from(value)
        .map_err(|_| ProviderError::Validation(format!("{} out of range: {}", attribute, value)))
}

impl ApiKeyModel {
    fn owner(&self) -> Result<Owner, ProviderError> {
        let owner = match (
            self.owner_team_id,
            self.owner_user_id.as_ref(),
            self.owner_organisation_id,
        ) {
            (Some(team), None, None) => owner::Owner::TeamId(owner_id(team, "owner_team_id")?),
            (None, Some(user), None) => owner::Owner::UserId(user.clone()),
            (None, None, Some(org)) => {
                owner::Owner::OrganisationId(owner_id(org, "owner_organisation_id")?)
            },
            _ => {
                return Err(ProviderError::Validation(
                    "exactly one of owner_team_id, owner_user_id or owner_organisation_id must be set"
                        .to_string(),
                ))
            },
        };
        Ok(Owner { owner: Some(owner) })
    }

    /// Overwrite everything the platform reports. The key value is only
    /// returned for unhashed keys, so an existing value is kept otherwise.
    fn flatten(&mut self, info: KeyInfo) {
        self.id = Some(info.id);
        self.name = info.name;
        self.owner_team_id = None;
        self.owner_user_id = None;
        self.owner_organisation_id = None;
        match info.owner.and_then(|o| o.owner) {
            Some(owner::Owner::TeamId(id)) => self.owner_team_id = Some(id.into()),
            Some(owner::Owner::UserId(id)) => self.owner_user_id = Some(id),
            Some(owner::Owner::OrganisationId(id)) => self.owner_organisation_id = Some(id.into()),
            None => {},
        }
        self.permissions = Some(info.key_permissions);
        self.presets = Some(info.presets);
        self.hashed = info.hashed;
        self.active = Some(info.active);
        if info.value.is_some() {
            self.value = info.value;
        }
    }
}

/// Sorted copy for order-insensitive comparison.
fn sorted(values: &Option<Vec<String>>) -> Vec<String> {
    let mut values = values.clone().unwrap_or_default();
    values.sort();
    values
}

pub struct ApiKeyResource;

impl ApiKeyResource {
    async fn fetch(
        &self,
        clients: &ClientSet,
        id: &str,
    ) -> Result<Option<KeyInfo>, ProviderError> {
        let result = clients
            .api_keys()
            .get(GetApiKeyRequest {
                key_id: id.to_string(),
            })
            .await;
        Ok(read_or_removed(result, TYPE_NAME, id, "Error reading API key")?
            .and_then(|response| response.key_info))
    }
}

#[async_trait]
impl Resource for ApiKeyResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        let permission_set = || {
            Attribute::new(
                AttributeType::set(AttributeType::String),
                AttributeFlags::optional_computed(),
            )
        };

        Schema::v0()
            .with_description("An API key owned by a team, user or organisation")
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("name", Attribute::required_string())
            .with_attribute("owner_team_id", Attribute::optional_int64().with_force_new())
            .with_attribute("owner_user_id", Attribute::optional_string().with_force_new())
            .with_attribute(
                "owner_organisation_id",
                Attribute::optional_int64().with_force_new(),
            )
            .with_attribute("permissions", permission_set())
            .with_attribute(
                "presets",
                permission_set().with_description("Named permission bundles"),
            )
            .with_attribute(
                "hashed",
                Attribute::optional_bool()
                    .with_force_new()
                    .with_default(Value::Bool(false)),
            )
            .with_attribute(
                "active",
                Attribute::optional_bool().with_default(Value::Bool(true)),
            )
            .with_attribute("value", Attribute::computed_string().sensitive())
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let mut model: ApiKeyModel = from_state(planned)?;

        let created = clients
            .api_keys()
            .create(CreateApiKeyRequest {
                name: model.name.clone(),
                owner: Some(model.owner()?),
                permissions: model.permissions.clone().unwrap_or_default(),
                presets: model.presets.clone().unwrap_or_default(),
                hashed: model.hashed,
            })
            .await
            .map_err(|e| ProviderError::from_client("Error creating API key", e))?;
        model.id = Some(created.key_id.clone());
        model.value = Some(created.value);

        // Keys are created active.
        if model.active == Some(false) {
            clients
                .api_keys()
                .update(UpdateApiKeyRequest {
                    key_id: created.key_id.clone(),
                    is_active: Some(false),
                    ..Default::default()
                })
                .await
                .map_err(|e| ProviderError::from_client("Error deactivating API key", e))?;
        }

        let info = self
            .fetch(clients, &created.key_id)
            .await?
            .ok_or_else(|| ProviderError::NotFound("API key disappeared after create".to_string()))?;
        model.flatten(info);
        to_state(&model)
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let mut model: ApiKeyModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        match self.fetch(clients, &id).await? {
            Some(info) => {
                model.flatten(info);
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
        let prior: ApiKeyModel = from_state(prior)?;
        let mut model: ApiKeyModel = from_state(planned)?;
        let id = require_id(prior.id.as_deref(), TYPE_NAME)?;
        model.id = Some(id.clone());
        model.value = prior.value.clone();

        let request = UpdateApiKeyRequest {
            key_id: id.clone(),
            new_name: (model.name != prior.name).then(|| model.name.clone()),
            is_active: model.active.filter(|active| Some(*active) != prior.active),
            presets: (model.presets.is_some() && sorted(&model.presets) != sorted(&prior.presets))
                .then(|| update_api_key_request::Presets {
                    presets: model.presets.clone().unwrap_or_default(),
                }),
            permissions: (model.permissions.is_some()
                && sorted(&model.permissions) != sorted(&prior.permissions))
            .then(|| update_api_key_request::Permissions {
                permissions: model.permissions.clone().unwrap_or_default(),
            }),
        };
        clients
            .api_keys()
            .update(request)
            .await
            .map_err(|e| ProviderError::from_client("Error updating API key", e))?;

        let info = self
            .fetch(clients, &id)
            .await?
            .ok_or_else(|| ProviderError::NotFound("API key disappeared after update".to_string()))?;
        model.flatten(info);
        to_state(&model)
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: ApiKeyModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;
        let result = clients
            .api_keys()
            .delete(DeleteApiKeyRequest { key_id: id.clone() })
            .await;
        deleted(result, TYPE_NAME, &id, "Error deleting API key")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use tonic::{Request, Status};

    use super::*;
    use crate::generated::apikeys::{CreateApiKeyResponse, GetApiKeyResponse, UpdateApiKeyResponse};
    use crate::testing::{assert_plan_replaces, configured_provider, MockPlatform};

    const CREATE: &str = "/com.observability.apikeys.v1.ApiKeysService/CreateApiKey";
    const GET: &str = "/com.observability.apikeys.v1.ApiKeysService/GetApiKey";
    const UPDATE: &str = "/com.observability.apikeys.v1.ApiKeysService/UpdateApiKey";

    /// A platform holding one key whose active flag follows updates.
    fn platform() -> MockPlatform {
        let active = Arc::new(Mutex::new(true));
        let platform = MockPlatform::start();
        let on_update = active.clone();
        platform
            .on(CREATE, |_req: Request<CreateApiKeyRequest>| {
                Ok(CreateApiKeyResponse {
                    key_id: "key-1".to_string(),
                    value: "secret-value".to_string(),
                })
            })
            .on(UPDATE, move |req: Request<UpdateApiKeyRequest>| {
                if let Some(value) = req.into_inner().is_active {
                    *on_update.lock().unwrap() = value;
                }
                Ok(UpdateApiKeyResponse {})
            })
            .on(GET, move |req: Request<GetApiKeyRequest>| {
                if req.get_ref().key_id != "key-1" {
                    return Err(Status::not_found("no such key"));
                }
                Ok(GetApiKeyResponse {
                    key_info: Some(KeyInfo {
                        id: "key-1".to_string(),
                        name: "ci".to_string(),
                        owner: Some(Owner {
                            owner: Some(owner::Owner::TeamId(7)),
                        }),
                        active: *active.lock().unwrap(),
                        hashed: false,
                        key_permissions: vec!["logs.data-api#high:ReadData".to_string()],
                        presets: vec![],
                        value: None,
                    }),
                })
            });
        platform
    }

    #[tokio::test]
    async fn test_create_keeps_value_and_deactivates() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let state = tester
            .lifecycle_create(
                "observability_api_key",
                json!({"name": "ci", "owner_team_id": 7, "active": false}),
            )
            .await
            .unwrap();

        assert_eq!(state["id"], "key-1");
        assert_eq!(state["value"], "secret-value");
        assert_eq!(state["active"], false);
        assert_eq!(state["owner_team_id"], 7);
        assert_eq!(
            state["permissions"],
            json!(["logs.data-api#high:ReadData"])
        );
        assert_eq!(platform.calls_to(UPDATE).len(), 1);
    }

    #[tokio::test]
    async fn test_create_requires_single_owner() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let err = tester
            .create(
                "observability_api_key",
                json!({"name": "ci", "owner_team_id": 7, "owner_user_id": "u-1"}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
        assert!(platform.calls_to(CREATE).is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_changed_name_only() {
        let platform = platform();
        platform.on(UPDATE, |req: Request<UpdateApiKeyRequest>| {
            let req = req.into_inner();
            assert_eq!(req.new_name.as_deref(), Some("ci-renamed"));
            assert!(req.is_active.is_none());
            assert!(req.permissions.is_none());
            Ok(UpdateApiKeyResponse {})
        });
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let prior = json!({
            "id": "key-1",
            "name": "ci",
            "owner_team_id": 7,
            "permissions": ["logs.data-api#high:ReadData"],
            "presets": [],
            "hashed": false,
            "active": true,
            "value": "secret-value",
        });
        let mut planned = prior.clone();
        planned["name"] = json!("ci-renamed");

        let state = tester
            .update("observability_api_key", prior, planned)
            .await
            .unwrap();
        assert_eq!(state["value"], "secret-value");
        assert_eq!(platform.calls_to(UPDATE).len(), 1);
    }

    #[tokio::test]
    async fn test_owner_change_requires_replace() {
        let platform = platform();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let plan = tester
            .plan_update(
                "observability_api_key",
                json!({"id": "key-1", "name": "ci", "owner_team_id": 7, "hashed": false, "active": true}),
                json!({"name": "ci", "owner_team_id": 8}),
            )
            .await
            .unwrap();
        assert_plan_replaces(&plan);
    }

    #[test]
    fn test_value_is_sensitive() {
        let schema = ApiKeyResource.schema();
        let value = &schema.block.attributes["value"];
        assert!(value.flags.sensitive);
        assert!(value.flags.computed);
    }
}
