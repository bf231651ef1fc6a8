use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{deleted, empty_response, from_state, read_or_removed, require_id, to_state, Resource};
use crate::clients::groups::{ScimGroup, ScimGroupMember, GROUP_SCHEMA};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::schema::{Attribute, AttributeFlags, Schema};

const TYPE_NAME: &str = "observability_group";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct GroupModel {
    id: Option<String>,
    display_name: String,
    members: Option<Vec<String>>,
}

impl GroupModel {
    fn extract(&self) -> ScimGroup {
        ScimGroup {
            id: None,
            schemas: vec![GROUP_SCHEMA.to_string()],
            display_name: self.display_name.clone(),
            members: self
                .members
                .iter()
                .flatten()
                .map(|value| ScimGroupMember {
                    value: value.clone(),
                })
                .collect(),
        }
    }

    fn flatten(group: ScimGroup) -> Self {
        let mut members: Vec<String> = group.members.into_iter().map(|m| m.value).collect();
        members.sort();
        Self {
            id: group.id,
            display_name: group.display_name,
            members: (!members.is_empty()).then_some(members),
        }
    }
}

/// A SCIM group and its members.
pub struct GroupResource;

#[async_trait]
impl Resource for GroupResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("display_name", Attribute::required_string())
            .with_attribute(
                "members",
                Attribute::string_set(AttributeFlags::optional())
                    .with_description("SCIM user ids"),
            )
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let model: GroupModel = from_state(planned)?;

        let created = clients
            .groups()
            .create(&model.extract())
            .await
            .map_err(|e| ProviderError::from_client("Error creating group", e))?
            .ok_or_else(|| empty_response("Error creating group"))?;
        to_state(&GroupModel::flatten(created))
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let model: GroupModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        let result = clients.groups().get(&id).await;
        match read_or_removed(result, TYPE_NAME, &id, "Error reading group")? {
            Some(group) => {
                let group = group.ok_or_else(|| empty_response("Error reading group"))?;
                to_state(&GroupModel::flatten(group))
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
        let prior: GroupModel = from_state(prior)?;
        let model: GroupModel = from_state(planned)?;
        let id = require_id(prior.id.as_deref(), TYPE_NAME)?;

        let updated = clients
            .groups()
            .update(&id, &model.extract())
            .await
            .map_err(|e| ProviderError::from_client("Error updating group", e))?
            .ok_or_else(|| empty_response("Error updating group"))?;
        to_state(&GroupModel::flatten(updated))
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: GroupModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;
        let result = clients.groups().delete(&id).await;
        deleted(result, TYPE_NAME, &id, "Error deleting group")
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::testing::{configured_provider, MockPlatform};

    #[tokio::test]
    async fn test_create_sorts_members() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/scim/Groups")
            .match_body(Matcher::Json(json!({
                "schemas": [GROUP_SCHEMA],
                "displayName": "sre",
                "members": [{"value": "u-2"}, {"value": "u-1"}],
            })))
            .with_status(201)
            .with_body(
                json!({
                    "id": "g-1",
                    "displayName": "sre",
                    "members": [{"value": "u-2"}, {"value": "u-1"}],
                })
                .to_string(),
            )
            .create_async()
            .await;

        let platform = MockPlatform::start();
        let tester = configured_provider(&platform, &server.url()).await;

        let state = tester
            .create(
                "observability_group",
                json!({"display_name": "sre", "members": ["u-2", "u-1"]}),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(state, json!({"id": "g-1", "display_name": "sre", "members": ["u-1", "u-2"]}));
    }

    #[tokio::test]
    async fn test_empty_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/scim/Groups/g-1")
            .with_status(200)
            .create_async()
            .await;

        let platform = MockPlatform::start();
        let tester = configured_provider(&platform, &server.url()).await;

        let err = tester
            .update(
                "observability_group",
                json!({"id": "g-1", "display_name": "sre"}),
                json!({"display_name": "platform"}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Internal(_)));
    }

    #[tokio::test]
    async fn test_server_error_surfaces() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/scim/Groups/g-1")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let platform = MockPlatform::start();
        let tester = configured_provider(&platform, &server.url()).await;

        let err = tester
            .read("observability_group", json!({"id": "g-1"}))
            .await
            .unwrap_err();
        assert!(err.message().starts_with("Error reading group"));
    }
}
