//! SCIM groups client.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::rest::RestClient;
use crate::error::ClientError;

/// SCIM core group schema URN.
pub const GROUP_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
    pub display_name: String,
    #[serde(default)]
    pub members: Vec<ScimGroupMember>,
}

/// A member entry; `value` is the SCIM user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScimGroupMember {
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct GroupsClient {
    rest: RestClient,
}

impl GroupsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    #[instrument(skip(self, group), fields(display_name = %group.display_name), name = "groups.create")]
    pub async fn create(&self, group: &ScimGroup) -> Result<Option<ScimGroup>, ClientError> {
        self.rest.post(&["scim", "Groups"], group).await
    }

    #[instrument(skip(self), name = "groups.get")]
    pub async fn get(&self, id: &str) -> Result<Option<ScimGroup>, ClientError> {
        self.rest.get(&["scim", "Groups", id]).await
    }

    #[instrument(skip(self, group), name = "groups.update")]
    pub async fn update(
        &self,
        id: &str,
        group: &ScimGroup,
    ) -> Result<Option<ScimGroup>, ClientError> {
        self.rest.put(&["scim", "Groups", id], group).await
    }

    #[instrument(skip(self), name = "groups.delete")]
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.rest.delete(&["scim", "Groups", id]).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::Credentials;

    fn groups(url: String) -> GroupsClient {
        let credentials = Credentials::new("example.com:443", "k").with_rest_url(url);
        GroupsClient::new(RestClient::new(&credentials).unwrap())
    }

    #[tokio::test]
    async fn test_update_replaces_members() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/scim/Groups/g-1")
            .match_header("authorization", "Bearer k")
            .match_body(mockito::Matcher::Json(json!({
                "displayName": "oncall",
                "members": [{"value": "u-1"}, {"value": "u-2"}],
            })))
            .with_status(200)
            .with_body(
                json!({
                    "id": "g-1",
                    "displayName": "oncall",
                    "members": [{"value": "u-1"}, {"value": "u-2"}],
                })
                .to_string(),
            )
            .create_async()
            .await;

        let group = ScimGroup {
            display_name: "oncall".to_string(),
            members: vec![
                ScimGroupMember { value: "u-1".to_string() },
                ScimGroupMember { value: "u-2".to_string() },
            ],
            ..Default::default()
        };
        let updated = groups(server.url())
            .update("g-1", &group)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id.as_deref(), Some("g-1"));
        assert_eq!(updated.members, group.members);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_group() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/scim/Groups/g-1")
            .with_status(204)
            .create_async()
            .await;

        groups(server.url()).delete("g-1").await.unwrap();
        mock.assert_async().await;
    }
}
