//! SCIM users client.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::rest::RestClient;
use crate::error::ClientError;

/// SCIM core user schema URN.
pub const USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

/// A user as exchanged with the SCIM endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ScimUserName>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ScimUserEmail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ScimGroupRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimUserName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScimUserEmail {
    pub value: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Membership reference returned on a user; read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScimGroupRef {
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct UsersClient {
    rest: RestClient,
}

impl UsersClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    #[instrument(skip(self, user), fields(user_name = %user.user_name), name = "users.create")]
    pub async fn create(&self, user: &ScimUser) -> Result<Option<ScimUser>, ClientError> {
        self.rest.post(&["scim", "Users"], user).await
    }

    #[instrument(skip(self), name = "users.get")]
    pub async fn get(&self, id: &str) -> Result<Option<ScimUser>, ClientError> {
        self.rest.get(&["scim", "Users", id]).await
    }

    #[instrument(skip(self, user), name = "users.update")]
    pub async fn update(&self, id: &str, user: &ScimUser) -> Result<Option<ScimUser>, ClientError> {
        self.rest.put(&["scim", "Users", id], user).await
    }

    #[instrument(skip(self), name = "users.delete")]
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.rest.delete(&["scim", "Users", id]).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::config::Credentials;

    fn users(url: String) -> UsersClient {
        let credentials = Credentials::new("example.com:443", "k").with_rest_url(url);
        UsersClient::new(RestClient::new(&credentials).unwrap())
    }

    #[tokio::test]
    async fn test_get_decodes_and_reserializes() {
        let body = json!({"userName": "alice", "active": true});
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/scim/Users/1")
            .match_header("authorization", "Bearer k")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let user = users(server.url()).get("1").await.unwrap().unwrap();

        let expected = ScimUser {
            user_name: "alice".to_string(),
            active: true,
            ..Default::default()
        };
        assert_eq!(user, expected);
        assert_eq!(serde_json::to_value(&user).unwrap(), body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/scim/Users/404")
            .with_status(404)
            .with_body(r#"{"detail":"User not found"}"#)
            .create_async()
            .await;

        let err = users(server.url()).get("404").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("User not found"));
    }

    #[tokio::test]
    async fn test_create_sends_scim_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/scim/Users")
            .match_body(mockito::Matcher::PartialJson(json!({
                "schemas": [USER_SCHEMA],
                "userName": "bob@example.com",
                "name": {"givenName": "Bob"},
                "emails": [{"value": "bob@example.com", "primary": true, "type": "work"}],
            })))
            .with_status(201)
            .with_body(
                json!({
                    "id": "u-2",
                    "schemas": [USER_SCHEMA],
                    "userName": "bob@example.com",
                    "active": true,
                    "groups": [{"value": "g-1"}],
                })
                .to_string(),
            )
            .create_async()
            .await;

        let created = users(server.url())
            .create(&ScimUser {
                schemas: vec![USER_SCHEMA.to_string()],
                user_name: "bob@example.com".to_string(),
                name: Some(ScimUserName {
                    given_name: Some("Bob".to_string()),
                    family_name: None,
                }),
                active: true,
                emails: vec![ScimUserEmail {
                    value: "bob@example.com".to_string(),
                    primary: true,
                    kind: Some("work".to_string()),
                }],
                ..Default::default()
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.id.as_deref(), Some("u-2"));
        assert_eq!(created.groups, vec![ScimGroupRef { value: "g-1".to_string() }]);
        let reserialized: Value = serde_json::to_value(&created).unwrap();
        assert!(reserialized.get("name").is_none());
    }

    #[tokio::test]
    async fn test_id_stays_one_path_segment() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/scim/Users/u-1%2F..%2FGroups%3Fall=1")
            .with_status(204)
            .create_async()
            .await;

        users(server.url())
            .delete("u-1/../Groups?all=1")
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
