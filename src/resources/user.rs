use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    deleted, empty_response, from_state, read_or_removed, require_id, to_state, DataSource,
    Resource,
};
use crate::clients::users::{ScimUser, ScimUserEmail, ScimUserName, USER_SCHEMA};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::schema::{Attribute, AttributeFlags, Block, NestedBlock, Schema};

const TYPE_NAME: &str = "observability_user";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct UserModel {
    id: Option<String>,
    user_name: String,
    given_name: Option<String>,
    family_name: Option<String>,
    active: Option<bool>,
    emails: Vec<EmailModel>,
    groups: Option<Vec<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct EmailModel {
    value: String,
    primary: bool,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl UserModel {
    fn extract(&self) -> ScimUser {
        let name = (self.given_name.is_some() || self.family_name.is_some()).then(|| {
            ScimUserName {
                given_name: self.given_name.clone(),
                family_name: self.family_name.clone(),
            }
        });
        ScimUser {
            id: None,
            schemas: vec![USER_SCHEMA.to_string()],
            user_name: self.user_name.clone(),
            name,
            active: self.active.unwrap_or(true),
            emails: self
                .emails
                .iter()
                .map(|email| ScimUserEmail {
                    value: email.value.clone(),
                    primary: email.primary,
                    kind: email.kind.clone(),
                })
                .collect(),
            groups: Vec::new(),
        }
    }

    fn flatten(user: ScimUser) -> Self {
        let name = user.name.unwrap_or_default();
        Self {
            id: user.id,
            user_name: user.user_name,
            given_name: name.given_name,
            family_name: name.family_name,
            active: Some(user.active),
            emails: user
                .emails
                .into_iter()
                .map(|email| EmailModel {
                    value: email.value,
                    primary: email.primary,
                    kind: email.kind,
                })
                .collect(),
            groups: Some(user.groups.into_iter().map(|g| g.value).collect()),
        }
    }
}

fn user_schema() -> Schema {
    let email = Block::new()
        .with_attribute("value", Attribute::required_string())
        .with_attribute(
            "primary",
            Attribute::optional_bool().with_default(Value::Bool(false)),
        )
        .with_attribute("type", Attribute::optional_string());

    Schema::v0()
        .with_description("A user provisioned through SCIM")
        .with_attribute("id", Attribute::computed_string())
        .with_attribute("user_name", Attribute::required_string())
        .with_attribute("given_name", Attribute::optional_string())
        .with_attribute("family_name", Attribute::optional_string())
        .with_attribute(
            "active",
            Attribute::optional_bool().with_default(Value::Bool(true)),
        )
        .with_attribute(
            "groups",
            Attribute::string_set(AttributeFlags::computed())
                .with_description("Ids of the groups the user belongs to"),
        )
        .with_block("emails", NestedBlock::set(email))
}

pub struct UserResource;

#[async_trait]
impl Resource for UserResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        user_schema()
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let model: UserModel = from_state(planned)?;

        let created = clients
            .users()
            .create(&model.extract())
            .await
            .map_err(|e| ProviderError::from_client("Error creating user", e))?
            .ok_or_else(|| empty_response("Error creating user"))?;
        to_state(&UserModel::flatten(created))
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let model: UserModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        let result = clients.users().get(&id).await;
        match read_or_removed(result, TYPE_NAME, &id, "Error reading user")? {
            Some(user) => {
                let user = user.ok_or_else(|| empty_response("Error reading user"))?;
                to_state(&UserModel::flatten(user))
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
        let prior: UserModel = from_state(prior)?;
        let model: UserModel = from_state(planned)?;
        let id = require_id(prior.id.as_deref(), TYPE_NAME)?;

        let updated = clients
            .users()
            .update(&id, &model.extract())
            .await
            .map_err(|e| ProviderError::from_client("Error updating user", e))?
            .ok_or_else(|| empty_response("Error updating user"))?;
        to_state(&UserModel::flatten(updated))
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: UserModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;
        let result = clients.users().delete(&id).await;
        deleted(result, TYPE_NAME, &id, "Error deleting user")
    }
}

/// Looks up a SCIM user by id.
pub struct UserDataSource;

#[async_trait]
impl DataSource for UserDataSource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        let mut schema = user_schema().with_attribute("id", Attribute::required_string());
        for (name, attr) in schema.block.attributes.iter_mut() {
            if name != "id" {
                attr.flags = AttributeFlags::computed();
                attr.default = None;
            }
        }
        schema
    }

    async fn read(&self, clients: &ClientSet, config: Value) -> Result<Value, ProviderError> {
        let model: UserModel = from_state(config)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        match clients.users().get(&id).await {
            Ok(Some(user)) => to_state(&UserModel::flatten(user)),
            Ok(None) => Err(empty_response("Error reading user")),
            Err(e) if e.is_not_found() => {
                Err(ProviderError::NotFound(format!("user {} does not exist", id)))
            },
            Err(e) => Err(ProviderError::from_client("Error reading user", e)),
        }
    }
}
