//! Resource and data source adapters.
//!
//! Each adapter declares a schema, deserializes the JSON state it is given
//! into a model struct, builds the wire request, calls one client from the
//! [`ClientSet`] and flattens the response back into state.

mod api_key;
mod archive_retentions;
mod grafana_dashboard;
mod group;
mod ip_access;
mod scope;
mod slo;
mod tco_policy_override;
mod team;
mod user;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::clients::ClientSet;
use crate::error::{ClientError, ProviderError};
use crate::schema::Schema;

pub use api_key::ApiKeyResource;
pub use archive_retentions::ArchiveRetentionsResource;
pub use grafana_dashboard::GrafanaDashboardResource;
pub use group::GroupResource;
pub use ip_access::IpAccessResource;
pub use scope::ScopeResource;
pub use slo::{SloDataSource, SloResource};
pub use tco_policy_override::TcoPolicyOverrideResource;
pub use team::TeamResource;
pub use user::{UserDataSource, UserResource};

/// A managed resource type.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name as used in configuration, e.g. `observability_slo`.
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Create the remote object and return the resulting state.
    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError>;

    /// Refresh state. Returns `Value::Null` when the remote object is gone.
    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError>;

    async fn update(
        &self,
        clients: &ClientSet,
        prior: Value,
        planned: Value,
    ) -> Result<Value, ProviderError>;

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError>;

    /// Import an existing object by id. Reads it with only `id` set.
    async fn import_state(&self, clients: &ClientSet, id: &str) -> Result<Value, ProviderError> {
        let state = self.read(clients, json!({ "id": id })).await?;
        if state.is_null() {
            return Err(ProviderError::NotFound(format!(
                "{} {} does not exist",
                self.type_name(),
                id
            )));
        }
        Ok(state)
    }
}

/// A read-only data source type.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    async fn read(&self, clients: &ClientSet, config: Value) -> Result<Value, ProviderError>;
}

/// Every resource the provider serves.
pub fn resources() -> Vec<Arc<dyn Resource>> {
    vec![
        Arc::new(IpAccessResource),
        Arc::new(SloResource),
        Arc::new(ApiKeyResource),
        Arc::new(ScopeResource),
        Arc::new(TeamResource),
        Arc::new(ArchiveRetentionsResource),
        Arc::new(UserResource),
        Arc::new(GroupResource),
        Arc::new(GrafanaDashboardResource),
        Arc::new(TcoPolicyOverrideResource),
    ]
}

/// Every data source the provider serves.
pub fn data_sources() -> Vec<Arc<dyn DataSource>> {
    vec![Arc::new(SloDataSource), Arc::new(UserDataSource)]
}

pub(crate) fn from_state<T: DeserializeOwned>(state: Value) -> Result<T, ProviderError> {
    Ok(serde_json::from_value(state)?)
}

pub(crate) fn to_state<T: Serialize>(model: &T) -> Result<Value, ProviderError> {
    Ok(serde_json::to_value(model)?)
}

/// The `id` of a stored object, which every read, update and delete needs.
pub(crate) fn require_id(id: Option<&str>, type_name: &str) -> Result<String, ProviderError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ProviderError::Validation(format!(
            "{} state has no id",
            type_name
        ))),
    }
}

/// Log and signal removal from state for an object that no longer exists.
pub(crate) fn removed_from_state(type_name: &str, id: &str) -> Value {
    warn!(
        resource_type = %type_name,
        id = %id,
        "Resource not found, removing from state"
    );
    Value::Null
}

/// Handle the result of a read: not-found removes the object from state,
/// anything else becomes a provider error with `summary` prefixed.
pub(crate) fn read_or_removed<T>(
    result: Result<T, ClientError>,
    type_name: &str,
    id: &str,
    summary: &str,
) -> Result<Option<T>, ProviderError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => {
            removed_from_state(type_name, id);
            Ok(None)
        },
        Err(err) => Err(ProviderError::from_client(summary, err)),
    }
}

/// Handle the result of a delete; an object that is already gone counts as deleted.
pub(crate) fn deleted<T>(
    result: Result<T, ClientError>,
    type_name: &str,
    id: &str,
    summary: &str,
) -> Result<(), ProviderError> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.is_not_found() => {
            warn!(resource_type = %type_name, id = %id, "Resource already deleted");
            Ok(())
        },
        Err(err) => Err(ProviderError::from_client(summary, err)),
    }
}

/// An empty body where an object was expected.
pub(crate) fn empty_response(summary: &str) -> ProviderError {
    ProviderError::Internal(format!("{}: platform returned an empty response", summary))
}
