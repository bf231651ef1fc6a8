//! Scopes client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::scopes::scopes_service_client::ScopesServiceClient;
use crate::generated::scopes::{
    CreateScopeRequest, CreateScopeResponse, DeleteScopeRequest, DeleteScopeResponse,
    GetTeamScopesByIdsRequest, GetTeamScopesByIdsResponse, UpdateScopeRequest,
    UpdateScopeResponse,
};

#[derive(Debug, Clone)]
pub struct ScopesClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl ScopesClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), name = "scopes.create")]
    pub async fn create(
        &self,
        request: CreateScopeRequest,
    ) -> Result<CreateScopeResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = ScopesServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.create_scope(req).await })
            .await
    }

    /// Fetch scopes by id. Ids the platform does not know are left out of the response.
    #[instrument(skip(self, request), fields(ids = ?request.ids), name = "scopes.get")]
    pub async fn get(
        &self,
        request: GetTeamScopesByIdsRequest,
    ) -> Result<GetTeamScopesByIdsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = ScopesServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_team_scopes_by_ids(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(id = %request.id), name = "scopes.update")]
    pub async fn update(
        &self,
        request: UpdateScopeRequest,
    ) -> Result<UpdateScopeResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = ScopesServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.update_scope(req).await })
            .await
    }

    #[instrument(skip(self, request), fields(id = %request.id), name = "scopes.delete")]
    pub async fn delete(
        &self,
        request: DeleteScopeRequest,
    ) -> Result<DeleteScopeResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = ScopesServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.delete_scope(req).await })
            .await
    }
}

#[cfg(test)]
mod tests {
    use tonic::Request;

    use super::*;
    use crate::generated::scopes::{EntityType, Filter, Scope};
    use crate::testing::MockPlatform;

    const GET: &str = "/com.observability.scopes.v1.ScopesService/GetTeamScopesByIds";

    #[tokio::test]
    async fn test_get_filters_unknown_ids() {
        let platform = MockPlatform::start();
        platform.on(GET, |req: Request<GetTeamScopesByIdsRequest>| {
            let scopes = req
                .into_inner()
                .ids
                .into_iter()
                .filter(|id| id == "scope-1")
                .map(|id| Scope {
                    id,
                    display_name: "prod logs".to_string(),
                    description: None,
                    filters: vec![Filter {
                        entity_type: EntityType::Logs as i32,
                        expression: "<v1>(subsystemName == 'api')".to_string(),
                    }],
                    default_expression: "<v1>true".to_string(),
                })
                .collect();
            Ok(GetTeamScopesByIdsResponse { scopes })
        });
        let clients = platform.client_set("https://rest.invalid");

        let found = clients
            .scopes()
            .get(GetTeamScopesByIdsRequest {
                ids: vec!["scope-1".to_string()],
            })
            .await
            .unwrap();
        assert_eq!(found.scopes.len(), 1);
        assert_eq!(found.scopes[0].filters[0].entity_type, EntityType::Logs as i32);

        let missing = clients
            .scopes()
            .get(GetTeamScopesByIdsRequest {
                ids: vec!["scope-9".to_string()],
            })
            .await
            .unwrap();
        assert!(missing.scopes.is_empty());
    }
}
