//! Teams client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::teams::team_service_client::TeamServiceClient;
use crate::generated::teams::{
    CreateTeamInOrgRequest, CreateTeamInOrgResponse, DeleteTeamRequest, DeleteTeamResponse,
    GetTeamRequest, GetTeamResponse, UpdateTeamRequest, UpdateTeamResponse,
};

#[derive(Debug, Clone)]
pub struct TeamsClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl TeamsClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), fields(team_name = %request.team_name), name = "teams.create")]
    pub async fn create(
        &self,
        request: CreateTeamInOrgRequest,
    ) -> Result<CreateTeamInOrgResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = TeamServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.create_team_in_org(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "teams.get")]
    pub async fn get(&self, request: GetTeamRequest) -> Result<GetTeamResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = TeamServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.get_team(req).await })
            .await
    }

    #[instrument(skip(self, request), name = "teams.update")]
    pub async fn update(&self, request: UpdateTeamRequest) -> Result<UpdateTeamResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = TeamServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.update_team(req).await })
            .await
    }

    #[instrument(skip(self, request), name = "teams.delete")]
    pub async fn delete(&self, request: DeleteTeamRequest) -> Result<DeleteTeamResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = TeamServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.delete_team(req).await })
            .await
    }
}
