//! Native dashboards client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::dashboards::dashboards_service_client::DashboardsServiceClient;
use crate::generated::dashboards::{
    CreateDashboardRequest, CreateDashboardResponse, DeleteDashboardRequest,
    DeleteDashboardResponse, GetDashboardRequest, GetDashboardResponse, ReplaceDashboardRequest,
    ReplaceDashboardResponse,
};

#[derive(Debug, Clone)]
pub struct DashboardsClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl DashboardsClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), fields(request_id = %request.request_id), name = "dashboards.create")]
    pub async fn create(
        &self,
        request: CreateDashboardRequest,
    ) -> Result<CreateDashboardResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = DashboardsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.create_dashboard(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(dashboard_id = %request.dashboard_id), name = "dashboards.get")]
    pub async fn get(
        &self,
        request: GetDashboardRequest,
    ) -> Result<GetDashboardResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = DashboardsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_dashboard(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(request_id = %request.request_id), name = "dashboards.replace")]
    pub async fn replace(
        &self,
        request: ReplaceDashboardRequest,
    ) -> Result<ReplaceDashboardResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = DashboardsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.replace_dashboard(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(dashboard_id = %request.dashboard_id), name = "dashboards.delete")]
    pub async fn delete(
        &self,
        request: DeleteDashboardRequest,
    ) -> Result<DeleteDashboardResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = DashboardsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.delete_dashboard(req).await
            })
            .await
    }
}
