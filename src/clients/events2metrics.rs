//! Events-to-metrics client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::events2metrics::events2_metric_service_client::Events2MetricServiceClient;
use crate::generated::events2metrics::{
    CreateE2mRequest, CreateE2mResponse, DeleteE2mRequest, DeleteE2mResponse, GetE2mByIdRequest,
    GetE2mByIdResponse, ReplaceE2mRequest, ReplaceE2mResponse,
};

#[derive(Debug, Clone)]
pub struct Events2MetricsClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl Events2MetricsClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), name = "events2metrics.create")]
    pub async fn create(&self, request: CreateE2mRequest) -> Result<CreateE2mResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = Events2MetricServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.create_e2m(req).await })
            .await
    }

    #[instrument(skip(self, request), fields(id = %request.id), name = "events2metrics.get")]
    pub async fn get(&self, request: GetE2mByIdRequest) -> Result<GetE2mByIdResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = Events2MetricServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_e2m_by_id(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "events2metrics.replace")]
    pub async fn replace(
        &self,
        request: ReplaceE2mRequest,
    ) -> Result<ReplaceE2mResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = Events2MetricServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.replace_e2m(req).await })
            .await
    }

    #[instrument(skip(self, request), fields(id = %request.id), name = "events2metrics.delete")]
    pub async fn delete(&self, request: DeleteE2mRequest) -> Result<DeleteE2mResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = Events2MetricServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.delete_e2m(req).await })
            .await
    }
}
