//! SLO service client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::slos::slos_service_client::SlosServiceClient;
use crate::generated::slos::{
    CreateSloRequest, CreateSloResponse, DeleteSloRequest, DeleteSloResponse, GetSloRequest,
    GetSloResponse, ListSlosRequest, ListSlosResponse, ReplaceSloRequest, ReplaceSloResponse,
};

/// Forwards SLO operations, one connection per call.
#[derive(Debug, Clone)]
pub struct SlosClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl SlosClient {
    /// Client that builds its calls with `call_properties`.
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    /// Create an SLO.
    #[instrument(skip(self, request), name = "slos.create")]
    pub async fn create(&self, request: CreateSloRequest) -> Result<CreateSloResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = SlosServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.create_slo(req).await })
            .await
    }

    /// Fetch an SLO by id.
    #[instrument(skip(self, request), fields(id = %request.id), name = "slos.get")]
    pub async fn get(&self, request: GetSloRequest) -> Result<GetSloResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = SlosServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.get_slo(req).await })
            .await
    }

    /// Replace an SLO.
    #[instrument(skip(self, request), name = "slos.replace")]
    pub async fn replace(
        &self,
        request: ReplaceSloRequest,
    ) -> Result<ReplaceSloResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = SlosServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.replace_slo(req).await })
            .await
    }

    /// Delete an SLO.
    #[instrument(skip(self, request), fields(id = %request.id), name = "slos.delete")]
    pub async fn delete(&self, request: DeleteSloRequest) -> Result<DeleteSloResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = SlosServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.delete_slo(req).await })
            .await
    }

    /// List every SLO.
    #[instrument(skip(self, request), name = "slos.list")]
    pub async fn list(&self, request: ListSlosRequest) -> Result<ListSlosResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = SlosServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.list_slos(req).await })
            .await
    }
}
