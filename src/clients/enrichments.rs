//! Enrichments client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::enrichments::enrichment_service_client::EnrichmentServiceClient;
use crate::generated::enrichments::{
    AddEnrichmentsRequest, AddEnrichmentsResponse, GetEnrichmentsRequest, GetEnrichmentsResponse,
    RemoveEnrichmentsRequest, RemoveEnrichmentsResponse,
};

#[derive(Debug, Clone)]
pub struct EnrichmentsClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl EnrichmentsClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), fields(count = request.request_enrichments.len()), name = "enrichments.add")]
    pub async fn add(
        &self,
        request: AddEnrichmentsRequest,
    ) -> Result<AddEnrichmentsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = EnrichmentServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.add_enrichments(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "enrichments.get")]
    pub async fn get(
        &self,
        request: GetEnrichmentsRequest,
    ) -> Result<GetEnrichmentsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = EnrichmentServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_enrichments(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(ids = ?request.enrichment_ids), name = "enrichments.remove")]
    pub async fn remove(
        &self,
        request: RemoveEnrichmentsRequest,
    ) -> Result<RemoveEnrichmentsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = EnrichmentServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.remove_enrichments(req).await
            })
            .await
    }
}
