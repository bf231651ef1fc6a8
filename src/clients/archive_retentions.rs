//! Archive retentions client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::retentions::retentions_service_client::RetentionsServiceClient;
use crate::generated::retentions::{
    ActivateRetentionsRequest, ActivateRetentionsResponse, GetRetentionsEnabledRequest,
    GetRetentionsEnabledResponse, GetRetentionsRequest, GetRetentionsResponse,
    UpdateRetentionsRequest, UpdateRetentionsResponse,
};

/// The retention slots are fixed per account; they can be renamed and
/// activated but not created or removed.
#[derive(Debug, Clone)]
pub struct ArchiveRetentionsClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl ArchiveRetentionsClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), name = "archive_retentions.get")]
    pub async fn get(
        &self,
        request: GetRetentionsRequest,
    ) -> Result<GetRetentionsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RetentionsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_retentions(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "archive_retentions.update")]
    pub async fn update(
        &self,
        request: UpdateRetentionsRequest,
    ) -> Result<UpdateRetentionsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RetentionsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.update_retentions(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "archive_retentions.activate")]
    pub async fn activate(
        &self,
        request: ActivateRetentionsRequest,
    ) -> Result<ActivateRetentionsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RetentionsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.activate_retentions(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "archive_retentions.get_enabled")]
    pub async fn get_enabled(
        &self,
        request: GetRetentionsEnabledRequest,
    ) -> Result<GetRetentionsEnabledResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RetentionsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_retentions_enabled(req).await
            })
            .await
    }
}
