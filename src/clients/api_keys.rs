//! API keys client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::apikeys::api_keys_service_client::ApiKeysServiceClient;
use crate::generated::apikeys::{
    CreateApiKeyRequest, CreateApiKeyResponse, DeleteApiKeyRequest, DeleteApiKeyResponse,
    GetApiKeyRequest, GetApiKeyResponse, UpdateApiKeyRequest, UpdateApiKeyResponse,
};

/// Manages API keys. Key values are never logged.
#[derive(Debug, Clone)]
pub struct ApiKeysClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl ApiKeysClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), fields(name = %request.name), name = "api_keys.create")]
    pub async fn create(
        &self,
        request: CreateApiKeyRequest,
    ) -> Result<CreateApiKeyResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = ApiKeysServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.create_api_key(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(key_id = %request.key_id), name = "api_keys.get")]
    pub async fn get(&self, request: GetApiKeyRequest) -> Result<GetApiKeyResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = ApiKeysServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_api_key(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(key_id = %request.key_id), name = "api_keys.update")]
    pub async fn update(
        &self,
        request: UpdateApiKeyRequest,
    ) -> Result<UpdateApiKeyResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = ApiKeysServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.update_api_key(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(key_id = %request.key_id), name = "api_keys.delete")]
    pub async fn delete(
        &self,
        request: DeleteApiKeyRequest,
    ) -> Result<DeleteApiKeyResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = ApiKeysServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.delete_api_key(req).await
            })
            .await
    }
}
