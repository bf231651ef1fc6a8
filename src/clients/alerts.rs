//! Alert definitions client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::alerts::alert_defs_service_client::AlertDefsServiceClient;
use crate::generated::alerts::{
    CreateAlertDefRequest, CreateAlertDefResponse, DeleteAlertDefRequest, DeleteAlertDefResponse,
    GetAlertDefRequest, GetAlertDefResponse, ReplaceAlertDefRequest, ReplaceAlertDefResponse,
};

#[derive(Debug, Clone)]
pub struct AlertsClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl AlertsClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), name = "alerts.create")]
    pub async fn create(
        &self,
        request: CreateAlertDefRequest,
    ) -> Result<CreateAlertDefResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = AlertDefsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.create_alert_def(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "alerts.get")]
    pub async fn get(&self, request: GetAlertDefRequest) -> Result<GetAlertDefResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = AlertDefsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_alert_def(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "alerts.replace")]
    pub async fn replace(
        &self,
        request: ReplaceAlertDefRequest,
    ) -> Result<ReplaceAlertDefResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = AlertDefsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.replace_alert_def(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "alerts.delete")]
    pub async fn delete(
        &self,
        request: DeleteAlertDefRequest,
    ) -> Result<DeleteAlertDefResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = AlertDefsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.delete_alert_def(req).await
            })
            .await
    }
}
