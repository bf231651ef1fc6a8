//! Company IP access settings client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::ip_access::ip_access_service_client::IpAccessServiceClient;
use crate::generated::ip_access::{
    CreateCompanyIpAccessSettingsRequest, CreateCompanyIpAccessSettingsResponse,
    DeleteCompanyIpAccessSettingsRequest, DeleteCompanyIpAccessSettingsResponse,
    GetCompanyIpAccessSettingsRequest, GetCompanyIpAccessSettingsResponse,
    ReplaceCompanyIpAccessSettingsRequest, ReplaceCompanyIpAccessSettingsResponse,
};

#[derive(Debug, Clone)]
pub struct IpAccessClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl IpAccessClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), name = "ip_access.create")]
    pub async fn create(
        &self,
        request: CreateCompanyIpAccessSettingsRequest,
    ) -> Result<CreateCompanyIpAccessSettingsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = IpAccessServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.create_company_ip_access_settings(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "ip_access.get")]
    pub async fn get(
        &self,
        request: GetCompanyIpAccessSettingsRequest,
    ) -> Result<GetCompanyIpAccessSettingsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = IpAccessServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_company_ip_access_settings(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "ip_access.replace")]
    pub async fn replace(
        &self,
        request: ReplaceCompanyIpAccessSettingsRequest,
    ) -> Result<ReplaceCompanyIpAccessSettingsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = IpAccessServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.replace_company_ip_access_settings(req).await
            })
            .await
    }

    #[instrument(skip(self, request), name = "ip_access.delete")]
    pub async fn delete(
        &self,
        request: DeleteCompanyIpAccessSettingsRequest,
    ) -> Result<DeleteCompanyIpAccessSettingsResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = IpAccessServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.delete_company_ip_access_settings(req).await
            })
            .await
    }
}
