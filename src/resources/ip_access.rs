use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{deleted, empty_response, from_state, read_or_removed, require_id, to_state, Resource};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::generated::ip_access::{
    CompanyIpAccessSettings, CreateCompanyIpAccessSettingsRequest, CustomerSupportAccess,
    DeleteCompanyIpAccessSettingsRequest, GetCompanyIpAccessSettingsRequest, IpAccess,
    ReplaceCompanyIpAccessSettingsRequest,
};
use crate::schema::{Attribute, Block, NestedBlock, Schema};

const TYPE_NAME: &str = "observability_ip_access";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct IpAccessModel {
    id: Option<String>,
    enable_customer_support_access: bool,
    ip_access: Vec<IpAccessRuleModel>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct IpAccessRuleModel {
    name: Option<String>,
    ip_range: String,
    enabled: bool,
}

impl IpAccessModel {
    fn rules(&self) -> Vec<IpAccess> {
        self.ip_access
            .iter()
            .map(|rule| IpAccess {
                name: rule.name.clone(),
                ip_range: rule.ip_range.clone(),
                enabled: rule.enabled,
            })
            .collect()
    }

    fn support_access(&self) -> i32 {
        if self.enable_customer_support_access {
            CustomerSupportAccess::Enabled as i32
        } else {
            CustomerSupportAccess::Disabled as i32
        }
    }

    fn flatten(settings: CompanyIpAccessSettings) -> Self {
        Self {
            id: settings.id,
            enable_customer_support_access: settings.enable_customer_support_access
                == CustomerSupportAccess::Enabled as i32,
            ip_access: settings
                .ip_access
                .into_iter()
                .map(|rule| IpAccessRuleModel {
                    name: rule.name,
                    ip_range: rule.ip_range,
                    enabled: rule.enabled,
                })
                .collect(),
        }
    }
}

/// Company-wide IP access settings. There is one per company.
pub struct IpAccessResource;

#[async_trait]
impl Resource for IpAccessResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        let rule = Block::new()
            .with_attribute("name", Attribute::optional_string())
            .with_attribute(
                "ip_range",
                Attribute::required_string().with_description("CIDR range, e.g. 10.0.0.0/24"),
            )
            .with_attribute("enabled", Attribute::required_bool());

        Schema::v0()
            .with_description("IP ranges allowed to reach the platform")
            .with_attribute("id", Attribute::computed_string())
            .with_attribute(
                "enable_customer_support_access",
                Attribute::optional_bool().with_default(Value::Bool(false)),
            )
            .with_block("ip_access", NestedBlock::list(rule))
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let model: IpAccessModel = from_state(planned)?;

        let settings = clients
            .ip_access()
            .create(CreateCompanyIpAccessSettingsRequest {
                ip_access: model.rules(),
                enable_customer_support_access: model.support_access(),
            })
            .await
            .map_err(|e| ProviderError::from_client("Error creating IP access settings", e))?
            .settings
            .ok_or_else(|| empty_response("Error creating IP access settings"))?;
        to_state(&IpAccessModel::flatten(settings))
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let model: IpAccessModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;

        let result = clients
            .ip_access()
            .get(GetCompanyIpAccessSettingsRequest {
                id: Some(id.clone()),
            })
            .await;
        match read_or_removed(result, TYPE_NAME, &id, "Error reading IP access settings")? {
            Some(response) => {
                let settings = response
                    .settings
                    .ok_or_else(|| empty_response("Error reading IP access settings"))?;
                to_state(&IpAccessModel::flatten(settings))
            },
            None => Ok(Value::Null),
        }
    }

    async fn update(
        &self,
        clients: &ClientSet,
        prior: Value,
        planned: Value,
    ) -> Result<Value, ProviderError> {
        let prior: IpAccessModel = from_state(prior)?;
        let model: IpAccessModel = from_state(planned)?;
        let id = require_id(prior.id.as_deref(), TYPE_NAME)?;

        let settings = clients
            .ip_access()
            .replace(ReplaceCompanyIpAccessSettingsRequest {
                id: Some(id),
                ip_access: model.rules(),
                enable_customer_support_access: model.support_access(),
            })
            .await
            .map_err(|e| ProviderError::from_client("Error updating IP access settings", e))?
            .settings
            .ok_or_else(|| empty_response("Error updating IP access settings"))?;
        to_state(&IpAccessModel::flatten(settings))
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: IpAccessModel = from_state(current)?;
        let id = require_id(model.id.as_deref(), TYPE_NAME)?;
        let result = clients
            .ip_access()
            .delete(DeleteCompanyIpAccessSettingsRequest {
                id: Some(id.clone()),
            })
            .await;
        deleted(result, TYPE_NAME, &id, "Error deleting IP access settings")
    }
}
