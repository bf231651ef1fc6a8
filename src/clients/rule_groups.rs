//! Log parsing rule groups client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::rule_groups::rule_groups_service_client::RuleGroupsServiceClient;
use crate::generated::rule_groups::{
    CreateRuleGroupRequest, CreateRuleGroupResponse, DeleteRuleGroupRequest,
    DeleteRuleGroupResponse, GetRuleGroupRequest, GetRuleGroupResponse, UpdateRuleGroupRequest,
    UpdateRuleGroupResponse,
};

/// Client for parsing rule groups. Not to be confused with
/// [`RecordingRuleGroupSetsClient`](super::RecordingRuleGroupSetsClient).
#[derive(Debug, Clone)]
pub struct RuleGroupsClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl RuleGroupsClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), name = "rule_groups.create")]
    pub async fn create(
        &self,
        request: CreateRuleGroupRequest,
    ) -> Result<CreateRuleGroupResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RuleGroupsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.create_rule_group(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(group_id = %request.group_id), name = "rule_groups.get")]
    pub async fn get(
        &self,
        request: GetRuleGroupRequest,
    ) -> Result<GetRuleGroupResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RuleGroupsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.get_rule_group(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(group_id = %request.group_id), name = "rule_groups.update")]
    pub async fn update(
        &self,
        request: UpdateRuleGroupRequest,
    ) -> Result<UpdateRuleGroupResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RuleGroupsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.update_rule_group(req).await
            })
            .await
    }

    #[instrument(skip(self, request), fields(group_id = %request.group_id), name = "rule_groups.delete")]
    pub async fn delete(
        &self,
        request: DeleteRuleGroupRequest,
    ) -> Result<DeleteRuleGroupResponse, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RuleGroupsServiceClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move {
                stub.delete_rule_group(req).await
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use tonic::Request;

    use super::*;
    use crate::generated::rule_groups::{Rule, RuleGroup, RuleSubgroup};
    use crate::testing::MockPlatform;

    const UPDATE: &str = "/com.observability.rule_groups.v1.RuleGroupsService/UpdateRuleGroup";

    #[tokio::test]
    async fn test_update_sends_group_id_and_body() {
        let platform = MockPlatform::start();
        platform.on(UPDATE, |req: Request<UpdateRuleGroupRequest>| {
            let req = req.into_inner();
            let body = req.rule_group.unwrap_or_default();
            Ok(UpdateRuleGroupResponse {
                rule_group: Some(RuleGroup {
                    id: req.group_id,
                    name: body.name,
                    enabled: body.enabled,
                    rule_subgroups: body.rule_subgroups,
                    ..Default::default()
                }),
            })
        });
        let clients = platform.client_set("https://rest.invalid");

        let response = clients
            .rule_groups()
            .update(UpdateRuleGroupRequest {
                group_id: "rg-1".to_string(),
                rule_group: Some(CreateRuleGroupRequest {
                    name: "nginx".to_string(),
                    enabled: true,
                    rule_subgroups: vec![RuleSubgroup {
                        rules: vec![Rule {
                            name: "extract status".to_string(),
                            source_field: "text".to_string(),
                            regex: r"(?P<status>\d{3})".to_string(),
                            enabled: true,
                            ..Default::default()
                        }],
                        enabled: true,
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        let group = response.rule_group.unwrap();
        assert_eq!(group.id, "rg-1");
        assert_eq!(group.name, "nginx");
        assert_eq!(group.rule_subgroups[0].rules[0].name, "extract status");
        assert_eq!(platform.calls_to(UPDATE).len(), 1);
    }
}
