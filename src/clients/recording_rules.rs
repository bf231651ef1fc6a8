//! Recording rule group sets client.

use std::sync::Arc;

use tracing::instrument;

use crate::call_properties::CallPropertiesCreator;
use crate::error::ClientError;
use crate::generated::recording_rules::rule_group_sets_client::RuleGroupSetsClient;
use crate::generated::recording_rules::{
    CreateRuleGroupSet, CreateRuleGroupSetResult, DeleteRuleGroupSet, DeleteRuleGroupSetResult,
    FetchRuleGroupSet, OutRuleGroupSet, UpdateRuleGroupSet, UpdateRuleGroupSetResult,
};

/// Client for Prometheus-style recording rule group sets.
#[derive(Debug, Clone)]
pub struct RecordingRuleGroupSetsClient {
    call_properties: Arc<CallPropertiesCreator>,
}

impl RecordingRuleGroupSetsClient {
    pub fn new(call_properties: Arc<CallPropertiesCreator>) -> Self {
        Self { call_properties }
    }

    #[instrument(skip(self, request), name = "recording_rules.create")]
    pub async fn create(
        &self,
        request: CreateRuleGroupSet,
    ) -> Result<CreateRuleGroupSetResult, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RuleGroupSetsClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.create(req).await })
            .await
    }

    #[instrument(skip(self, request), fields(id = %request.id), name = "recording_rules.get")]
    pub async fn get(&self, request: FetchRuleGroupSet) -> Result<OutRuleGroupSet, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RuleGroupSetsClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.fetch(req).await })
            .await
    }

    #[instrument(skip(self, request), fields(id = %request.id), name = "recording_rules.update")]
    pub async fn update(
        &self,
        request: UpdateRuleGroupSet,
    ) -> Result<UpdateRuleGroupSetResult, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RuleGroupSetsClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.update(req).await })
            .await
    }

    #[instrument(skip(self, request), fields(id = %request.id), name = "recording_rules.delete")]
    pub async fn delete(
        &self,
        request: DeleteRuleGroupSet,
    ) -> Result<DeleteRuleGroupSetResult, ClientError> {
        let props = self.call_properties.get_call_properties().await?;
        let stub = RuleGroupSetsClient::new(props.channel());
        props
            .invoke(stub, request, |mut stub, req| async move { stub.delete(req).await })
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tonic::Request;

    use super::*;
    use crate::generated::recording_rules::{RecordingRule, RecordingRuleGroup};
    use crate::testing::MockPlatform;

    const CREATE: &str = "/com.observability.recording_rules.v1.RuleGroupSets/Create";
    const FETCH: &str = "/com.observability.recording_rules.v1.RuleGroupSets/Fetch";

    fn group() -> RecordingRuleGroup {
        RecordingRuleGroup {
            name: "http".to_string(),
            interval: Some(60),
            limit: None,
            rules: vec![RecordingRule {
                record: "job:http_requests:rate5m".to_string(),
                expr: "sum by (job) (rate(http_requests_total[5m]))".to_string(),
                labels: HashMap::new(),
            }],
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let platform = MockPlatform::start();
        platform
            .on(CREATE, |req: Request<CreateRuleGroupSet>| {
                assert_eq!(req.get_ref().groups.len(), 1);
                Ok(CreateRuleGroupSetResult {
                    id: "set-1".to_string(),
                })
            })
            .on(FETCH, |req: Request<FetchRuleGroupSet>| {
                Ok(OutRuleGroupSet {
                    id: req.into_inner().id,
                    groups: vec![group()],
                    name: Some("http rules".to_string()),
                })
            });
        let clients = platform.client_set("https://rest.invalid");

        let created = clients
            .recording_rule_group_sets()
            .create(CreateRuleGroupSet {
                groups: vec![group()],
                name: Some("http rules".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(created.id, "set-1");

        let fetched = clients
            .recording_rule_group_sets()
            .get(FetchRuleGroupSet { id: created.id })
            .await
            .unwrap();
        assert_eq!(fetched.id, "set-1");
        assert_eq!(fetched.groups, vec![group()]);
        assert_eq!(platform.dials(), 2);
    }
}
