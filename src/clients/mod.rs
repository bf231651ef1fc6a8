//! Clients for the platform's gRPC services and REST endpoints.
//!
//! gRPC clients share one [`CallPropertiesCreator`] and open a fresh
//! connection per call. REST clients share one [`RestClient`] and its
//! connection pool. [`ClientSet`] bundles them all and is built once per
//! provider configuration.

pub mod alerts;
pub mod api_keys;
pub mod archive_retentions;
pub mod dashboards;
pub mod enrichments;
pub mod events2metrics;
pub mod grafana;
pub mod groups;
pub mod ip_access;
pub mod recording_rules;
pub mod rest;
pub mod rule_groups;
pub mod scopes;
pub mod slos;
pub mod tco_overrides;
pub mod teams;
pub mod users;

use std::sync::Arc;

use tracing::debug;

pub use alerts::AlertsClient;
pub use api_keys::ApiKeysClient;
pub use archive_retentions::ArchiveRetentionsClient;
pub use dashboards::DashboardsClient;
pub use enrichments::EnrichmentsClient;
pub use events2metrics::Events2MetricsClient;
pub use grafana::GrafanaClient;
pub use groups::GroupsClient;
pub use ip_access::IpAccessClient;
pub use recording_rules::RecordingRuleGroupSetsClient;
pub use rest::RestClient;
pub use rule_groups::RuleGroupsClient;
pub use scopes::ScopesClient;
pub use slos::SlosClient;
pub use tco_overrides::TcoOverridesClient;
pub use teams::TeamsClient;
pub use users::UsersClient;

use crate::call_properties::{CallPropertiesCreator, Dialer};
use crate::config::Credentials;
use crate::error::ClientError;

/// Every platform client, built from one set of credentials.
///
/// Immutable after construction; share it as `Arc<ClientSet>`.
#[derive(Debug)]
pub struct ClientSet {
    call_properties: Arc<CallPropertiesCreator>,
    slos: SlosClient,
    alerts: AlertsClient,
    rule_groups: RuleGroupsClient,
    recording_rule_group_sets: RecordingRuleGroupSetsClient,
    dashboards: DashboardsClient,
    enrichments: EnrichmentsClient,
    events2metrics: Events2MetricsClient,
    teams: TeamsClient,
    api_keys: ApiKeysClient,
    ip_access: IpAccessClient,
    archive_retentions: ArchiveRetentionsClient,
    scopes: ScopesClient,
    users: UsersClient,
    groups: GroupsClient,
    grafana: GrafanaClient,
    tco_overrides: TcoOverridesClient,
}

impl ClientSet {
    /// Clients dialing the target over TLS.
    pub fn new(credentials: &Credentials) -> Result<Self, ClientError> {
        Self::with_call_properties(credentials, CallPropertiesCreator::new(credentials)?)
    }

    /// Clients dialing through `dialer`.
    pub fn with_dialer(
        credentials: &Credentials,
        dialer: Arc<dyn Dialer>,
    ) -> Result<Self, ClientError> {
        Self::with_call_properties(
            credentials,
            CallPropertiesCreator::with_dialer(credentials, dialer)?,
        )
    }

    /// Clients sharing an already built creator.
    pub fn with_call_properties(
        credentials: &Credentials,
        call_properties: CallPropertiesCreator,
    ) -> Result<Self, ClientError> {
        let cp = Arc::new(call_properties);
        let rest = RestClient::new(credentials)?;
        debug!(
            target_url = %cp.target(),
            rest_url = %rest.base_url(),
            "Built client set"
        );

        Ok(Self {
            slos: SlosClient::new(cp.clone()),
            alerts: AlertsClient::new(cp.clone()),
            rule_groups: RuleGroupsClient::new(cp.clone()),
            recording_rule_group_sets: RecordingRuleGroupSetsClient::new(cp.clone()),
            dashboards: DashboardsClient::new(cp.clone()),
            enrichments: EnrichmentsClient::new(cp.clone()),
            events2metrics: Events2MetricsClient::new(cp.clone()),
            teams: TeamsClient::new(cp.clone()),
            api_keys: ApiKeysClient::new(cp.clone()),
            ip_access: IpAccessClient::new(cp.clone()),
            archive_retentions: ArchiveRetentionsClient::new(cp.clone()),
            scopes: ScopesClient::new(cp.clone()),
            users: UsersClient::new(rest.clone()),
            groups: GroupsClient::new(rest.clone()),
            grafana: GrafanaClient::new(rest.clone()),
            tco_overrides: TcoOverridesClient::new(rest),
            call_properties: cp,
        })
    }

    /// The creator shared by every gRPC client.
    pub fn call_properties(&self) -> &CallPropertiesCreator {
        &self.call_properties
    }

    pub fn slos(&self) -> &SlosClient {
        &self.slos
    }

    pub fn alerts(&self) -> &AlertsClient {
        &self.alerts
    }

    /// Log parsing rule groups.
    pub fn rule_groups(&self) -> &RuleGroupsClient {
        &self.rule_groups
    }

    pub fn recording_rule_group_sets(&self) -> &RecordingRuleGroupSetsClient {
        &self.recording_rule_group_sets
    }

    pub fn dashboards(&self) -> &DashboardsClient {
        &self.dashboards
    }

    pub fn enrichments(&self) -> &EnrichmentsClient {
        &self.enrichments
    }

    pub fn events2metrics(&self) -> &Events2MetricsClient {
        &self.events2metrics
    }

    pub fn teams(&self) -> &TeamsClient {
        &self.teams
    }

    pub fn api_keys(&self) -> &ApiKeysClient {
        &self.api_keys
    }

    pub fn ip_access(&self) -> &IpAccessClient {
        &self.ip_access
    }

    pub fn archive_retentions(&self) -> &ArchiveRetentionsClient {
        &self.archive_retentions
    }

    pub fn scopes(&self) -> &ScopesClient {
        &self.scopes
    }

    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    pub fn groups(&self) -> &GroupsClient {
        &self.groups
    }

    pub fn grafana(&self) -> &GrafanaClient {
        &self.grafana
    }

    pub fn tco_overrides(&self) -> &TcoOverridesClient {
        &self.tco_overrides
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::{test_credentials, MockPlatform};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_client_set_is_send_sync() {
        assert_send_sync::<ClientSet>();
        assert_send_sync::<Arc<ClientSet>>();
    }

    #[test]
    fn test_new_rejects_invalid_key() {
        let credentials = Credentials::new("example.com:443", "bad\nkey");
        let err = ClientSet::new(&credentials).unwrap_err();
        assert!(matches!(err, ClientError::InvalidApiKey(_)));
    }

    #[tokio::test]
    async fn test_new_does_not_dial() {
        let platform = MockPlatform::start();
        let clients = ClientSet::with_dialer(&test_credentials(), Arc::new(platform.clone()))
            .unwrap();

        assert_eq!(platform.dials(), 0);
        assert_eq!(clients.call_properties().target(), "example.com:443");
        assert_eq!(clients.call_properties().open_connections(), 0);
    }

    #[tokio::test]
    async fn test_rest_clients_use_rest_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/v1/external/tco/overrides/o-1")
            .match_header("authorization", "Bearer k")
            .with_status(200)
            .create_async()
            .await;

        let platform = MockPlatform::start();
        let clients = platform.client_set(&server.url());
        clients.tco_overrides().delete("o-1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(platform.dials(), 0);
    }
}
