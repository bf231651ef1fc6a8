//! The provider surface the host engine drives.
//!
//! [`ProviderService`] is the set of calls the engine makes, using
//! `serde_json::Value` for configuration and state. [`ObservabilityProvider`]
//! implements it by dispatching to the registered resource and data source
//! adapters with the [`ClientSet`] built at configure time.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::call_properties::{CallOptions, CallPropertiesCreator, Dialer, TlsDialer};
use crate::clients::ClientSet;
use crate::config::{process_env, ProviderConfig};
use crate::error::{ClientError, ProviderError};
use crate::plan;
use crate::resources::{self, DataSource, Resource};
use crate::schema::{has_errors, Diagnostic, ProviderSchema};
use crate::types::{ImportedResource, PlanResult, ProviderMetadata, ServerCapabilities};
use crate::validation::validate;

/// Operations the host engine invokes on a provider.
#[async_trait::async_trait]
pub trait ProviderService: Send + Sync + 'static {
    // =========================================================================
    // Schema & Metadata
    // =========================================================================

    /// Return the provider's schema including all resources and data sources.
    fn schema(&self) -> ProviderSchema;

    /// Registered type names. By default, derived from the schema.
    fn metadata(&self) -> ProviderMetadata {
        let schema = self.schema();
        let mut resources: Vec<String> = schema.resources.into_keys().collect();
        let mut data_sources: Vec<String> = schema.data_sources.into_keys().collect();
        resources.sort();
        data_sources.sort();
        ProviderMetadata {
            resources,
            data_sources,
            capabilities: ServerCapabilities::default(),
        }
    }

    // =========================================================================
    // Provider Lifecycle
    // =========================================================================

    /// Validate the provider configuration before configuring.
    async fn validate_provider_config(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let _ = config;
        Ok(vec![])
    }

    /// Configure the provider with credentials and settings.
    async fn configure(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError>;

    /// Stop the provider gracefully.
    async fn stop(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    // =========================================================================
    // Resource Operations
    // =========================================================================

    /// Validate a resource's configuration before planning.
    async fn validate_resource_config(
        &self,
        resource_type: &str,
        config: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let _ = (resource_type, config);
        Ok(vec![])
    }

    /// Upgrade resource state from an older schema version.
    async fn upgrade_resource_state(
        &self,
        resource_type: &str,
        version: i64,
        state: Value,
    ) -> Result<Value, ProviderError> {
        let _ = (resource_type, version);
        Ok(state)
    }

    /// Plan changes for a resource.
    async fn plan(
        &self,
        resource_type: &str,
        prior_state: Option<Value>,
        proposed_state: Value,
        config: Value,
    ) -> Result<PlanResult, ProviderError>;

    /// Create a new resource.
    async fn create(&self, resource_type: &str, planned_state: Value)
        -> Result<Value, ProviderError>;

    /// Read the current state of a resource. `Value::Null` means it is gone.
    async fn read(&self, resource_type: &str, current_state: Value)
        -> Result<Value, ProviderError>;

    /// Update an existing resource.
    async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError>;

    /// Delete a resource.
    async fn delete(&self, resource_type: &str, current_state: Value) -> Result<(), ProviderError>;

    /// Import existing infrastructure into management.
    async fn import_resource(
        &self,
        resource_type: &str,
        _id: &str,
    ) -> Result<Vec<ImportedResource>, ProviderError> {
        Err(ProviderError::Unimplemented(format!(
            "Import not supported for resource type: {}",
            resource_type
        )))
    }

    // =========================================================================
    // Data Source Operations
    // =========================================================================

    /// Validate a data source's configuration.
    async fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let _ = (data_source_type, config);
        Ok(vec![])
    }

    /// Read data from an external source.
    async fn read_data_source(
        &self,
        data_source_type: &str,
        _config: Value,
    ) -> Result<Value, ProviderError> {
        Err(ProviderError::UnknownResource(format!(
            "Unknown data source type: {}",
            data_source_type
        )))
    }
}

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Provider for the observability platform.
///
/// Unconfigured until [`ProviderService::configure`] succeeds; every
/// resource operation before that fails with
/// [`ProviderError::Configuration`].
pub struct ObservabilityProvider {
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
    data_sources: BTreeMap<&'static str, Arc<dyn DataSource>>,
    dialer: Arc<dyn Dialer>,
    call_options: Option<CallOptions>,
    env: EnvLookup,
    clients: RwLock<Option<Arc<ClientSet>>>,
}

impl ObservabilityProvider {
    /// A provider with every resource and data source registered, dialing
    /// over TLS and reading fallbacks from the process environment.
    pub fn new() -> Self {
        Self {
            resources: resources::resources()
                .into_iter()
                .map(|r| (r.type_name(), r))
                .collect(),
            data_sources: resources::data_sources()
                .into_iter()
                .map(|d| (d.type_name(), d))
                .collect(),
            dialer: Arc::new(TlsDialer::default()),
            call_options: None,
            env: Arc::new(process_env),
            clients: RwLock::new(None),
        }
    }

    /// Dial the platform through `dialer` instead of TLS.
    pub fn with_dialer(mut self, dialer: Arc<dyn Dialer>) -> Self {
        self.dialer = dialer;
        self
    }

    /// Retry policy for gRPC calls. The configured request timeout still applies.
    pub fn with_call_options(mut self, options: CallOptions) -> Self {
        self.call_options = Some(options);
        self
    }

    /// Look up configuration fallbacks with `env` instead of the process environment.
    pub fn with_env<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Arc::new(env);
        self
    }

    /// Whether `configure` has succeeded since the last `stop`.
    pub async fn is_configured(&self) -> bool {
        self.clients.read().await.is_some()
    }

    fn resource(&self, resource_type: &str) -> Result<&Arc<dyn Resource>, ProviderError> {
        self.resources.get(resource_type).ok_or_else(|| {
            ProviderError::UnknownResource(format!("Unknown resource type: {}", resource_type))
        })
    }

    fn data_source(&self, data_source_type: &str) -> Result<&Arc<dyn DataSource>, ProviderError> {
        self.data_sources.get(data_source_type).ok_or_else(|| {
            ProviderError::UnknownResource(format!(
                "Unknown data source type: {}",
                data_source_type
            ))
        })
    }

    async fn clients(&self) -> Result<Arc<ClientSet>, ProviderError> {
        self.clients.read().await.clone().ok_or_else(|| {
            ProviderError::Configuration("provider has not been configured".to_string())
        })
    }

    /// Schema diagnostics, then the diagnostics of resolving credentials.
    fn check_config(&self, config: &Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let diagnostics = validate(&ProviderConfig::schema(), config);
        if has_errors(&diagnostics) {
            return Ok(diagnostics);
        }
        match ProviderConfig::from_value(config)?.resolve_with(|name| (self.env)(name)) {
            Ok(_) => Ok(diagnostics),
            Err(errors) => Ok(diagnostics.into_iter().chain(errors).collect()),
        }
    }
}

impl Default for ObservabilityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObservabilityProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservabilityProvider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .field("call_options", &self.call_options)
            .finish_non_exhaustive()
    }
}

/// Diagnostic for credentials that parse but cannot be used.
fn credential_diagnostic(err: ClientError) -> Diagnostic {
    let attribute = match err {
        ClientError::InvalidApiKey(_) => "api_key",
        _ => "target_url",
    };
    Diagnostic::error("Invalid provider configuration")
        .with_detail(err.to_string())
        .with_attribute(attribute)
}

#[async_trait::async_trait]
impl ProviderService for ObservabilityProvider {
    fn schema(&self) -> ProviderSchema {
        let mut schema = ProviderSchema::new().with_provider_config(ProviderConfig::schema());
        for (name, resource) in &self.resources {
            schema = schema.with_resource(*name, resource.schema());
        }
        for (name, data_source) in &self.data_sources {
            schema = schema.with_data_source(*name, data_source.schema());
        }
        schema
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            resources: self.resources.keys().map(|k| k.to_string()).collect(),
            data_sources: self.data_sources.keys().map(|k| k.to_string()).collect(),
            capabilities: ServerCapabilities { plan_destroy: true },
        }
    }

    #[instrument(skip(self, config), name = "provider.validate_provider_config")]
    async fn validate_provider_config(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let diagnostics = self.check_config(&config)?;
        debug!(diagnostics = diagnostics.len(), "ValidateProviderConfig completed");
        Ok(diagnostics)
    }

    #[instrument(skip(self, config), name = "provider.configure")]
    async fn configure(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        debug!("Configure called");
        let diagnostics = self.check_config(&config)?;
        if has_errors(&diagnostics) {
            warn!(diagnostics = diagnostics.len(), "Configure completed with errors");
            return Ok(diagnostics);
        }

        let credentials = match ProviderConfig::from_value(&config)?
            .resolve_with(|name| (self.env)(name))
        {
            Ok(credentials) => credentials,
            Err(errors) => return Ok(errors),
        };

        let creator = match CallPropertiesCreator::with_dialer(&credentials, self.dialer.clone()) {
            Ok(creator) => creator,
            Err(e) => {
                warn!(error = %e, "Configure completed with errors");
                return Ok(vec![credential_diagnostic(e)]);
            },
        };
        let creator = match &self.call_options {
            Some(options) => creator.with_call_options(
                options
                    .clone()
                    .with_timeout(credentials.request_timeout().or(options.timeout)),
            ),
            None => creator,
        };

        let clients = ClientSet::with_call_properties(&credentials, creator).map_err(|e| {
            error!(error = %e, "Configure failed");
            ProviderError::from_client("Error building platform clients", e)
        })?;
        *self.clients.write().await = Some(Arc::new(clients));

        info!(
            target_url = %credentials.target_url(),
            rest_url = %credentials.rest_url(),
            "Configure completed successfully"
        );
        Ok(diagnostics)
    }

    #[instrument(skip(self), name = "provider.stop")]
    async fn stop(&self) -> Result<(), ProviderError> {
        self.clients.write().await.take();
        info!("Provider stopped");
        Ok(())
    }

    #[instrument(skip(self, config), fields(resource_type = %resource_type), name = "provider.validate_resource_config")]
    async fn validate_resource_config(
        &self,
        resource_type: &str,
        config: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let resource = self.resource(resource_type)?;
        Ok(validate(&resource.schema(), &config))
    }

    async fn upgrade_resource_state(
        &self,
        resource_type: &str,
        version: i64,
        state: Value,
    ) -> Result<Value, ProviderError> {
        let current = self.resource(resource_type)?.schema().version;
        if version < 0 || version as u64 > current {
            return Err(ProviderError::InvalidRequest(format!(
                "{} state version {} is not supported (current {})",
                resource_type, version, current
            )));
        }
        // Every resource is still at its first schema version.
        Ok(state)
    }

    #[instrument(skip(self, prior_state, proposed_state, _config), fields(resource_type = %resource_type), name = "provider.plan")]
    async fn plan(
        &self,
        resource_type: &str,
        prior_state: Option<Value>,
        proposed_state: Value,
        _config: Value,
    ) -> Result<PlanResult, ProviderError> {
        let resource = self.resource(resource_type)?;
        let result = plan::plan(&resource.schema(), prior_state.as_ref(), proposed_state);
        debug!(
            changes = result.changes.len(),
            requires_replace = result.requires_replace,
            "Plan completed"
        );
        Ok(result)
    }

    #[instrument(skip(self, planned_state), name = "provider.create")]
    async fn create(&self, resource_type: &str, planned_state: Value) -> Result<Value, ProviderError> {
        let resource = self.resource(resource_type)?;
        let clients = self.clients().await?;
        info!(resource_type = %resource_type, "Create called");

        match resource.create(&clients, planned_state).await {
            Ok(state) => {
                info!(resource_type = %resource_type, "Create completed successfully");
                Ok(state)
            },
            Err(e) => {
                error!(resource_type = %resource_type, error = %e, "Create failed");
                Err(e)
            },
        }
    }

    #[instrument(skip(self, current_state), name = "provider.read")]
    async fn read(&self, resource_type: &str, current_state: Value) -> Result<Value, ProviderError> {
        let resource = self.resource(resource_type)?;
        let clients = self.clients().await?;
        debug!(resource_type = %resource_type, "Read called");

        match resource.read(&clients, current_state).await {
            Ok(state) => {
                debug!(
                    resource_type = %resource_type,
                    removed = state.is_null(),
                    "Read completed successfully"
                );
                Ok(state)
            },
            Err(e) => {
                error!(resource_type = %resource_type, error = %e, "Read failed");
                Err(e)
            },
        }
    }

    #[instrument(skip(self, prior_state, planned_state), name = "provider.update")]
    async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError> {
        let resource = self.resource(resource_type)?;
        let clients = self.clients().await?;
        info!(resource_type = %resource_type, "Update called");

        match resource.update(&clients, prior_state, planned_state).await {
            Ok(state) => {
                info!(resource_type = %resource_type, "Update completed successfully");
                Ok(state)
            },
            Err(e) => {
                error!(resource_type = %resource_type, error = %e, "Update failed");
                Err(e)
            },
        }
    }

    #[instrument(skip(self, current_state), name = "provider.delete")]
    async fn delete(&self, resource_type: &str, current_state: Value) -> Result<(), ProviderError> {
        let resource = self.resource(resource_type)?;
        let clients = self.clients().await?;
        info!(resource_type = %resource_type, "Delete called");

        match resource.delete(&clients, current_state).await {
            Ok(()) => {
                info!(resource_type = %resource_type, "Delete completed successfully");
                Ok(())
            },
            Err(e) => {
                error!(resource_type = %resource_type, error = %e, "Delete failed");
                Err(e)
            },
        }
    }

    #[instrument(skip(self), name = "provider.import_resource")]
    async fn import_resource(
        &self,
        resource_type: &str,
        id: &str,
    ) -> Result<Vec<ImportedResource>, ProviderError> {
        let resource = self.resource(resource_type)?;
        let clients = self.clients().await?;
        info!(resource_type = %resource_type, id = %id, "ImportResourceState called");

        match resource.import_state(&clients, id).await {
            Ok(state) => {
                info!(resource_type = %resource_type, "ImportResourceState completed successfully");
                Ok(vec![ImportedResource::new(resource_type, state)])
            },
            Err(e) => {
                error!(resource_type = %resource_type, error = %e, "ImportResourceState failed");
                Err(e)
            },
        }
    }

    async fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let data_source = self.data_source(data_source_type)?;
        Ok(validate(&data_source.schema(), &config))
    }

    #[instrument(skip(self, config), name = "provider.read_data_source")]
    async fn read_data_source(&self, data_source_type: &str, config: Value) -> Result<Value, ProviderError> {
        let data_source = self.data_source(data_source_type)?;
        let clients = self.clients().await?;
        debug!(data_source_type = %data_source_type, "ReadDataSource called");

        data_source.read(&clients, config).await.map_err(|e| {
            error!(data_source_type = %data_source_type, error = %e, "ReadDataSource failed");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use tonic::Request;

    use super::*;
    use crate::generated::slos::{GetSloRequest, GetSloResponse, Slo};
    use crate::testing::{
        assert_error_contains, configured_provider, fast_call_options, MockPlatform,
        ProviderTester,
    };

    const GET_SLO: &str = "/com.observability.slos.v1.SlosService/GetSlo";

    fn provider(platform: &MockPlatform, env: HashMap<&'static str, &'static str>) -> ObservabilityProvider {
        ObservabilityProvider::new()
            .with_dialer(Arc::new(platform.clone()))
            .with_call_options(fast_call_options())
            .with_env(move |name| env.get(name).map(|v| v.to_string()))
    }

    fn serve_slo(platform: &MockPlatform) {
        platform.on(GET_SLO, |req: Request<GetSloRequest>| {
            Ok(GetSloResponse {
                slo: Some(Slo {
                    id: Some(req.into_inner().id),
                    name: "availability".to_string(),
                    target_threshold_percentage: 99.0,
                    ..Default::default()
                }),
            })
        });
    }

    #[test]
    fn test_schema_and_metadata() {
        let provider = ObservabilityProvider::new();
        let schema = provider.schema();
        assert_eq!(schema.resources.len(), 10);
        assert_eq!(schema.data_sources.len(), 2);
        assert!(schema.provider.block.attributes["api_key"].flags.sensitive);

        let metadata = provider.metadata();
        assert!(metadata.capabilities.plan_destroy);
        let mut sorted = metadata.resources.clone();
        sorted.sort();
        assert_eq!(metadata.resources, sorted);
        assert_eq!(
            metadata.data_sources,
            vec!["observability_slo", "observability_user"]
        );
    }

    #[tokio::test]
    async fn test_operations_before_configure() {
        let platform = MockPlatform::start();
        let provider = provider(&platform, HashMap::new());

        assert!(!provider.is_configured().await);
        let err = provider
            .read("observability_slo", json!({"id": "slo-1"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
        let err = provider
            .import_resource("observability_team", "7")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
        assert_eq!(platform.dials(), 0);

        // Planning and validation need no clients.
        provider
            .plan("observability_team", None, json!({"name": "a"}), json!({"name": "a"}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_types() {
        let platform = MockPlatform::start();
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let err = tester
            .create("observability_widget", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownResource(_)));
        let err = tester
            .read_data_source("observability_team", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownResource(_)));
    }

    #[tokio::test]
    async fn test_configure_from_environment() {
        let platform = MockPlatform::start();
        serve_slo(&platform);
        let provider = provider(
            &platform,
            HashMap::from([
                ("OBSERVABILITY_TARGET_URL", "example.com:443"),
                ("OBSERVABILITY_API_KEY", "from-env"),
            ]),
        );

        let diagnostics = provider.configure(json!({})).await.unwrap();
        assert!(diagnostics.is_empty());
        assert!(provider.is_configured().await);

        let state = provider
            .read("observability_slo", json!({"id": "slo-1"}))
            .await
            .unwrap();
        assert_eq!(state["name"], "availability");
        assert_eq!(
            platform.calls_to(GET_SLO)[0].authorization.as_deref(),
            Some("Bearer from-env")
        );
    }

    #[tokio::test]
    async fn test_configure_reports_schema_errors() {
        let platform = MockPlatform::start();
        let provider = provider(&platform, HashMap::new());

        let diagnostics = provider
            .configure(json!({"target_url": 5, "api_key": "k"}))
            .await
            .unwrap();
        assert_error_contains(&diagnostics, "Invalid type for attribute 'target_url'");
        assert!(diagnostics
            .iter()
            .any(|d| d.attribute.as_deref() == Some("target_url")));
        assert!(!provider.is_configured().await);
    }

    #[tokio::test]
    async fn test_configure_rejects_unusable_key() {
        let platform = MockPlatform::start();
        let provider = provider(&platform, HashMap::new());

        let diagnostics = provider
            .configure(json!({"target_url": "example.com:443", "api_key": "bad\nkey"}))
            .await
            .unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("api_key"));
        assert!(!provider.is_configured().await);
    }

    #[tokio::test]
    async fn test_validate_provider_config_reports_missing_values() {
        let platform = MockPlatform::start();
        let tester = ProviderTester::new(provider(&platform, HashMap::new()));

        tester
            .validate_provider_config(json!({"target_url": "example.com:443", "api_key": "k"}))
            .await
            .unwrap();
        assert!(tester.validate_provider_config(json!({})).await.is_err());
    }

    #[tokio::test]
    async fn test_stop_clears_clients() {
        let platform = MockPlatform::start();
        let tester = configured_provider(&platform, "https://rest.invalid").await;
        assert!(tester.provider().is_configured().await);

        tester.stop().await.unwrap();
        let err = tester
            .delete("observability_slo", json!({"id": "slo-1"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_upgrade_resource_state() {
        let platform = MockPlatform::start();
        let tester = configured_provider(&platform, "https://rest.invalid").await;
        let state = json!({"id": "7", "name": "sre"});

        let upgraded = tester
            .upgrade_resource_state("observability_team", 0, state.clone())
            .await
            .unwrap();
        assert_eq!(upgraded, state);

        let err = tester
            .upgrade_resource_state("observability_team", 1, state)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_concurrent_reads_dial_per_call() {
        let platform = MockPlatform::start();
        serve_slo(&platform);
        let tester = Arc::new(configured_provider(&platform, "https://rest.invalid").await);

        let reads: Vec<_> = (0..8)
            .map(|i| {
                let tester = tester.clone();
                tokio::spawn(async move {
                    tester
                        .read("observability_slo", json!({ "id": format!("slo-{}", i) }))
                        .await
                })
            })
            .collect();
        for read in reads {
            assert_eq!(read.await.unwrap().unwrap()["name"], "availability");
        }

        assert_eq!(platform.dials(), 8);
        assert_eq!(platform.calls_to(GET_SLO).len(), 8);
    }
}
