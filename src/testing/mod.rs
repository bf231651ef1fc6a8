//! Test support for the provider.
//!
//! [`ProviderTester`] drives a [`ProviderService`] the way the host engine
//! would, [`MockPlatform`] stands in for the platform's gRPC services, and
//! the `assert_*` helpers keep plan and diagnostic checks short.
//!
//! ```ignore
//! let platform = MockPlatform::start();
//! platform.on(GET_SLO, |_req: tonic::Request<GetSloRequest>| Ok(GetSloResponse { slo: Some(slo()) }));
//!
//! let tester = configured_provider(&platform, "https://rest.invalid").await;
//! let state = tester.read("observability_slo", json!({"id": "slo-1"})).await.unwrap();
//! ```

mod platform;

pub use platform::{fast_call_options, test_credentials, MockPlatform, RecordedCall};

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ProviderError;
use crate::provider::{ObservabilityProvider, ProviderService};
use crate::schema::{Diagnostic, ProviderSchema};
use crate::types::{ImportedResource, PlanResult};

/// Drives a provider through the same calls the host engine makes.
pub struct ProviderTester<P: ProviderService> {
    provider: P,
}

impl<P: ProviderService> ProviderTester<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn schema(&self) -> ProviderSchema {
        self.provider.schema()
    }

    pub fn resource_types(&self) -> Vec<String> {
        self.provider.metadata().resources
    }

    pub fn data_source_types(&self) -> Vec<String> {
        self.provider.metadata().data_sources
    }

    /// Validate provider configuration, failing on any error diagnostic.
    pub async fn validate_provider_config(&self, config: Value) -> Result<(), TestError> {
        let diagnostics = self.provider.validate_provider_config(config).await?;
        check_diagnostics(diagnostics)
    }

    /// Configure the provider, failing on any error diagnostic.
    pub async fn configure(&self, config: Value) -> Result<(), TestError> {
        let diagnostics = self.provider.configure(config).await?;
        check_diagnostics(diagnostics)
    }

    pub async fn stop(&self) -> Result<(), ProviderError> {
        self.provider.stop().await
    }

    pub async fn validate_resource_config(
        &self,
        resource_type: &str,
        config: Value,
    ) -> Result<(), TestError> {
        let diagnostics = self
            .provider
            .validate_resource_config(resource_type, config)
            .await?;
        check_diagnostics(diagnostics)
    }

    /// Plan a resource creation (no prior state).
    pub async fn plan_create(
        &self,
        resource_type: &str,
        proposed_state: Value,
    ) -> Result<PlanResult, ProviderError> {
        self.provider
            .plan(resource_type, None, proposed_state.clone(), proposed_state)
            .await
    }

    pub async fn plan_update(
        &self,
        resource_type: &str,
        prior_state: Value,
        proposed_state: Value,
    ) -> Result<PlanResult, ProviderError> {
        self.provider
            .plan(
                resource_type,
                Some(prior_state),
                proposed_state.clone(),
                proposed_state,
            )
            .await
    }

    pub async fn plan_delete(
        &self,
        resource_type: &str,
        prior_state: Value,
    ) -> Result<PlanResult, ProviderError> {
        self.provider
            .plan(resource_type, Some(prior_state), Value::Null, Value::Null)
            .await
    }

    pub async fn create(
        &self,
        resource_type: &str,
        planned_state: Value,
    ) -> Result<Value, ProviderError> {
        self.provider.create(resource_type, planned_state).await
    }

    pub async fn read(
        &self,
        resource_type: &str,
        current_state: Value,
    ) -> Result<Value, ProviderError> {
        self.provider.read(resource_type, current_state).await
    }

    pub async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError> {
        self.provider
            .update(resource_type, prior_state, planned_state)
            .await
    }

    pub async fn delete(
        &self,
        resource_type: &str,
        current_state: Value,
    ) -> Result<(), ProviderError> {
        self.provider.delete(resource_type, current_state).await
    }

    pub async fn import_resource(
        &self,
        resource_type: &str,
        id: &str,
    ) -> Result<Vec<ImportedResource>, ProviderError> {
        self.provider.import_resource(resource_type, id).await
    }

    pub async fn upgrade_resource_state(
        &self,
        resource_type: &str,
        version: i64,
        state: Value,
    ) -> Result<Value, ProviderError> {
        self.provider
            .upgrade_resource_state(resource_type, version, state)
            .await
    }

    pub async fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<(), TestError> {
        let diagnostics = self
            .provider
            .validate_data_source_config(data_source_type, config)
            .await?;
        check_diagnostics(diagnostics)
    }

    pub async fn read_data_source(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<Value, ProviderError> {
        self.provider
            .read_data_source(data_source_type, config)
            .await
    }

    /// plan → create → read; returns the state after read.
    pub async fn lifecycle_create(
        &self,
        resource_type: &str,
        config: Value,
    ) -> Result<Value, ProviderError> {
        let plan_result = self.plan_create(resource_type, config).await?;
        let created_state = self
            .create(resource_type, plan_result.planned_state)
            .await?;
        self.read(resource_type, created_state).await
    }

    /// plan → update → read; returns the state after read.
    pub async fn lifecycle_update(
        &self,
        resource_type: &str,
        prior_state: Value,
        proposed_state: Value,
    ) -> Result<Value, ProviderError> {
        let plan_result = self
            .plan_update(resource_type, prior_state.clone(), proposed_state)
            .await?;
        let updated_state = self
            .update(resource_type, prior_state, plan_result.planned_state)
            .await?;
        self.read(resource_type, updated_state).await
    }

    /// plan → delete.
    pub async fn lifecycle_delete(
        &self,
        resource_type: &str,
        current_state: Value,
    ) -> Result<(), ProviderError> {
        let plan = self
            .plan_delete(resource_type, current_state.clone())
            .await?;
        assert!(plan.is_destroy(), "delete plan should destroy");
        self.delete(resource_type, current_state).await
    }
}

/// A provider wired to `platform` for gRPC and `rest_url` for REST, configured
/// with the test credentials and an empty environment.
pub async fn configured_provider(
    platform: &MockPlatform,
    rest_url: &str,
) -> ProviderTester<ObservabilityProvider> {
    let provider = ObservabilityProvider::new()
        .with_dialer(Arc::new(platform.clone()))
        .with_call_options(fast_call_options())
        .with_env(|_| None);
    let tester = ProviderTester::new(provider);
    tester
        .configure(json!({
            "target_url": "example.com:443",
            "api_key": "k",
            "rest_url": rest_url,
        }))
        .await
        .unwrap();
    tester
}

/// An operation that failed with diagnostics or a provider error.
#[derive(Debug)]
pub enum TestError {
    Diagnostics(Vec<Diagnostic>),
    Provider(ProviderError),
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::Diagnostics(diags) => {
                writeln!(f, "Operation failed with {} diagnostic(s):", diags.len())?;
                for diag in diags {
                    write!(f, "  [{:?}] {}", diag.severity, diag.summary)?;
                    if let Some(detail) = &diag.detail {
                        write!(f, ": {}", detail)?;
                    }
                    if let Some(attr) = &diag.attribute {
                        write!(f, " (at {})", attr)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            },
            TestError::Provider(e) => write!(f, "Provider error: {}", e),
        }
    }
}

impl std::error::Error for TestError {}

impl From<ProviderError> for TestError {
    fn from(e: ProviderError) -> Self {
        TestError::Provider(e)
    }
}

fn check_diagnostics(diagnostics: Vec<Diagnostic>) -> Result<(), TestError> {
    let errors: Vec<_> = diagnostics.into_iter().filter(Diagnostic::is_error).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TestError::Diagnostics(errors))
    }
}

fn changed_paths(plan: &PlanResult) -> Vec<&str> {
    plan.changes.iter().map(|c| c.path.as_str()).collect()
}

fn error_summaries(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics
        .iter()
        .filter(|d| d.is_error())
        .map(|d| d.summary.as_str())
        .collect()
}

/// A create plan: something to set and nothing to replace.
pub fn assert_plan_creates(plan: &PlanResult) {
    assert!(!plan.changes.is_empty(), "create plan has no changes");
    assert!(!plan.requires_replace, "create plan requires replacement");
}

pub fn assert_plan_no_changes(plan: &PlanResult) {
    assert!(
        plan.changes.is_empty(),
        "expected no changes, got {:?}",
        changed_paths(plan)
    );
}

pub fn assert_plan_replaces(plan: &PlanResult) {
    assert!(
        plan.requires_replace,
        "expected replacement, plan changes {:?} in place",
        changed_paths(plan)
    );
}

pub fn assert_plan_changes_attribute(plan: &PlanResult, path: &str) {
    assert!(
        changed_paths(plan).contains(&path),
        "expected '{}' to change, changed: {:?}",
        path,
        changed_paths(plan)
    );
}

/// Warnings are allowed.
pub fn assert_no_errors(diagnostics: &[Diagnostic]) {
    let errors = error_summaries(diagnostics);
    assert!(errors.is_empty(), "Expected no errors, got {:?}", errors);
}

pub fn assert_has_errors(diagnostics: &[Diagnostic]) {
    assert!(
        !error_summaries(diagnostics).is_empty(),
        "expected at least one error"
    );
}

/// Some error diagnostic's summary contains `substring`.
pub fn assert_error_contains(diagnostics: &[Diagnostic], substring: &str) {
    let errors = error_summaries(diagnostics);
    assert!(
        errors.iter().any(|s| s.contains(substring)),
        "expected an error containing '{}', got {:?}",
        substring,
        errors
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> ProviderTester<ObservabilityProvider> {
        ProviderTester::new(ObservabilityProvider::new().with_env(|_| None))
    }

    #[tokio::test]
    async fn test_tester_lists_types() {
        let tester = unconfigured();
        assert!(tester
            .resource_types()
            .contains(&"observability_slo".to_string()));
        assert!(tester
            .data_source_types()
            .contains(&"observability_user".to_string()));
        assert!(tester.schema().resources.contains_key("observability_team"));
    }

    #[tokio::test]
    async fn test_tester_configure_reports_missing_key() {
        let tester = unconfigured();
        let err = tester
            .configure(json!({"target_url": "example.com:443"}))
            .await
            .unwrap_err();

        match err {
            TestError::Diagnostics(diags) => {
                assert_error_contains(&diags, "api_key");
                let display = TestError::Diagnostics(diags).to_string();
                assert!(display.contains("(at api_key)"));
            },
            other => panic!("expected diagnostics, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_tester_plan_helpers() {
        let tester = unconfigured();
        let plan = tester
            .plan_create("observability_team", json!({"name": "sre"}))
            .await
            .unwrap();
        assert_plan_creates(&plan);
        assert_plan_changes_attribute(&plan, "name");

        let prior = json!({"id": "7", "name": "sre", "daily_quota": null});
        let plan = tester
            .plan_update("observability_team", prior.clone(), prior.clone())
            .await
            .unwrap();
        assert_plan_no_changes(&plan);

        let plan = tester
            .plan_delete("observability_team", prior)
            .await
            .unwrap();
        assert!(plan.is_destroy());
    }

    #[test]
    fn test_assert_no_errors_accepts_warnings() {
        assert_no_errors(&[Diagnostic::warning("Just a warning")]);
    }

    #[test]
    #[should_panic(expected = "Expected no errors")]
    fn test_assert_no_errors_fails() {
        assert_no_errors(&[Diagnostic::error("An error")]);
    }

    #[test]
    fn test_assert_has_errors() {
        assert_has_errors(&[Diagnostic::error("An error")]);
    }

    #[test]
    fn test_test_error_display() {
        let err = TestError::Diagnostics(vec![
            Diagnostic::error("First error").with_attribute("field1"),
            Diagnostic::error("Second error").with_detail("More info"),
        ]);

        let display = format!("{}", err);
        assert!(display.contains("First error"));
        assert!(display.contains("Second error"));
        assert!(display.contains("field1"));
        assert!(display.contains("More info"));
    }
}
