//! Infrastructure-as-code provider for an observability platform.
//!
//! The platform exposes most configuration over gRPC and a few areas (SCIM
//! users and groups, Grafana dashboards, TCO overrides) over REST. This crate
//! wraps both behind typed clients and maps them onto declarative resources.
//!
//! # Layers
//!
//! - [`call_properties`]: per-call bundle of `authorization: Bearer` metadata,
//!   a freshly dialed TLS channel and retry options. Every gRPC call gets its
//!   own, and the channel is dropped when the call finishes.
//! - [`clients`]: one client per platform service plus [`ClientSet`], the
//!   immutable collection built once from [`Credentials`].
//! - [`resources`]: adapters translating between resource state and wire
//!   messages (extract/flatten) and running create, read, update and delete.
//! - [`provider`]: [`ObservabilityProvider`], the [`ProviderService`] the host
//!   engine drives: schemas, validation, planning and dispatch.
//!
//! # Quick Start
//!
//! ```ignore
//! use observability_provider::{ObservabilityProvider, ProviderService};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     observability_provider::init_logging();
//!
//!     let provider = ObservabilityProvider::new();
//!     let diagnostics = provider
//!         .configure(json!({"target_url": "api.example.com:443"}))
//!         .await?;
//!     assert!(diagnostics.is_empty());
//!
//!     let team = provider
//!         .create("observability_team", json!({"name": "sre"}))
//!         .await?;
//!     println!("{}", team["id"]);
//!     Ok(())
//! }
//! ```
//!
//! The API key is read from `OBSERVABILITY_API_KEY` when absent from the
//! configuration; see [`config`] for every fallback.

#![warn(clippy::all)]

pub mod call_properties;
pub mod clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod plan;
pub mod provider;
pub mod resources;
pub mod schema;
pub mod types;
pub mod validation;

#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod generated;

#[cfg(test)]
mod testing;

pub use call_properties::{
    CallOptions, CallProperties, CallPropertiesCreator, Dialer, LinearBackoff, TlsDialer,
};
pub use clients::ClientSet;
pub use config::{Credentials, ProviderConfig};
pub use error::{ClientError, ProviderError};
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use provider::{ObservabilityProvider, ProviderService};
pub use schema::ProviderSchema;
pub use types::{
    AttributeChange, ImportedResource, PlanResult, ProviderMetadata, ServerCapabilities,
};
pub use validation::{is_valid, validate, validate_result};

pub use async_trait::async_trait;

pub use serde_json;
pub use tonic;
pub use tracing;
