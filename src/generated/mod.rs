//! Protocol buffer types and client stubs for the platform's gRPC services.
//!
//! Checked in; regenerate with `cargo build --features regenerate-proto`.

pub mod alerts;
pub mod apikeys;
pub mod dashboards;
pub mod enrichments;
pub mod events2metrics;
pub mod ip_access;
pub mod recording_rules;
pub mod retentions;
pub mod rule_groups;
pub mod scopes;
pub mod slos;
pub mod teams;
