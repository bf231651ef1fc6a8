//! Per-call connection, auth and retry settings for gRPC clients.
//!
//! Every RPC the provider issues goes through [`CallPropertiesCreator::get_call_properties`]:
//! it dials a fresh channel to the configured target, attaches
//! `authorization: Bearer <api key>` metadata and hands back the
//! [`CallOptions`] (retry policy and deadline) the call runs under. The
//! returned [`CallProperties`] own the connection; dropping them releases it.
//!
//! ```ignore
//! let props = creator.get_call_properties().await?;
//! let stub = SlosServiceClient::new(props.channel());
//! let response = props
//!     .invoke(stub, request, |mut stub, req| async move { stub.get_slo(req).await })
//!     .await?;
//! ```

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use backon::{BackoffBuilder, Retryable};
use tonic::metadata::{AsciiMetadataValue, MetadataMap};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tracing::{debug, instrument, warn};

use crate::config::Credentials;
use crate::error::ClientError;

/// Attempts per RPC, including the first one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Base delay of the linear backoff between attempts.
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Linear backoff: the wait after attempt `n` is `base * n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearBackoff {
    /// Delay after the first failed attempt.
    pub base: Duration,
}

impl LinearBackoff {
    /// Delay to wait after the given (1-based) failed attempt.
    pub fn delay(&self, attempt: u32) -> Duration {
        self.base.saturating_mul(attempt)
    }
}

/// Options every gRPC call runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOptions {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Wait between attempts.
    pub backoff: LinearBackoff,
    /// Status codes that trigger another attempt.
    pub retry_codes: Vec<tonic::Code>,
    /// Deadline sent with each attempt as `grpc-timeout`.
    pub timeout: Option<Duration>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: LinearBackoff {
                base: DEFAULT_BACKOFF_BASE,
            },
            retry_codes: vec![tonic::Code::Unavailable, tonic::Code::ResourceExhausted],
            timeout: None,
        }
    }
}

impl CallOptions {
    /// Set the per-attempt deadline.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a failed attempt with this status should be retried.
    pub fn is_retryable(&self, status: &tonic::Status) -> bool {
        self.retry_codes.contains(&status.code())
    }
}

/// Delays between attempts for one call: `base * n` after the `n`th failure,
/// stopping once `max_attempts` attempts have been made.
#[derive(Debug, Clone, Copy)]
struct LinearSchedule {
    backoff: LinearBackoff,
    max_attempts: u32,
}

impl BackoffBuilder for LinearSchedule {
    type Backoff = LinearDelays;

    fn build(self) -> LinearDelays {
        LinearDelays {
            backoff: self.backoff,
            attempt: 1,
            max_attempts: self.max_attempts,
        }
    }
}

#[derive(Debug)]
struct LinearDelays {
    backoff: LinearBackoff,
    attempt: u32,
    max_attempts: u32,
}

impl Iterator for LinearDelays {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.attempt >= self.max_attempts {
            return None;
        }
        let delay = self.backoff.delay(self.attempt);
        self.attempt += 1;
        Some(delay)
    }
}

/// Run `op` until it succeeds, fails with a non-retryable status or runs
/// out of attempts.
pub async fn retry<T, F, Fut>(options: &CallOptions, op: F) -> Result<T, tonic::Status>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, tonic::Status>>,
{
    let schedule = LinearSchedule {
        backoff: options.backoff,
        max_attempts: options.max_attempts,
    };
    let failed = AtomicU32::new(0);

    op.retry(schedule)
        .sleep(tokio::time::sleep)
        .when(|status: &tonic::Status| options.is_retryable(status))
        .notify(|status: &tonic::Status, delay: Duration| {
            let attempt = failed.fetch_add(1, Ordering::SeqCst) + 1;
            warn!(
                attempt,
                max_attempts = options.max_attempts,
                code = ?status.code(),
                delay_ms = delay.as_millis() as u64,
                "RPC failed, retrying"
            );
        })
        .await
}

/// Opens channels to a target.
#[async_trait::async_trait]
pub trait Dialer: Send + Sync + 'static {
    /// Dial `target` and return a connected channel.
    async fn dial(&self, target: &str) -> Result<Channel, ClientError>;
}

/// Dials over TLS using the platform's native root certificates.
#[derive(Debug, Clone)]
pub struct TlsDialer {
    connect_timeout: Duration,
}

impl Default for TlsDialer {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}

impl TlsDialer {
    /// Set the TCP connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Normalize a target to an `https://` URL.
    ///
    /// `host:port` gains the scheme; `http://` and other schemes are rejected.
    pub fn normalize_target(target: &str) -> Result<String, ClientError> {
        let trimmed = target.trim();
        if trimmed.is_empty() {
            return Err(ClientError::InvalidTarget {
                target: target.to_string(),
                reason: "target is empty".to_string(),
            });
        }
        if trimmed.starts_with("https://") {
            return Ok(trimmed.to_string());
        }
        if trimmed.starts_with("http://") {
            return Err(ClientError::InvalidTarget {
                target: target.to_string(),
                reason: "plaintext targets are not supported".to_string(),
            });
        }
        if let Some((scheme, _)) = trimmed.split_once("://") {
            return Err(ClientError::InvalidTarget {
                target: target.to_string(),
                reason: format!("unsupported scheme {:?}", scheme),
            });
        }
        Ok(format!("https://{}", trimmed))
    }
}

#[async_trait::async_trait]
impl Dialer for TlsDialer {
    async fn dial(&self, target: &str) -> Result<Channel, ClientError> {
        let url = Self::normalize_target(target)?;
        let connection_error = |source| ClientError::Connection {
            target: url.clone(),
            source,
        };

        let endpoint = Endpoint::from_shared(url.clone())
            .map_err(connection_error)?
            .tls_config(ClientTlsConfig::new().with_native_roots())
            .map_err(connection_error)?
            .connect_timeout(self.connect_timeout);

        endpoint.connect().await.map_err(connection_error)
    }
}

/// A live per-call channel. Dropping it marks the connection released.
pub struct Connection {
    channel: Channel,
    target: Arc<str>,
    open: Arc<AtomicUsize>,
}

impl Connection {
    /// A handle to the underlying channel for building a stub.
    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
        debug!(target_url = %self.target, "Released connection");
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Everything one RPC needs: auth metadata, a fresh connection and call options.
#[derive(Debug)]
pub struct CallProperties {
    metadata: MetadataMap,
    connection: Connection,
    options: CallOptions,
}

impl CallProperties {
    /// Outgoing metadata (carries the bearer token).
    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }

    /// The call options.
    pub fn options(&self) -> &CallOptions {
        &self.options
    }

    /// A handle to the connection's channel.
    pub fn channel(&self) -> Channel {
        self.connection.channel()
    }

    /// Wrap `message` in a request carrying the metadata and deadline.
    pub fn request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        *request.metadata_mut() = self.metadata.clone();
        if let Some(timeout) = self.options.timeout {
            request.set_timeout(timeout);
        }
        request
    }

    /// Issue one RPC under the call options, then release the connection.
    ///
    /// `call` receives a fresh copy of the stub and request for every attempt.
    pub async fn invoke<S, Req, Resp, F, Fut>(
        self,
        stub: S,
        message: Req,
        call: F,
    ) -> Result<Resp, ClientError>
    where
        S: Clone,
        Req: Clone,
        F: Fn(S, tonic::Request<Req>) -> Fut,
        Fut: Future<Output = Result<tonic::Response<Resp>, tonic::Status>>,
    {
        let result = retry(&self.options, || {
            call(stub.clone(), self.request(message.clone()))
        })
        .await;
        drop(self);
        Ok(result?.into_inner())
    }
}

/// Builds [`CallProperties`] for every RPC from the provider credentials.
pub struct CallPropertiesCreator {
    target: String,
    authorization: AsciiMetadataValue,
    dialer: Arc<dyn Dialer>,
    options: CallOptions,
    open: Arc<AtomicUsize>,
}

impl CallPropertiesCreator {
    /// Creator that dials over TLS.
    pub fn new(credentials: &Credentials) -> Result<Self, ClientError> {
        Self::with_dialer(credentials, Arc::new(TlsDialer::default()))
    }

    /// Creator that dials through `dialer`.
    ///
    /// Fails if the target is empty or the API key cannot be carried in
    /// request metadata.
    pub fn with_dialer(
        credentials: &Credentials,
        dialer: Arc<dyn Dialer>,
    ) -> Result<Self, ClientError> {
        if credentials.target_url().trim().is_empty() {
            return Err(ClientError::InvalidTarget {
                target: credentials.target_url().to_string(),
                reason: "target is empty".to_string(),
            });
        }

        let mut authorization: AsciiMetadataValue = format!("Bearer {}", credentials.api_key())
            .parse()
            .map_err(|_| {
                ClientError::InvalidApiKey(
                    "contains characters that are not valid in request metadata".to_string(),
                )
            })?;
        authorization.set_sensitive(true);

        Ok(Self {
            target: credentials.target_url().to_string(),
            authorization,
            dialer,
            options: CallOptions::default().with_timeout(credentials.request_timeout()),
            open: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Replace the options handed to every call.
    pub fn with_call_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// Dial a new connection and bundle it with auth metadata and call options.
    #[instrument(skip(self), fields(target_url = %self.target))]
    pub async fn get_call_properties(&self) -> Result<CallProperties, ClientError> {
        let mut metadata = MetadataMap::new();
        metadata.insert("authorization", self.authorization.clone());

        let channel = self.dialer.dial(&self.target).await?;
        self.open.fetch_add(1, Ordering::SeqCst);
        debug!("Dialed connection");

        Ok(CallProperties {
            metadata,
            connection: Connection {
                channel,
                target: Arc::from(self.target.as_str()),
                open: self.open.clone(),
            },
            options: self.options.clone(),
        })
    }

    /// Number of per-call connections currently held.
    pub fn open_connections(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// The options handed to every call.
    pub fn call_options(&self) -> &CallOptions {
        &self.options
    }

    /// The configured target.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Debug for CallPropertiesCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallPropertiesCreator")
            .field("target", &self.target)
            .field("options", &self.options)
            .field("open_connections", &self.open_connections())
            .finish_non_exhaustive()
    }
}
