//! An in-memory stand-in for the platform's gRPC services.
//!
//! Every dial through [`MockPlatform`] opens a fresh `tokio::io::duplex` pipe
//! into a tonic server that routes each method path to a registered handler,
//! so clients exercise the real codec, metadata and per-call connection
//! handling without touching the network.

use std::collections::HashMap;
use std::convert::Infallible;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use hyper_util::rt::TokioIo;
use tokio::io::DuplexStream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tonic::body::Body;
use tonic::codegen::http::{self, Uri};
use tonic::codegen::{BoxFuture, Service};
use tonic::server::NamedService;
use tonic::transport::{Channel, Endpoint, Server};
use tonic::Status;

use crate::call_properties::{CallOptions, CallPropertiesCreator, Dialer, LinearBackoff};
use crate::clients::ClientSet;
use crate::config::Credentials;
use crate::error::ClientError;

type Handler =
    Arc<dyn Fn(http::Request<Body>) -> BoxFuture<http::Response<Body>, Infallible> + Send + Sync>;

/// One request seen by the platform.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub authorization: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Default)]
struct Registry {
    handlers: Mutex<HashMap<String, Handler>>,
    calls: Mutex<Vec<RecordedCall>>,
}

trait ServiceName: Send + Sync + 'static {
    const NAME: &'static str;
}

struct Mock<N> {
    registry: Arc<Registry>,
    _name: PhantomData<fn() -> N>,
}

impl<N> Mock<N> {
    fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            _name: PhantomData,
        }
    }
}

impl<N> Clone for Mock<N> {
    fn clone(&self) -> Self {
        Self::new(self.registry.clone())
    }
}

impl<N: ServiceName> NamedService for Mock<N> {
    const NAME: &'static str = N::NAME;
}

impl<N: ServiceName> Service<http::Request<Body>> for Mock<N> {
    type Response = http::Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let recorded = RecordedCall {
            path: path.clone(),
            authorization: header("authorization"),
            timeout: header("grpc-timeout"),
        };
        self.registry.calls.lock().unwrap().push(recorded);

        let handler = self.registry.handlers.lock().unwrap().get(&path).cloned();
        match handler {
            Some(handler) => handler(req),
            None => Box::pin(async move {
                let mut response = http::Response::new(Body::default());
                let headers = response.headers_mut();
                headers.insert(
                    Status::GRPC_STATUS,
                    (tonic::Code::Unimplemented as i32).into(),
                );
                headers.insert(
                    http::header::CONTENT_TYPE,
                    tonic::metadata::GRPC_CONTENT_TYPE,
                );
                Ok(response)
            }),
        }
    }
}

struct Unary<F>(Arc<F>);

impl<Req, Resp, F> tonic::server::UnaryService<Req> for Unary<F>
where
    F: Fn(tonic::Request<Req>) -> Result<Resp, Status> + Send + Sync + 'static,
    Resp: Send + 'static,
{
    type Response = Resp;
    type Future = BoxFuture<tonic::Response<Resp>, Status>;

    fn call(&mut self, request: tonic::Request<Req>) -> Self::Future {
        let result = (self.0)(request).map(tonic::Response::new);
        Box::pin(async move { result })
    }
}

macro_rules! platform_services {
    ($($marker:ident => $name:literal,)*) => {
        $(
            struct $marker;
            impl ServiceName for $marker {
                const NAME: &'static str = $name;
            }
        )*

        fn router(registry: &Arc<Registry>) -> tonic::transport::server::Router {
            Server::builder()
                $(.add_service(Mock::<$marker>::new(registry.clone())))*
        }
    };
}

platform_services! {
    Alerts => "com.observability.alerts.v1.AlertDefsService",
    ApiKeys => "com.observability.apikeys.v1.ApiKeysService",
    Dashboards => "com.observability.dashboards.v1.DashboardsService",
    Enrichments => "com.observability.enrichments.v1.EnrichmentService",
    Events2Metrics => "com.observability.events2metrics.v1.Events2MetricService",
    IpAccess => "com.observability.ip_access.v1.IpAccessService",
    RecordingRules => "com.observability.recording_rules.v1.RuleGroupSets",
    Retentions => "com.observability.retentions.v1.RetentionsService",
    RuleGroups => "com.observability.rule_groups.v1.RuleGroupsService",
    Scopes => "com.observability.scopes.v1.ScopesService",
    Slos => "com.observability.slos.v1.SlosService",
    Teams => "com.observability.teams.v1.TeamService",
}

/// The mocked platform. Cloning shares handlers, call log and dial count.
#[derive(Clone)]
pub struct MockPlatform {
    registry: Arc<Registry>,
    dials: Arc<AtomicUsize>,
    connections: mpsc::UnboundedSender<Result<DuplexStream, std::io::Error>>,
}

impl MockPlatform {
    /// Start serving. Must be called inside a tokio runtime.
    pub fn start() -> Self {
        let registry = Arc::new(Registry::default());
        let (connections, incoming) = mpsc::unbounded_channel();

        let server = router(&registry).serve_with_incoming(UnboundedReceiverStream::new(incoming));
        tokio::spawn(server);

        Self {
            registry,
            dials: Arc::new(AtomicUsize::new(0)),
            connections,
        }
    }

    /// Answer unary calls to `path` with `handler`.
    pub fn on<Req, Resp, F>(&self, path: &str, handler: F) -> &Self
    where
        Req: prost::Message + Default + Send + 'static,
        Resp: prost::Message + Send + 'static,
        F: Fn(tonic::Request<Req>) -> Result<Resp, Status> + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        let erased: Handler = Arc::new(move |req| {
            let service = Unary(handler.clone());
            Box::pin(async move {
                let codec = tonic_prost::ProstCodec::<Resp, Req>::default();
                let mut grpc = tonic::server::Grpc::new(codec);
                Ok(grpc.unary(service, req).await)
            })
        });
        self.registry
            .handlers
            .lock()
            .unwrap()
            .insert(path.to_string(), erased);
        self
    }

    /// Every request seen so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.registry.calls.lock().unwrap().clone()
    }

    /// Requests seen for one method path.
    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }

    /// Number of connections dialed.
    pub fn dials(&self) -> usize {
        self.dials.load(Ordering::SeqCst)
    }

    /// A creator wired to this platform with a millisecond backoff.
    pub fn call_properties(&self, credentials: &Credentials) -> CallPropertiesCreator {
        CallPropertiesCreator::with_dialer(credentials, Arc::new(self.clone()))
            .unwrap()
            .with_call_options(fast_call_options())
    }

    /// A client set wired to this platform, with REST calls going to `rest_url`.
    pub fn client_set(&self, rest_url: &str) -> ClientSet {
        let credentials = test_credentials().with_rest_url(rest_url);
        ClientSet::with_call_properties(&credentials, self.call_properties(&credentials)).unwrap()
    }
}

#[async_trait::async_trait]
impl Dialer for MockPlatform {
    async fn dial(&self, target: &str) -> Result<Channel, ClientError> {
        self.dials.fetch_add(1, Ordering::SeqCst);

        let (client, server) = tokio::io::duplex(64 * 1024);
        self.connections
            .send(Ok(server))
            .map_err(|_| ClientError::Rpc(Status::unavailable("mock platform stopped")))?;

        let mut client = Some(client);
        Endpoint::from_static("http://platform.test")
            .connect_with_connector(tower::service_fn(move |_: Uri| {
                let client = client.take();
                async move {
                    client
                        .map(TokioIo::new)
                        .ok_or_else(|| std::io::Error::other("connection already used"))
                }
            }))
            .await
            .map_err(|source| ClientError::Connection {
                target: target.to_string(),
                source,
            })
    }
}

/// The credentials used throughout the tests.
pub fn test_credentials() -> Credentials {
    Credentials::new("example.com:443", "k")
}

/// Default retry policy with a 1ms backoff base.
pub fn fast_call_options() -> CallOptions {
    CallOptions {
        backoff: LinearBackoff {
            base: std::time::Duration::from_millis(1),
        },
        ..CallOptions::default()
    }
}
