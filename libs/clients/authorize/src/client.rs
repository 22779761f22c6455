use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use grpc_client::{
    AutoRefreshingCredentials, CallContext, ChannelConfig, ChannelFactory, CredentialsFetcher,
    GrpcConnection, GrpcResult, ResilientTransport,
};
use rpc::authorize::authorize_service_client::AuthorizeServiceClient;
use rpc::authorize::LogClientStateInput;
use tonic::transport::Channel;

/// Message size limit in both directions
pub const MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

const OPENING_CONNECTION: &str = "opening connection";
const CLOSING_CONNECTION: &str = "closing connection";

/// Client for the Authorize service.
///
/// Cheap to share behind an `Arc`; all methods take `&self`. Calls without a
/// deadline get the request timeout (60s unless overridden).
pub struct AuthorizeClient {
    transport: ResilientTransport<GrpcConnection>,
    request_timeout: Duration,
}

impl AuthorizeClient {
    /// Dial without TLS.
    ///
    /// Unusable connections are still replaced by redialing the same target.
    pub async fn dial(config: ChannelConfig) -> GrpcResult<Self> {
        Self::open(Arc::new(ChannelFactory::new(config))).await
    }

    /// Dial with mutual TLS, using client certificates from `fetcher`.
    ///
    /// The certificate is fetched once here and any failure is returned
    /// immediately. Afterwards every new connection checks its expiry and
    /// refreshes it through `fetcher` when it is close to expiring.
    pub async fn dial_with_credentials(
        config: ChannelConfig,
        fetcher: Arc<dyn CredentialsFetcher>,
        secret_name: impl Into<String>,
    ) -> GrpcResult<Self> {
        let credentials =
            AutoRefreshingCredentials::initialize(fetcher, secret_name, config.host.clone()).await?;
        Self::open(Arc::new(ChannelFactory::with_credentials(config, Arc::new(credentials)))).await
    }

    /// Build a client whose connection is dialed on the first call.
    ///
    /// Nothing is sent until then, including the "opening connection" report.
    pub fn lazy(config: ChannelConfig) -> GrpcResult<Self> {
        let factory = Arc::new(ChannelFactory::new(config));
        let connection = factory.connect_lazy()?;
        Ok(Self::from_connection(connection, &factory).with_reconnect(factory))
    }

    async fn open(factory: Arc<ChannelFactory>) -> GrpcResult<Self> {
        let connection = factory.connect().await?;
        let client = Self::from_connection(connection, &factory).with_reconnect(factory);

        client.log_client_state(OPENING_CONNECTION).await?;
        Ok(client)
    }

    /// Wrap an existing connection; reconnect is not installed.
    pub fn from_connection(connection: GrpcConnection, factory: &ChannelFactory) -> Self {
        let config = factory.config();
        Self {
            transport: ResilientTransport::new(connection).with_retry(config.retry.clone()),
            request_timeout: config.request_timeout,
        }
    }

    /// Replace unusable connections through `factory`.
    pub fn with_reconnect(mut self, factory: Arc<ChannelFactory>) -> Self {
        self.transport = self.transport.with_reconnect(factory);
        self
    }

    /// Timeout applied to calls made without a deadline
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn transport(&self) -> &ResilientTransport<GrpcConnection> {
        &self.transport
    }

    /// Report the client as closing, then shut the connection down.
    ///
    /// The connection is closed even if the report fails; the report error is
    /// returned.
    pub async fn close(&self) -> GrpcResult<()> {
        let reported = self.log_client_state(CLOSING_CONNECTION).await;
        self.transport.close();
        reported
    }

    async fn log_client_state(&self, state: &str) -> GrpcResult<()> {
        let hostname = hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .unwrap_or_default();

        tracing::info!(target: "authorize_client", state, %hostname, "Client state");

        let input = LogClientStateInput {
            state: state.to_string(),
            hostname,
        };
        self.invoke(CallContext::background(), input, |mut client, request| async move {
            client.log_client_state(request).await
        })
        .await
        .map(drop)
    }

    /// Run one unary RPC through the transport.
    ///
    /// The request message is cloned for every attempt. The remaining time
    /// before the deadline is sent along as the gRPC timeout.
    pub(crate) async fn invoke<Req, Resp, F, Fut>(
        &self,
        cx: CallContext,
        message: Req,
        rpc: F,
    ) -> GrpcResult<Resp>
    where
        Req: Clone,
        F: Fn(AuthorizeServiceClient<Channel>, tonic::Request<Req>) -> Fut,
        Fut: Future<Output = Result<tonic::Response<Resp>, tonic::Status>>,
    {
        let cx = cx.or_default_timeout(self.request_timeout);

        self.transport
            .call(cx, |connection| {
                let mut request = tonic::Request::new(message.clone());
                if let Some(remaining) = cx.remaining() {
                    request.set_timeout(remaining);
                }
                rpc(stub(connection.channel()), request)
            })
            .await
            .map(tonic::Response::into_inner)
    }
}

fn stub(channel: Channel) -> AuthorizeServiceClient<Channel> {
    AuthorizeServiceClient::new(channel)
        .max_decoding_message_size(MAX_MESSAGE_SIZE)
        .max_encoding_message_size(MAX_MESSAGE_SIZE)
}
