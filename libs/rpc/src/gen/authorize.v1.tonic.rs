// @generated
/// Generated client implementations.
pub mod authorize_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct AuthorizeServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl AuthorizeServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> AuthorizeServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> AuthorizeServiceClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::Body>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::Body>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::Body>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            AuthorizeServiceClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        pub async fn deep_ping(
            &mut self,
            request: impl tonic::IntoRequest<super::Void>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/DeepPing",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "DeepPing"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn log_client_state(
            &mut self,
            request: impl tonic::IntoRequest<super::LogClientStateInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/LogClientState",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "LogClientState"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn is_authorized(
            &mut self,
            request: impl tonic::IntoRequest<super::IsAuthorizedInput>,
        ) -> std::result::Result<
            tonic::Response<super::IsAuthorizedOutput>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/IsAuthorized",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "IsAuthorized"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn is_authorized_with_reason(
            &mut self,
            request: impl tonic::IntoRequest<super::IsAuthorizedInput>,
        ) -> std::result::Result<
            tonic::Response<super::IsAuthorizedWithReasonOutput>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/IsAuthorizedWithReason",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "IsAuthorizedWithReason"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn is_authorized_bulk(
            &mut self,
            request: impl tonic::IntoRequest<super::IsAuthorizedBulkInput>,
        ) -> std::result::Result<
            tonic::Response<super::IsAuthorizedBulkOutput>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/IsAuthorizedBulk",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "IsAuthorizedBulk"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn add_resource(
            &mut self,
            request: impl tonic::IntoRequest<super::AddResourceInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/AddResource",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "AddResource"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn add_resources(
            &mut self,
            request: impl tonic::IntoRequest<super::AddResourcesInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/AddResources",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "AddResources"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_resource(
            &mut self,
            request: impl tonic::IntoRequest<super::GetResourceInput>,
        ) -> std::result::Result<
            tonic::Response<super::GetResourceOutput>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/GetResource",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "GetResource"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn remove_resource(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveResourceInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/RemoveResource",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "RemoveResource"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn remove_resources(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveResourcesInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/RemoveResources",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "RemoveResources"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_resources_by_type(
            &mut self,
            request: impl tonic::IntoRequest<super::GetResourcesByTypeInput>,
        ) -> std::result::Result<
            tonic::Response<super::GetResourcesByTypeOutput>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/GetResourcesByType",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "GetResourcesByType"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn apply_user_action(
            &mut self,
            request: impl tonic::IntoRequest<super::ApplyUserActionInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/ApplyUserAction",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "ApplyUserAction"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn remove_user_action(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveUserActionInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/RemoveUserAction",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "RemoveUserAction"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn add_resource_relation(
            &mut self,
            request: impl tonic::IntoRequest<super::AddResourceRelationInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/AddResourceRelation",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "AddResourceRelation"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn add_resource_relations(
            &mut self,
            request: impl tonic::IntoRequest<super::AddResourceRelationsInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/AddResourceRelations",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "AddResourceRelations"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn remove_resource_relation(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveResourceRelationInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/RemoveResourceRelation",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "RemoveResourceRelation"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn remove_resource_relations(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveResourceRelationsInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/authorize.v1.AuthorizeService/RemoveResourceRelations",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("authorize.v1.AuthorizeService", "RemoveResourceRelations"));
            self.inner.unary(req, path, codec).await
        }
    }
}
pub mod authorize_service_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with AuthorizeServiceServer.
    #[async_trait]
    pub trait AuthorizeService: std::marker::Send + std::marker::Sync + 'static {
        async fn deep_ping(
            &self,
            request: tonic::Request<super::Void>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn log_client_state(
            &self,
            request: tonic::Request<super::LogClientStateInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn is_authorized(
            &self,
            request: tonic::Request<super::IsAuthorizedInput>,
        ) -> std::result::Result<
            tonic::Response<super::IsAuthorizedOutput>,
            tonic::Status,
        >;
        async fn is_authorized_with_reason(
            &self,
            request: tonic::Request<super::IsAuthorizedInput>,
        ) -> std::result::Result<
            tonic::Response<super::IsAuthorizedWithReasonOutput>,
            tonic::Status,
        >;
        async fn is_authorized_bulk(
            &self,
            request: tonic::Request<super::IsAuthorizedBulkInput>,
        ) -> std::result::Result<
            tonic::Response<super::IsAuthorizedBulkOutput>,
            tonic::Status,
        >;
        async fn add_resource(
            &self,
            request: tonic::Request<super::AddResourceInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn add_resources(
            &self,
            request: tonic::Request<super::AddResourcesInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn get_resource(
            &self,
            request: tonic::Request<super::GetResourceInput>,
        ) -> std::result::Result<
            tonic::Response<super::GetResourceOutput>,
            tonic::Status,
        >;
        async fn remove_resource(
            &self,
            request: tonic::Request<super::RemoveResourceInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn remove_resources(
            &self,
            request: tonic::Request<super::RemoveResourcesInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn get_resources_by_type(
            &self,
            request: tonic::Request<super::GetResourcesByTypeInput>,
        ) -> std::result::Result<
            tonic::Response<super::GetResourcesByTypeOutput>,
            tonic::Status,
        >;
        async fn apply_user_action(
            &self,
            request: tonic::Request<super::ApplyUserActionInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn remove_user_action(
            &self,
            request: tonic::Request<super::RemoveUserActionInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn add_resource_relation(
            &self,
            request: tonic::Request<super::AddResourceRelationInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn add_resource_relations(
            &self,
            request: tonic::Request<super::AddResourceRelationsInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn remove_resource_relation(
            &self,
            request: tonic::Request<super::RemoveResourceRelationInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
        async fn remove_resource_relations(
            &self,
            request: tonic::Request<super::RemoveResourceRelationsInput>,
        ) -> std::result::Result<tonic::Response<super::Void>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct AuthorizeServiceServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> AuthorizeServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for AuthorizeServiceServer<T>
    where
        T: AuthorizeService,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/authorize.v1.AuthorizeService/DeepPing" => {
                    #[allow(non_camel_case_types)]
                    struct DeepPingSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::Void>
                    for DeepPingSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::Void>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::deep_ping(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = DeepPingSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/LogClientState" => {
                    #[allow(non_camel_case_types)]
                    struct LogClientStateSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::LogClientStateInput>
                    for LogClientStateSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::LogClientStateInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::log_client_state(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = LogClientStateSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/IsAuthorized" => {
                    #[allow(non_camel_case_types)]
                    struct IsAuthorizedSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::IsAuthorizedInput>
                    for IsAuthorizedSvc<T> {
                        type Response = super::IsAuthorizedOutput;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::IsAuthorizedInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::is_authorized(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = IsAuthorizedSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/IsAuthorizedWithReason" => {
                    #[allow(non_camel_case_types)]
                    struct IsAuthorizedWithReasonSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::IsAuthorizedInput>
                    for IsAuthorizedWithReasonSvc<T> {
                        type Response = super::IsAuthorizedWithReasonOutput;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::IsAuthorizedInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::is_authorized_with_reason(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = IsAuthorizedWithReasonSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/IsAuthorizedBulk" => {
                    #[allow(non_camel_case_types)]
                    struct IsAuthorizedBulkSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::IsAuthorizedBulkInput>
                    for IsAuthorizedBulkSvc<T> {
                        type Response = super::IsAuthorizedBulkOutput;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::IsAuthorizedBulkInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::is_authorized_bulk(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = IsAuthorizedBulkSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/AddResource" => {
                    #[allow(non_camel_case_types)]
                    struct AddResourceSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::AddResourceInput>
                    for AddResourceSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::AddResourceInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::add_resource(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = AddResourceSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/AddResources" => {
                    #[allow(non_camel_case_types)]
                    struct AddResourcesSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::AddResourcesInput>
                    for AddResourcesSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::AddResourcesInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::add_resources(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = AddResourcesSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/GetResource" => {
                    #[allow(non_camel_case_types)]
                    struct GetResourceSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::GetResourceInput>
                    for GetResourceSvc<T> {
                        type Response = super::GetResourceOutput;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetResourceInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::get_resource(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetResourceSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/RemoveResource" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveResourceSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::RemoveResourceInput>
                    for RemoveResourceSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RemoveResourceInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::remove_resource(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RemoveResourceSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/RemoveResources" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveResourcesSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::RemoveResourcesInput>
                    for RemoveResourcesSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RemoveResourcesInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::remove_resources(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RemoveResourcesSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/GetResourcesByType" => {
                    #[allow(non_camel_case_types)]
                    struct GetResourcesByTypeSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::GetResourcesByTypeInput>
                    for GetResourcesByTypeSvc<T> {
                        type Response = super::GetResourcesByTypeOutput;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetResourcesByTypeInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::get_resources_by_type(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetResourcesByTypeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/ApplyUserAction" => {
                    #[allow(non_camel_case_types)]
                    struct ApplyUserActionSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::ApplyUserActionInput>
                    for ApplyUserActionSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ApplyUserActionInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::apply_user_action(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ApplyUserActionSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/RemoveUserAction" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveUserActionSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::RemoveUserActionInput>
                    for RemoveUserActionSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RemoveUserActionInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::remove_user_action(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RemoveUserActionSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/AddResourceRelation" => {
                    #[allow(non_camel_case_types)]
                    struct AddResourceRelationSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::AddResourceRelationInput>
                    for AddResourceRelationSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::AddResourceRelationInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::add_resource_relation(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = AddResourceRelationSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/AddResourceRelations" => {
                    #[allow(non_camel_case_types)]
                    struct AddResourceRelationsSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::AddResourceRelationsInput>
                    for AddResourceRelationsSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::AddResourceRelationsInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::add_resource_relations(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = AddResourceRelationsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/RemoveResourceRelation" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveResourceRelationSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::RemoveResourceRelationInput>
                    for RemoveResourceRelationSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RemoveResourceRelationInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::remove_resource_relation(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RemoveResourceRelationSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/authorize.v1.AuthorizeService/RemoveResourceRelations" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveResourceRelationsSvc<T: AuthorizeService>(pub Arc<T>);
                    impl<
                        T: AuthorizeService,
                    > tonic::server::UnaryService<super::RemoveResourceRelationsInput>
                    for RemoveResourceRelationsSvc<T> {
                        type Response = super::Void;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RemoveResourceRelationsInput>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as AuthorizeService>::remove_resource_relations(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RemoveResourceRelationsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        let mut response = http::Response::new(
                            tonic::body::Body::default(),
                        );
                        let headers = response.headers_mut();
                        headers
                            .insert(
                                tonic::Status::GRPC_STATUS,
                                (tonic::Code::Unimplemented as i32).into(),
                            );
                        headers
                            .insert(
                                http::header::CONTENT_TYPE,
                                tonic::metadata::GRPC_CONTENT_TYPE,
                            );
                        Ok(response)
                    })
                }
            }
        }
    }
    impl<T> Clone for AuthorizeServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    /// Generated gRPC service name
    pub const SERVICE_NAME: &str = "authorize.v1.AuthorizeService";
    impl<T> tonic::server::NamedService for AuthorizeServiceServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
