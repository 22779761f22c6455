// @generated
// This file is @generated by prost-build.
/// Resource reference: id, type and the system that owns it.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Origin {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub r#type: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub provider: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Void {}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct LogClientStateInput {
    #[prost(string, tag = "1")]
    pub state: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub hostname: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct IsAuthorizedInput {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub action: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub resource: ::core::option::Option<Origin>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct IsAuthorizedOutput {
    #[prost(bool, tag = "1")]
    pub ok: bool,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct IsAuthorizedWithReasonOutput {
    #[prost(bool, tag = "1")]
    pub ok: bool,
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct IsAuthorizedBulkInput {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub action: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub resources: ::prost::alloc::vec::Vec<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct IsAuthorizedBulkResponse {
    /// Superseded by resource; still the only field set by older servers.
    #[deprecated]
    #[prost(string, tag = "1")]
    pub resource_id: ::prost::alloc::string::String,
    #[prost(bool, tag = "2")]
    pub ok: bool,
    #[prost(message, optional, tag = "3")]
    pub resource: ::core::option::Option<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct IsAuthorizedBulkOutput {
    #[prost(message, repeated, tag = "1")]
    pub responses: ::prost::alloc::vec::Vec<IsAuthorizedBulkResponse>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AddResourceInput {
    #[prost(message, optional, tag = "1")]
    pub resource: ::core::option::Option<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AddResourcesInput {
    #[prost(message, repeated, tag = "1")]
    pub resources: ::prost::alloc::vec::Vec<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetResourceInput {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub origin_type: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetResourceOutput {
    #[prost(message, optional, tag = "1")]
    pub resource: ::core::option::Option<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RemoveResourceInput {
    #[prost(message, optional, tag = "1")]
    pub resource: ::core::option::Option<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RemoveResourcesInput {
    #[prost(message, repeated, tag = "1")]
    pub resources: ::prost::alloc::vec::Vec<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetResourcesByTypeInput {
    #[prost(string, tag = "1")]
    pub resource_type: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetResourcesByTypeOutput {
    #[prost(message, repeated, tag = "1")]
    pub resources: ::prost::alloc::vec::Vec<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ApplyUserActionInput {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub action: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub resource: ::core::option::Option<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RemoveUserActionInput {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub action: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub resource: ::core::option::Option<Origin>,
}
/// Links a resource to the parent it inherits permissions from.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AddResourceRelationInput {
    #[prost(message, optional, tag = "1")]
    pub resource: ::core::option::Option<Origin>,
    #[prost(message, optional, tag = "2")]
    pub parent: ::core::option::Option<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AddResourceRelationsInput {
    #[prost(message, repeated, tag = "1")]
    pub relation: ::prost::alloc::vec::Vec<AddResourceRelationInput>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RemoveResourceRelationInput {
    #[prost(message, optional, tag = "1")]
    pub resource: ::core::option::Option<Origin>,
    #[prost(message, optional, tag = "2")]
    pub parent: ::core::option::Option<Origin>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RemoveResourceRelationsInput {
    #[prost(message, repeated, tag = "1")]
    pub relation: ::prost::alloc::vec::Vec<RemoveResourceRelationInput>,
}
include!("authorize.v1.tonic.rs");
// @@protoc_insertion_point(module)
