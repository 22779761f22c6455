use grpc_client::{CallContext, GrpcError, GrpcResult};
use rpc::authorize::{
    AddResourceInput, AddResourceRelationInput, AddResourceRelationsInput, AddResourcesInput,
    ApplyUserActionInput, GetResourceInput, GetResourcesByTypeInput, IsAuthorizedBulkInput,
    IsAuthorizedBulkResponse, IsAuthorizedInput, Origin, RemoveResourceInput,
    RemoveResourceRelationInput, RemoveResourceRelationsInput, RemoveResourcesInput,
    RemoveUserActionInput, Void,
};

use crate::client::AuthorizeClient;

/// Maximum number of items in one bulk request
pub const REQUEST_LENGTH_LIMIT: usize = 1000;

/// One entry of a bulk authorization answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkAuthorization {
    pub resource: Origin,
    pub ok: bool,
}

impl From<IsAuthorizedBulkResponse> for BulkAuthorization {
    fn from(response: IsAuthorizedBulkResponse) -> Self {
        // Older servers only fill in the resource id
        #[allow(deprecated)]
        let resource = response.resource.unwrap_or_else(|| Origin {
            id: response.resource_id,
            r#type: String::new(),
            provider: String::new(),
        });

        Self {
            resource,
            ok: response.ok,
        }
    }
}

/// A resource and the parent it inherits permissions from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRelation {
    pub resource: Origin,
    pub parent: Origin,
}

impl From<ResourceRelation> for AddResourceRelationInput {
    fn from(relation: ResourceRelation) -> Self {
        Self {
            resource: Some(relation.resource),
            parent: Some(relation.parent),
        }
    }
}

impl From<ResourceRelation> for RemoveResourceRelationInput {
    fn from(relation: ResourceRelation) -> Self {
        Self {
            resource: Some(relation.resource),
            parent: Some(relation.parent),
        }
    }
}

fn check_request_length(actual: usize) -> GrpcResult<()> {
    if actual > REQUEST_LENGTH_LIMIT {
        return Err(GrpcError::RequestLengthLimit {
            max: REQUEST_LENGTH_LIMIT,
            actual,
        });
    }
    Ok(())
}

impl AuthorizeClient {
    /// Check the service and its dependencies end to end.
    pub async fn deep_ping(&self, cx: CallContext) -> GrpcResult<()> {
        self.invoke(cx, Void {}, |mut client, request| async move {
            client.deep_ping(request).await
        })
        .await
        .map(drop)
    }

    pub async fn is_authorized(
        &self,
        cx: CallContext,
        user_id: &str,
        action: &str,
        resource: Option<Origin>,
    ) -> GrpcResult<bool> {
        let input = IsAuthorizedInput {
            user_id: user_id.to_string(),
            action: action.to_string(),
            resource,
        };
        let output = self
            .invoke(cx, input, |mut client, request| async move {
                client.is_authorized(request).await
            })
            .await?;
        Ok(output.ok)
    }

    /// Like [`is_authorized`](Self::is_authorized), plus the server's
    /// explanation of the decision.
    pub async fn is_authorized_with_reason(
        &self,
        cx: CallContext,
        user_id: &str,
        action: &str,
        resource: Option<Origin>,
    ) -> GrpcResult<(bool, String)> {
        let input = IsAuthorizedInput {
            user_id: user_id.to_string(),
            action: action.to_string(),
            resource,
        };
        let output = self
            .invoke(cx, input, |mut client, request| async move {
                client.is_authorized_with_reason(request).await
            })
            .await?;
        Ok((output.ok, output.reason))
    }

    /// Authorize one action on many resources.
    ///
    /// More than [`REQUEST_LENGTH_LIMIT`] resources is rejected without
    /// contacting the server.
    pub async fn is_authorized_bulk(
        &self,
        cx: CallContext,
        user_id: &str,
        action: &str,
        resources: Vec<Origin>,
    ) -> GrpcResult<Vec<BulkAuthorization>> {
        check_request_length(resources.len())?;

        let input = IsAuthorizedBulkInput {
            user_id: user_id.to_string(),
            action: action.to_string(),
            resources,
        };
        let output = self
            .invoke(cx, input, |mut client, request| async move {
                client.is_authorized_bulk(request).await
            })
            .await?;
        Ok(output.responses.into_iter().map(BulkAuthorization::from).collect())
    }

    pub async fn add_resource(&self, cx: CallContext, resource: Origin) -> GrpcResult<()> {
        let input = AddResourceInput {
            resource: Some(resource),
        };
        self.invoke(cx, input, |mut client, request| async move {
            client.add_resource(request).await
        })
        .await
        .map(drop)
    }

    /// Add many resources; at most [`REQUEST_LENGTH_LIMIT`] per call.
    pub async fn add_resources(&self, cx: CallContext, resources: Vec<Origin>) -> GrpcResult<()> {
        check_request_length(resources.len())?;

        self.invoke(cx, AddResourcesInput { resources }, |mut client, request| async move {
            client.add_resources(request).await
        })
        .await
        .map(drop)
    }

    /// `None` when the server knows the id but returns no resource.
    pub async fn get_resource(
        &self,
        cx: CallContext,
        id: &str,
        origin_type: &str,
    ) -> GrpcResult<Option<Origin>> {
        let input = GetResourceInput {
            id: id.to_string(),
            origin_type: origin_type.to_string(),
        };
        let output = self
            .invoke(cx, input, |mut client, request| async move {
                client.get_resource(request).await
            })
            .await?;
        Ok(output.resource)
    }

    pub async fn remove_resource(&self, cx: CallContext, resource: Origin) -> GrpcResult<()> {
        let input = RemoveResourceInput {
            resource: Some(resource),
        };
        self.invoke(cx, input, |mut client, request| async move {
            client.remove_resource(request).await
        })
        .await
        .map(drop)
    }

    /// Remove many resources; at most [`REQUEST_LENGTH_LIMIT`] per call.
    pub async fn remove_resources(&self, cx: CallContext, resources: Vec<Origin>) -> GrpcResult<()> {
        check_request_length(resources.len())?;

        self.invoke(cx, RemoveResourcesInput { resources }, |mut client, request| async move {
            client.remove_resources(request).await
        })
        .await
        .map(drop)
    }

    pub async fn add_resource_relation(&self, cx: CallContext, relation: ResourceRelation) -> GrpcResult<()> {
        let input = AddResourceRelationInput::from(relation);
        self.invoke(cx, input, |mut client, request| async move {
            client.add_resource_relation(request).await
        })
        .await
        .map(drop)
    }

    /// Add many relations; at most [`REQUEST_LENGTH_LIMIT`] per call.
    pub async fn add_resource_relations(
        &self,
        cx: CallContext,
        relations: Vec<ResourceRelation>,
    ) -> GrpcResult<()> {
        check_request_length(relations.len())?;

        let input = AddResourceRelationsInput {
            relation: relations.into_iter().map(Into::into).collect(),
        };
        self.invoke(cx, input, |mut client, request| async move {
            client.add_resource_relations(request).await
        })
        .await
        .map(drop)
    }

    pub async fn remove_resource_relation(&self, cx: CallContext, relation: ResourceRelation) -> GrpcResult<()> {
        let input = RemoveResourceRelationInput::from(relation);
        self.invoke(cx, input, |mut client, request| async move {
            client.remove_resource_relation(request).await
        })
        .await
        .map(drop)
    }

    /// Remove many relations; at most [`REQUEST_LENGTH_LIMIT`] per call.
    pub async fn remove_resource_relations(
        &self,
        cx: CallContext,
        relations: Vec<ResourceRelation>,
    ) -> GrpcResult<()> {
        check_request_length(relations.len())?;

        let input = RemoveResourceRelationsInput {
            relation: relations.into_iter().map(Into::into).collect(),
        };
        self.invoke(cx, input, |mut client, request| async move {
            client.remove_resource_relations(request).await
        })
        .await
        .map(drop)
    }

    pub async fn get_resources_by_type(
        &self,
        cx: CallContext,
        resource_type: &str,
    ) -> GrpcResult<Vec<Origin>> {
        let input = GetResourcesByTypeInput {
            resource_type: resource_type.to_string(),
        };
        let output = self
            .invoke(cx, input, |mut client, request| async move {
                client.get_resources_by_type(request).await
            })
            .await?;
        Ok(output.resources)
    }

    pub async fn apply_user_action(
        &self,
        cx: CallContext,
        user_id: &str,
        action: &str,
        resource: Option<Origin>,
    ) -> GrpcResult<()> {
        let input = ApplyUserActionInput {
            user_id: user_id.to_string(),
            action: action.to_string(),
            resource,
        };
        self.invoke(cx, input, |mut client, request| async move {
            client.apply_user_action(request).await
        })
        .await
        .map(drop)
    }

    pub async fn remove_user_action(
        &self,
        cx: CallContext,
        user_id: &str,
        action: &str,
        resource: Option<Origin>,
    ) -> GrpcResult<()> {
        let input = RemoveUserActionInput {
            user_id: user_id.to_string(),
            action: action.to_string(),
            resource,
        };
        self.invoke(cx, input, |mut client, request| async move {
            client.remove_user_action(request).await
        })
        .await
        .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grpc_client::{ChannelConfig, Connection, ConnectionState};
    use std::time::Duration;

    fn origins(count: usize) -> Vec<Origin> {
        (0..count)
            .map(|i| Origin {
                id: format!("resource-{i}"),
                r#type: "site".to_string(),
                provider: String::new(),
            })
            .collect()
    }

    fn relations(count: usize) -> Vec<ResourceRelation> {
        origins(count)
            .into_iter()
            .map(|resource| ResourceRelation {
                resource,
                parent: Origin {
                    id: "org-1".to_string(),
                    r#type: "organization".to_string(),
                    provider: String::new(),
                },
            })
            .collect()
    }

    fn unreachable_client() -> AuthorizeClient {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        AuthorizeClient::lazy(ChannelConfig::new("127.0.0.1", port)).unwrap()
    }

    #[test]
    fn test_request_length_boundary() {
        assert!(check_request_length(0).is_ok());
        assert!(check_request_length(REQUEST_LENGTH_LIMIT).is_ok());

        let err = check_request_length(REQUEST_LENGTH_LIMIT + 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "request length limit exceeded. max: 1000 actual: 1001"
        );
    }

    #[tokio::test]
    async fn test_bulk_operations_reject_oversized_requests_locally() {
        let client = unreachable_client();
        let cx = CallContext::background();

        let err = client
            .is_authorized_bulk(cx, "user", "read", origins(1001))
            .await
            .unwrap_err();
        assert!(matches!(err, GrpcError::RequestLengthLimit { max: 1000, actual: 1001 }));

        let err = client.add_resources(cx, origins(1001)).await.unwrap_err();
        assert!(err.is_local());

        let err = client.remove_resources(cx, origins(5000)).await.unwrap_err();
        assert!(matches!(err, GrpcError::RequestLengthLimit { actual: 5000, .. }));

        let err = client.add_resource_relations(cx, relations(1001)).await.unwrap_err();
        assert!(matches!(err, GrpcError::RequestLengthLimit { max: 1000, actual: 1001 }));

        let err = client.remove_resource_relations(cx, relations(1001)).await.unwrap_err();
        assert!(matches!(err, GrpcError::RequestLengthLimit { max: 1000, actual: 1001 }));

        // Nothing was dialed
        assert_eq!(client.transport().current().state(), ConnectionState::Idle);
    }

    #[tokio::test]
    async fn test_bulk_at_limit_reaches_the_network() {
        let client = unreachable_client();

        let err = client
            .is_authorized_bulk(CallContext::background(), "user", "read", origins(1000))
            .await
            .unwrap_err();

        assert!(!matches!(err, GrpcError::RequestLengthLimit { .. }));

        let err = client
            .add_resource_relations(CallContext::with_timeout(Duration::from_secs(5)), relations(1000))
            .await
            .unwrap_err();
        assert!(!matches!(err, GrpcError::RequestLengthLimit { .. }));
    }

    #[test]
    fn test_relation_converts_to_both_inputs() {
        let relation = relations(1).remove(0);

        let add = AddResourceRelationInput::from(relation.clone());
        assert_eq!(add.resource.as_ref(), Some(&relation.resource));
        assert_eq!(add.parent.as_ref(), Some(&relation.parent));

        let remove = RemoveResourceRelationInput::from(relation.clone());
        assert_eq!(remove.parent, Some(relation.parent));
    }

    #[test]
    #[allow(deprecated)]
    fn test_bulk_response_without_resource_falls_back_to_legacy_id() {
        let legacy = IsAuthorizedBulkResponse {
            resource_id: "site-7".to_string(),
            ok: true,
            resource: None,
        };

        assert_eq!(
            BulkAuthorization::from(legacy),
            BulkAuthorization {
                resource: Origin {
                    id: "site-7".to_string(),
                    r#type: String::new(),
                    provider: String::new(),
                },
                ok: true,
            }
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_bulk_response_prefers_resource() {
        let resource = origins(1).remove(0);
        let response = IsAuthorizedBulkResponse {
            resource_id: "ignored".to_string(),
            ok: false,
            resource: Some(resource.clone()),
        };

        let entry = BulkAuthorization::from(response);
        assert_eq!(entry.resource, resource);
        assert!(!entry.ok);
    }
}
