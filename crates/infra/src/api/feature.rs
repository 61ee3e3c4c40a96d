//! Feature-item CRUD module (`/new-feat`)

use portalkit_domain::constants::FEATURE_BASE_PATH;
use portalkit_domain::{
    ApiError, ApiResponse, BulkDeleteRequest, CreateItemRequest, EmptyResponse, FeatureItem,
    ListQuery, PaginatedResponse, RequestConfig, UpdateItemRequest,
};
use url::form_urlencoded;

use super::client::ApiClient;

/// Typed calls against the feature-item resource.
#[derive(Clone)]
pub struct FeatureApi {
    client: ApiClient,
}

impl FeatureApi {
    /// Bind to `/new-feat` under the client's base URL.
    pub fn new(client: &ApiClient) -> Self {
        Self { client: client.scoped(FEATURE_BASE_PATH) }
    }

    /// Resource root, including its base path.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Page through items, optionally filtered by a search term.
    pub async fn list(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<FeatureItem>, ApiError> {
        let pairs = query.pairs();
        let endpoint = if pairs.is_empty() {
            "/".to_string()
        } else {
            let encoded = form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish();
            format!("/?{encoded}")
        };
        self.client.get_paginated(&endpoint, &RequestConfig::new()).await
    }

    /// Single item; the id is percent-encoded into the path.
    pub async fn get_by_id(&self, id: &str) -> Result<ApiResponse<FeatureItem>, ApiError> {
        self.client.get(&item_path(id), &RequestConfig::new()).await
    }

    /// `POST /`
    pub async fn create(
        &self,
        request: &CreateItemRequest,
    ) -> Result<ApiResponse<FeatureItem>, ApiError> {
        self.client.post("/", Some(request), &RequestConfig::new()).await
    }

    /// Partial update. Unset fields are omitted from the body.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateItemRequest,
    ) -> Result<ApiResponse<FeatureItem>, ApiError> {
        self.client.put(&item_path(id), Some(request), &RequestConfig::new()).await
    }

    /// Delete one item. A `204 No Content` reply counts as success.
    pub async fn delete_item(&self, id: &str) -> Result<EmptyResponse, ApiError> {
        self.client.delete(&item_path(id), &RequestConfig::new()).await
    }

    /// Items whose status is active, unpaginated.
    pub async fn active_items(&self) -> Result<ApiResponse<Vec<FeatureItem>>, ApiError> {
        self.client.get("/active", &RequestConfig::new()).await
    }

    /// Delete every id in `ids` with one request.
    pub async fn bulk_delete(&self, ids: &[String]) -> Result<EmptyResponse, ApiError> {
        let body = BulkDeleteRequest { ids: ids.to_vec() };
        self.client.post("/bulk-delete", Some(&body), &RequestConfig::new()).await
    }
}

fn item_path(id: &str) -> String {
    format!("/{}", urlencoding::encode(id))
}
