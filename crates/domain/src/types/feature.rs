//! Shapes for the feature-item CRUD module

use serde::{Deserialize, Serialize};

use crate::impl_tag_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Inactive,
}

impl_tag_conversions!(ItemStatus {
    Active => "active",
    Inactive => "inactive",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl ListQuery {
    /// Non-empty parameters as `(name, value)` pairs in a fixed order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_skips_unset_and_empty_values() {
        let query = ListQuery { page: Some(2), limit: None, search: Some(String::new()) };
        assert_eq!(query.pairs(), vec![("page", "2".to_string())]);
        assert!(ListQuery::default().pairs().is_empty());
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let request = UpdateItemRequest { status: Some(ItemStatus::Inactive), ..Default::default() };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"status": "inactive"}));
    }
}
