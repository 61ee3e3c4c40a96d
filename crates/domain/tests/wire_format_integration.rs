//! Integration tests for the wire formats shared with the backend.

use portalkit_domain::{
    ApiError, ApiResponse, CredentialRecord, EmptyResponse, Failure, FeatureItem, ItemStatus,
    LoginResponse, PaginatedResponse, Service, UserRole,
};
use serde_json::json;

/// A login envelope as the account service returns it.
#[test]
fn test_login_envelope_deserializes() {
    let body = json!({
        "data": {
            "token": "access-1",
            "refreshToken": "refresh-1",
            "expiresIn": 3600,
            "user": {
                "id": "u-7",
                "email": "lan@example.com",
                "name": "Lan",
                "role": "admin",
                "isActive": true,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-02T00:00:00Z"
            }
        },
        "success": true,
        "status": 200
    });

    let envelope: ApiResponse<LoginResponse> = serde_json::from_value(body).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.message, None);
    assert_eq!(envelope.data.user.role, UserRole::Admin);

    let record = CredentialRecord::from_expires_in(
        envelope.data.token,
        envelope.data.refresh_token,
        envelope.data.expires_in,
        0,
    );
    assert_eq!(record.expires_at, 3_600_000);
}

#[test]
fn test_empty_envelope_tolerates_missing_data() {
    let envelope: EmptyResponse =
        serde_json::from_value(json!({ "success": true, "status": 204 })).unwrap();
    assert_eq!(envelope.data, None);
}

#[test]
fn test_paginated_feature_list() {
    let body = json!({
        "data": [{
            "id": "f-1",
            "name": "Dark mode",
            "description": "Theme toggle",
            "status": "inactive",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }],
        "success": true,
        "status": 200,
        "pagination": { "page": 2, "limit": 10, "total": 11, "totalPages": 2 }
    });

    let page: PaginatedResponse<FeatureItem> = serde_json::from_value(body).unwrap();
    assert_eq!(page.data[0].status, ItemStatus::Inactive);
    assert_eq!(page.pagination.total_pages, 2);
}

/// The serialized error never leaks the internal failure tag.
#[test]
fn test_api_error_serialization_shape() {
    let err = ApiError::from_failure(Failure::Http {
        status: 409,
        code: Some("CONFLICT".into()),
        message: None,
        service: Service::Payment,
    })
    .with_url("/payment-svc/v1/charges")
    .with_request_id("req_abc_123456789");

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["message"], "Request failed with status code 409");
    assert_eq!(value["service"], "payment");
    assert_eq!(value["requestId"], "req_abc_123456789");
    assert!(value.get("failure").is_none());
    assert!(value.get("timestamp").is_none());
    assert!(!err.is_critical());
}

#[test]
fn test_credential_record_debug_redacts_tokens() {
    let record = CredentialRecord::new("secret-access", "secret-refresh", 1);
    let debug = format!("{record:?}");
    assert!(!debug.contains("secret"));
}
