//! Logical service detection from request URLs

use portalkit_domain::Service;

/// Path fragments checked in priority order.
const SERVICE_PATTERNS: [(&str, Service); 4] = [
    ("/account-svc/", Service::Account),
    ("/payment-svc/", Service::Payment),
    ("/notification-svc/", Service::Notification),
    ("/user-svc/", Service::User),
];

/// Tag `url` with the first service whose path fragment it contains.
pub fn detect_service(url: &str) -> Service {
    SERVICE_PATTERNS
        .iter()
        .find(|(pattern, _)| url.contains(pattern))
        .map_or(Service::Unknown, |(_, service)| *service)
}
