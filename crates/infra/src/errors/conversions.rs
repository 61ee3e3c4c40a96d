//! Conversions from external infrastructure errors into domain errors.

use portalkit_domain::{Failure, PortalError};
use reqwest::Error as HttpError;

/// Message used for failures where no response was received.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PortalError);

impl From<InfraError> for PortalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PortalError> for InfraError {
    fn from(value: PortalError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PortalError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        if value.is_builder() {
            return InfraError(PortalError::Config(format!("invalid HTTP client setup: {value}")));
        }
        InfraError(PortalError::Network(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PortalError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(PortalError::Storage(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → Failure */
/* -------------------------------------------------------------------------- */

/// Tag a transport error that produced no usable response.
///
/// Timeouts are normally folded into the deadline wrapper before reaching
/// here; the check stays so direct callers get the same tag.
pub fn transport_failure(err: &HttpError) -> Failure {
    if err.is_timeout() {
        return Failure::timeout(portalkit_common::time::TIMEOUT_MESSAGE);
    }
    if err.is_decode() || err.is_body() {
        return Failure::decode(format!("Failed to read response: {err}"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return Failure::network(NETWORK_ERROR_MESSAGE);
    }

    Failure::network(format!("{NETWORK_ERROR_MESSAGE}: {err}"))
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::Client;

    use super::*;

    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}/")
    }

    #[tokio::test]
    async fn connection_refused_maps_to_network_failure() {
        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(closed_port_url()).send().await.unwrap_err();

        assert_eq!(transport_failure(&error), Failure::network(NETWORK_ERROR_MESSAGE));

        let mapped: PortalError = InfraError::from(error).into();
        assert!(matches!(mapped, PortalError::Network(_)));
    }

    #[test]
    fn io_errors_map_to_storage() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let mapped: PortalError = InfraError::from(err).into();
        assert_eq!(mapped, PortalError::Storage("read-only".into()));
    }
}
