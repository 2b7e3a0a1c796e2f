use thiserror::Error;

/// Every gateway failure becomes one of these, and the `Display` output is
/// the exact text shown to the user.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` comes from the response body when the
    /// backend supplied one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (offline, DNS, CORS, ...).
    #[error("An unexpected error occurred")]
    Network(String),

    /// A 2xx response whose envelope was missing `success` or `data`.
    #[error("Invalid response from server")]
    InvalidResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message_verbatim() {
        let err = ApiError::Api {
            status: 409,
            message: "Email already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn network_error_hides_transport_detail() {
        let err = ApiError::Network("fetch failed".to_string());
        assert_eq!(err.to_string(), "An unexpected error occurred");
    }

    #[test]
    fn invalid_envelope_has_a_fixed_message() {
        assert_eq!(
            ApiError::InvalidResponse.to_string(),
            "Invalid response from server"
        );
    }
}
