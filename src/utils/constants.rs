/// Base URL of the hospital management REST API.
/// Configured at compile time via the `API_BASE_URL` env var (see build.rs);
/// defaults to the local development backend.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "hospitalms_token";
