//! Build-time configuration.

/// Backend API root used when no override is baked into the build.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Backend API root. Set `MIRANTE_API_URL` at build time to point the chrome
/// at a deployed backend instead of the development one.
pub fn api_base_url() -> &'static str {
    option_env!("MIRANTE_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}
