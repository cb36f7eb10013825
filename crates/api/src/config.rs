use std::fmt::Display;
use std::str::FromStr;

use ngocms_core::media::DEFAULT_MAX_UPLOAD_BYTES;

use crate::auth::jwt::JwtConfig;
use crate::auth::session_cookie::CookieConfig;

/// Credentials for the first administrator, created on startup when the
/// `users` table is empty.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl BootstrapAdmin {
    /// Read `BOOTSTRAP_ADMIN_USERNAME`, `_EMAIL` and `_PASSWORD`.
    ///
    /// Returns `None` unless all three are set and non-empty.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            username: env_text("BOOTSTRAP_ADMIN_USERNAME")?,
            email: env_text("BOOTSTRAP_ADMIN_EMAIL")?,
            password: env_text("BOOTSTRAP_ADMIN_PASSWORD")?,
        })
    }
}

/// Everything the API process needs besides the database URL, storage
/// and SMTP settings, which their own crates read.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API with credentials.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
    pub cookie: CookieConfig,
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: usize,
    /// Inbox that receives enquiry and application notifications.
    pub notify_email: Option<String>,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl ServerConfig {
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`              |
    /// | `NOTIFY_EMAIL`         | unset                   |
    ///
    /// JWT and cookie settings are documented on [`JwtConfig::from_env`] and
    /// [`CookieConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics on a value that does not parse, so a bad deployment fails at
    /// startup instead of on the first request.
    pub fn from_env() -> Self {
        let cors_origins = env_text("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_text("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: env_parse("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
            cookie: CookieConfig::from_env(),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            notify_email: env_text("NOTIFY_EMAIL"),
            bootstrap_admin: BootstrapAdmin::from_env(),
        }
    }
}

/// A trimmed, non-empty environment variable.
fn env_text(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_parse<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env_text(name) {
        Some(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} has invalid value '{raw}': {e}")),
        None => default,
    }
}
