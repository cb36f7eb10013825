//! The session cookie that carries the JWT between the admin UI and the API.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

const DEFAULT_COOKIE_NAME: &str = "ngocms_session";

/// Session cookie attributes.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    /// Adds the `Secure` attribute; enable whenever the site is served over HTTPS.
    pub secure: bool,
}

impl CookieConfig {
    /// | Env Var         | Default          |
    /// |-----------------|------------------|
    /// | `COOKIE_NAME`   | `ngocms_session` |
    /// | `COOKIE_SECURE` | `false`          |
    pub fn from_env() -> Self {
        let name = std::env::var("COOKIE_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());
        let secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");
        Self { name, secure }
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            secure: false,
        }
    }
}

/// Cookie holding `token`, living as long as the token itself.
pub fn session_cookie(token: &str, config: &CookieConfig, max_age_mins: i64) -> Cookie<'static> {
    Cookie::build((config.name.clone(), token.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(config.secure)
        .max_age(Duration::minutes(max_age_mins))
        .build()
}

/// Cookie that makes the browser discard the session.
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((config.name.clone(), String::new()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(config.secure)
        .build();
    cookie.make_removal();
    cookie
}

/// Find the session token among the request's `Cookie` headers.
pub fn read_session_token(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}
