//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 session token generation and validation.
//! - [`session_cookie`] -- building and reading the session cookie.

pub mod jwt;
pub mod password;
pub mod session_cookie;
