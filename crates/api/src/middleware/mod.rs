//! Authentication middleware and extractors.
//!
//! - [`session::require_session`] -- the gate that rejects non-public requests
//!   without a valid session.
//! - [`auth::AuthUser`] -- the authenticated user, from the gate or the request.
//! - [`auth::MaybeAuthUser`] -- the same, optional, for public reads.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.

pub mod auth;
pub mod rbac;
pub mod session;
