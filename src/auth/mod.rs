//! Authentication support.
//!
//! Craton uses plain token authentication: every request carries the
//! `X-Auth-User`, `X-Auth-Project` and `X-Auth-Token` headers. The
//! [`Session`] type is the credential provider the transport consumes.
//! Federated identity plugins are out of scope for this crate.

mod session;

pub use session::{Session, AUTH_PROJECT_HEADER, AUTH_TOKEN_HEADER, AUTH_USER_HEADER};
