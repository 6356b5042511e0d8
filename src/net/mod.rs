//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` handles the auth lifecycle calls, `journal` and `user` cover
//! the CRUD endpoints, and `types` defines the shared wire schema. All
//! requests carry ambient cookie credentials; the backend identifies the
//! session from them.

#[cfg(feature = "hydrate")]
pub(crate) mod http;
pub mod journal;
pub mod session;
pub mod types;
pub mod user;
