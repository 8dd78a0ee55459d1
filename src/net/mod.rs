//! Networking modules for the admin JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the request/response values, `transport` performs the
//! actual fetch, and `api` layers the session token, 401 handling and
//! failure banners on top.

pub mod api;
pub mod transport;
pub mod types;
