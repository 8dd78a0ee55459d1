//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the token the request helper reads, `messages` owns the
//! banner queue the message row renders. Neither depends on Leptos, so both
//! are exercised directly by unit tests.

pub mod messages;
pub mod session;
