//! Utility helpers shared across the console and theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (location, forms, templates)
//! from routing and request logic to keep the latter testable.

pub mod form;
pub mod navigation;
pub mod template;

#[cfg(feature = "csr")]
pub mod dom;
