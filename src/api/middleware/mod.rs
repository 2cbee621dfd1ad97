//! HTTP middleware for request processing.
//!
//! Provides authentication, contact loading, and observability middleware.

pub mod auth;
pub mod contact_loader;
pub mod tracing;
