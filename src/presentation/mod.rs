//! Presentation Layer
//!
//! HTTP routes, handlers and middleware for the three services.

pub mod http;
pub mod middleware;
