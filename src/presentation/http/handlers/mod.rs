//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints, grouped by service.

pub mod category;
pub mod health;
pub mod index;
pub mod interview;
pub mod profile;
pub mod topic;
