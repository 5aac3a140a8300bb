//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (PostgreSQL)
//! - HTTP clients for the sibling services the site aggregates
//! - Prometheus metrics

pub mod clients;
pub mod database;
pub mod metrics;
pub mod repositories;
