//! # CheckDev Services Library
//!
//! This crate provides the three backend services of the CheckDev
//! mock-interview platform:
//! - `desc`: catalog of interview categories and topics (PostgreSQL)
//! - `mock`: mock-interview booking with paged queries (PostgreSQL)
//! - `site`: home page aggregation over Auth, catalog, booking and notifications
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities and repository traits
//! - **Application Layer**: Services, remote gateways and DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories, HTTP clients, metrics
//! - **Presentation Layer**: HTTP handlers, routers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! checkdev/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits
//! +-- application/    Services, gateways and DTOs
//! +-- infrastructure/ Database, remote clients, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors, pagination, validation
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
