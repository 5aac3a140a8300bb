//! Application Layer
//!
//! Contains business logic services, data transfer objects (DTOs) and the
//! gateway traits the site uses to reach its sibling services.

pub mod dto;
pub mod gateways;
pub mod services;
