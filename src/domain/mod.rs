//! # Domain Layer
//!
//! Core entities of the CheckDev services and the repository contracts
//! the infrastructure layer implements.
//!
//! ## Structure
//!
//! - **entities**: Category, Topic and Interview with their repository traits
//! - **value_objects**: Interview status codes
//!
//! Nothing in here depends on the HTTP or database crates beyond the error type.

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
