//! Data Transfer Objects
//!
//! DTOs for API request/response serialization and for payloads
//! exchanged between the services.

pub mod index;
pub mod profile;
pub mod request;
pub mod response;

pub use index::{Breadcrumb, IndexPage};
pub use profile::{ProfileDto, RoleDto, UserInfoDto, UserSubscriptionDto};
pub use response::{CategoryDto, InterviewDto, StatusUpdateResponse, TopicDto};
