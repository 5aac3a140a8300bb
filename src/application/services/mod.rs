//! Application Services
//!
//! Business logic services that coordinate repositories and remote gateways.
//!
//! ## Available Services
//!
//! - **TopicService** / **CategoryService**: catalog reads and topic lifecycle (`desc`)
//! - **InterviewService**: booking queries and status updates (`mock`)
//! - **ProfilesService**: profile lookups against Auth (`site`)
//! - **IndexService**: home page aggregation (`site`)

pub mod catalog_service;
pub mod index_service;
pub mod interview_service;
pub mod profile_service;

pub use catalog_service::{
    CategoryService, CategoryServiceImpl, TopicError, TopicService, TopicServiceImpl,
    MOST_POPULAR_LIMIT,
};
pub use index_service::IndexService;
pub use interview_service::{InterviewError, InterviewService, InterviewServiceImpl};
pub use profile_service::ProfilesService;
