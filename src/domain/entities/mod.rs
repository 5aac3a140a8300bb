//! # Domain Entities
//!
//! Core domain entities. All entities map directly to their database tables.
//!
//! - **Category**: catalog grouping of interview topics (`desc` database)
//! - **Topic**: an interview subject belonging to one category (`desc` database)
//! - **Interview**: a booked mock interview (`mock` database)
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod category;
mod interview;
mod topic;

pub use category::{Category, CategoryRepository};
pub use interview::{Interview, InterviewRepository, NewInterview};
pub use topic::{NewTopic, Topic, TopicRepository};

#[cfg(test)]
pub use category::MockCategoryRepository;
#[cfg(test)]
pub use interview::MockInterviewRepository;
#[cfg(test)]
pub use topic::MockTopicRepository;
