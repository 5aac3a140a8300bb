//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgCategoryRepository** - Catalog categories (`desc` database)
//! - **PgTopicRepository** - Catalog topics and per-category counts (`desc` database)
//! - **PgInterviewRepository** - Booked interviews with offset paging (`mock` database)
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use checkdev::infrastructure::repositories::{PgInterviewRepository, PgTopicRepository};
//!
//! fn setup_repositories(desc: PgPool, mock: PgPool) {
//!     let topics = PgTopicRepository::new(desc);
//!     let interviews = PgInterviewRepository::new(mock);
//! }
//! ```

pub mod category_repository;
pub mod interview_repository;
pub mod topic_repository;

pub use category_repository::PgCategoryRepository;
pub use interview_repository::PgInterviewRepository;
pub use topic_repository::PgTopicRepository;
