//! # Value Objects

mod interview_status;

pub use interview_status::InterviewStatus;
