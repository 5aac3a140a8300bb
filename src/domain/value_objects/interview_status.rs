//! Interview status codes.
//!
//! Status is persisted as a bare integer. Known codes map onto
//! [`InterviewStatus`]; anything else is kept verbatim by the repository.

/// Lifecycle status of a booked mock interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterviewStatus {
    /// Submitted and waiting for a partner
    New,
    /// A partner accepted the interview
    InProgress,
    /// The interview took place
    Completed,
    /// Withdrawn or declined
    Canceled,
}

impl InterviewStatus {
    /// Integer code stored in the `status` column.
    pub const fn id(&self) -> i32 {
        match self {
            InterviewStatus::New => 1,
            InterviewStatus::InProgress => 2,
            InterviewStatus::Completed => 3,
            InterviewStatus::Canceled => 4,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(InterviewStatus::New),
            2 => Some(InterviewStatus::InProgress),
            3 => Some(InterviewStatus::Completed),
            4 => Some(InterviewStatus::Canceled),
            _ => None,
        }
    }
}
