//! Validation workflow state machine
//!
//! ```text
//! Submitting --(202 + id)--> Pending(job) --(poll: processed)--> Processed
//!     |                        ^      |
//!     |                        +------+ (poll: not processed | poll failed)
//!     +--(any other status)--------------------------------> Processed
//! ```
//!
//! There is no failure terminal. A pending job is polled until the service
//! reports it processed, and a failed poll counts the same as an unfinished
//! one.

use marketplace_domain::{
    ApiResponse, MarketplaceError, ResponseBody, Result, SubmissionAck, ValidationJob,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationState {
    /// Package upload in flight.
    Submitting,
    /// Accepted asynchronously; waiting for the service to process `job_id`.
    Pending { job_id: String, polls: u64 },
    /// Terminal. Carries the body resolved to the caller.
    Processed(ResponseBody),
}

impl ValidationState {
    /// Transition out of `Submitting` on the submission response.
    ///
    /// # Errors
    ///
    /// Returns `MarketplaceError::InvalidResponse` for a 202 that names no
    /// job, and `MarketplaceError::Internal` when not in `Submitting`.
    pub fn on_submission(self, response: ApiResponse) -> Result<Self> {
        if self != Self::Submitting {
            return Err(MarketplaceError::Internal(format!(
                "submission response received in state {}",
                self.label()
            )));
        }

        if response.is_accepted() {
            let ack = SubmissionAck::from_body(&response.body)?;
            Ok(Self::Pending { job_id: ack.id, polls: 0 })
        } else {
            Ok(Self::Processed(response.body))
        }
    }

    /// Transition out of `Pending` on the outcome of one status check.
    ///
    /// Only a body whose `processed` flag is truthy ends the wait; the shape
    /// of every other field is irrelevant. Failed polls and non-object bodies
    /// keep the job pending. Other states are returned unchanged.
    #[must_use]
    pub fn on_poll(self, outcome: Result<ResponseBody>) -> Self {
        match self {
            Self::Pending { job_id, polls } => match outcome {
                Ok(body) if ValidationJob::from_body(&body).is_some_and(|job| job.processed) => {
                    Self::Processed(body)
                }
                _ => Self::Pending { job_id, polls: polls + 1 },
            },
            other => other,
        }
    }

    pub fn pending_job_id(&self) -> Option<&str> {
        match self {
            Self::Pending { job_id, .. } => Some(job_id),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Processed(_))
    }

    /// Body of a processed workflow.
    ///
    /// # Errors
    ///
    /// Returns `MarketplaceError::Internal` if the workflow has not finished.
    pub fn into_processed(self) -> Result<ResponseBody> {
        match self {
            Self::Processed(body) => Ok(body),
            other => Err(MarketplaceError::Internal(format!(
                "validation workflow ended in state {}",
                other.label()
            ))),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submitting => "submitting",
            Self::Pending { .. } => "pending",
            Self::Processed(_) => "processed",
        }
    }
}
