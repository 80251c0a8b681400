use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A pending review record exists but its payload cannot be read.
    ///
    /// Occurs when the stored kind is unknown or the JSON payload is malformed. The review
    /// workflow treats such records as missing rather than guessing a decision.
    #[error("Malformed pending review for message {message_id}: {reason}")]
    MalformedPendingReview {
        /// Review message the record was keyed by
        message_id: u64,
        /// What was wrong with the record
        reason: String,
    },
}
