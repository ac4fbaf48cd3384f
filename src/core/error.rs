//! Errors surfaced by the booking and contact flows.
//!
//! Every variant describes incomplete or out-of-order user input. The
//! `Display` text is the blocking message shown to the visitor.

use crate::core::booking::BookingField;
use crate::core::contact::ContactField;

/// Site-level error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    #[error("Please fill in all booking details.")]
    IncompleteBooking { missing: Vec<BookingField> },

    #[error("Please fill in the required fields: {}", field_list(.missing))]
    IncompleteContact { missing: Vec<ContactField> },

    #[error("Your message is already being sent")]
    SubmissionInProgress,

    #[error("There is no message waiting to be sent")]
    NoSubmissionPending,
}

impl SiteError {
    /// Whether the error came from missing form input
    pub fn is_incomplete_input(&self) -> bool {
        matches!(
            self,
            SiteError::IncompleteBooking { .. } | SiteError::IncompleteContact { .. }
        )
    }
}

fn field_list(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_booking_message() {
        let err = SiteError::IncompleteBooking {
            missing: vec![BookingField::Date],
        };
        assert_eq!(err.to_string(), "Please fill in all booking details.");
        assert!(err.is_incomplete_input());
    }

    #[test]
    fn test_incomplete_contact_lists_fields() {
        let err = SiteError::IncompleteContact {
            missing: vec![ContactField::Email, ContactField::Message],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in the required fields: Email, Message"
        );
    }

    #[test]
    fn test_submission_errors_are_not_input_errors() {
        assert!(!SiteError::SubmissionInProgress.is_incomplete_input());
        assert!(!SiteError::NoSubmissionPending.is_incomplete_input());
    }
}
