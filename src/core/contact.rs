//! Contact form state and simulated submission
//!
//! Submission is two-phase: [`ContactForm::begin_submission`] validates and
//! hands out a [`SubmissionTicket`], and the UI redeems that ticket with
//! [`ContactForm::finish_submission`] once [`SUBMISSION_DELAY_MS`] has passed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::SiteError;

/// Simulated network latency before a message counts as sent
pub const SUBMISSION_DELAY_MS: u32 = 1000;

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

/// Label of the submit control while a message is in flight
pub const BUSY_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    #[default]
    General,
    Booking,
    Pricing,
    Partnership,
    Support,
    Feedback,
}

impl InquiryType {
    pub const ALL: [InquiryType; 6] = [
        InquiryType::General,
        InquiryType::Booking,
        InquiryType::Pricing,
        InquiryType::Partnership,
        InquiryType::Support,
        InquiryType::Feedback,
    ];

    /// Value submitted by the `<select>`
    pub fn value(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Booking => "booking",
            InquiryType::Pricing => "pricing",
            InquiryType::Partnership => "partnership",
            InquiryType::Support => "support",
            InquiryType::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Booking => "Space Booking",
            InquiryType::Pricing => "Pricing Information",
            InquiryType::Partnership => "Partnership Opportunity",
            InquiryType::Support => "Technical Support",
            InquiryType::Feedback => "Feedback",
        }
    }

    /// Parse a select value; anything unrecognised is a general inquiry
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.value() == value)
            .unwrap_or_default()
    }
}

/// Options for the inquiry type select, in display order
pub const INQUIRY_TYPES: [InquiryType; 6] = InquiryType::ALL;

/// A contact form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    InquiryType,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::InquiryType,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// `name` attribute of the matching form input
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
            ContactField::InquiryType => "inquiryType",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
            ContactField::InquiryType => "Inquiry Type",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ContactField::Name | ContactField::Email | ContactField::Subject | ContactField::Message
        )
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

/// Snapshot of the form taken when submission starts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub inquiry_type: InquiryType,
}

/// Proof of an in-flight submission, redeemed by `finish_submission`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    serial: u64,
    submission: ContactSubmission,
}

impl SubmissionTicket {
    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAcknowledgement {
    pub message: &'static str,
    pub submission: ContactSubmission,
}

/// Contact page form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactSubmission,
    phase: SubmissionPhase,
    serial: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field as shown in its input
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.values.name,
            ContactField::Email => &self.values.email,
            ContactField::Phone => &self.values.phone,
            ContactField::Subject => &self.values.subject,
            ContactField::Message => &self.values.message,
            ContactField::InquiryType => self.values.inquiry_type.value(),
        }
    }

    pub fn inquiry_type(&self) -> InquiryType {
        self.values.inquiry_type
    }

    /// Overwrite exactly one field
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.values.name = value,
            ContactField::Email => self.values.email = value,
            ContactField::Phone => self.values.phone = value,
            ContactField::Subject => self.values.subject = value,
            ContactField::Message => self.values.message = value,
            ContactField::InquiryType => self.values.inquiry_type = InquiryType::from_value(&value),
        }
    }

    /// Start the form on a topic; refused while a message is in flight
    /// because finishing it clears every field.
    pub fn prefill(&mut self, kind: InquiryType, subject: &str) -> Result<(), SiteError> {
        if self.is_submitting() {
            tracing::debug!(inquiry = kind.value(), "prefill skipped during submission");
            return Err(SiteError::SubmissionInProgress);
        }
        self.values.inquiry_type = kind;
        self.values.subject = subject.to_string();
        Ok(())
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.field(*field).trim().is_empty())
            .collect()
    }

    /// Validate and enter the submitting phase
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, SiteError> {
        if self.is_submitting() {
            tracing::warn!("contact submission already in progress");
            return Err(SiteError::SubmissionInProgress);
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(?missing, "contact submission rejected");
            return Err(SiteError::IncompleteContact { missing });
        }

        self.serial += 1;
        self.phase = SubmissionPhase::Submitting;
        tracing::debug!(
            serial = self.serial,
            inquiry = self.values.inquiry_type.value(),
            "contact submission started"
        );

        Ok(SubmissionTicket {
            serial: self.serial,
            submission: self.values.clone(),
        })
    }

    /// Complete a submission: clear every field and return to idle
    pub fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
    ) -> Result<ContactAcknowledgement, SiteError> {
        if !self.is_submitting() || ticket.serial != self.serial {
            tracing::warn!(serial = ticket.serial, "stale contact submission ticket");
            return Err(SiteError::NoSubmissionPending);
        }

        if let Ok(payload) = serde_json::to_string(&ticket.submission) {
            tracing::debug!(%payload, "contact payload");
        }

        self.values = ContactSubmission::default();
        self.phase = SubmissionPhase::Idle;
        tracing::info!(
            serial = ticket.serial,
            inquiry = ticket.submission.inquiry_type.value(),
            "contact message sent"
        );

        Ok(ContactAcknowledgement {
            message: SUCCESS_MESSAGE,
            submission: ticket.submission,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Ada Lovelace");
        form.set_field(ContactField::Email, "ada@example.com");
        form.set_field(ContactField::Subject, "Tour");
        form.set_field(ContactField::Message, "Can I visit on Friday?");
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.inquiry_type(), InquiryType::General);
        assert_eq!(form.field(ContactField::InquiryType), "general");
        assert_eq!(form.field(ContactField::Name), "");
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut form = filled();
        form.set_field(ContactField::Phone, "(555) 000-1111");
        assert_eq!(form.field(ContactField::Phone), "(555) 000-1111");
        assert_eq!(form.field(ContactField::Name), "Ada Lovelace");
        assert_eq!(form.field(ContactField::Subject), "Tour");
    }

    #[test]
    fn test_unknown_inquiry_type_falls_back() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::InquiryType, "pricing");
        assert_eq!(form.inquiry_type(), InquiryType::Pricing);
        form.set_field(ContactField::InquiryType, "complaints");
        assert_eq!(form.inquiry_type(), InquiryType::General);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.name()), Some(field));
        }
        assert_eq!(ContactField::from_name("fax"), None);
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut form = filled();
        form.set_field(ContactField::InquiryType, "booking");

        let ticket = form.begin_submission().unwrap();
        assert!(form.is_submitting());
        assert_eq!(ticket.submission().name, "Ada Lovelace");

        let ack = form.finish_submission(ticket).unwrap();
        assert_eq!(ack.message, SUCCESS_MESSAGE);
        assert_eq!(ack.submission.inquiry_type, InquiryType::Booking);
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        for field in ContactField::ALL {
            if field != ContactField::InquiryType {
                assert_eq!(form.field(field), "");
            }
        }
        assert_eq!(form.inquiry_type(), InquiryType::General);
    }

    #[test]
    fn test_missing_required_fields() {
        let mut form = filled();
        form.set_field(ContactField::Email, "   ");
        form.set_field(ContactField::Message, "");

        let err = form.begin_submission().unwrap_err();
        assert_eq!(
            err,
            SiteError::IncompleteContact {
                missing: vec![ContactField::Email, ContactField::Message]
            }
        );
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_phone_is_optional() {
        let mut form = filled();
        assert!(form.missing_fields().is_empty());
        assert!(form.begin_submission().is_ok());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        let _ticket = form.begin_submission().unwrap();
        assert_eq!(
            form.begin_submission().unwrap_err(),
            SiteError::SubmissionInProgress
        );
    }

    #[test]
    fn test_prefill_sets_topic_only() {
        let mut form = filled();
        form.prefill(InquiryType::Support, "Support request").unwrap();
        assert_eq!(form.inquiry_type(), InquiryType::Support);
        assert_eq!(form.field(ContactField::Subject), "Support request");
        assert_eq!(form.field(ContactField::Name), "Ada Lovelace");
    }

    #[test]
    fn test_prefill_refused_while_submitting() {
        let mut form = filled();
        let ticket = form.begin_submission().unwrap();
        assert_eq!(
            form.prefill(InquiryType::Booking, "Schedule a Tour").unwrap_err(),
            SiteError::SubmissionInProgress
        );
        assert_eq!(form.field(ContactField::Subject), "Tour");

        form.finish_submission(ticket).unwrap();
        assert!(form.prefill(InquiryType::Booking, "Schedule a Tour").is_ok());
        assert_eq!(form.field(ContactField::Subject), "Schedule a Tour");
        assert_eq!(form.inquiry_type(), InquiryType::Booking);
    }

    #[test]
    fn test_ticket_redeemed_once() {
        let mut form = filled();
        let ticket = form.begin_submission().unwrap();
        let replay = ticket.clone();
        form.finish_submission(ticket).unwrap();
        assert_eq!(
            form.finish_submission(replay).unwrap_err(),
            SiteError::NoSubmissionPending
        );
    }

    #[test]
    fn test_inquiry_types_serialize_lowercase() {
        let json = serde_json::to_string(&InquiryType::Partnership).unwrap();
        assert_eq!(json, "\"partnership\"");
        assert_eq!(INQUIRY_TYPES.len(), 6);
        assert_eq!(INQUIRY_TYPES[0].label(), "General Inquiry");
    }
}
