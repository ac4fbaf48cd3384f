//! Booking flow state
//!
//! [`BookingSelection`] is owned by the booking page and mutated only through
//! its setters. The current [`BookingStep`] is derived from which fields are
//! filled; picks are independent, so a time may be chosen before a date.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::catalog::{OfficeSpace, find_space};
use crate::core::error::SiteError;

pub const TIME_SLOTS: &[&str] = &[
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

pub const DURATION_OPTIONS: &[&str] = &["1 hour", "2 hours", "4 hours", "8 hours", "Full day"];

/// Input format of the native date picker
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A single required booking input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingField {
    Space,
    Date,
    TimeSlot,
    Duration,
}

impl BookingField {
    /// All fields in the order the visitor fills them
    pub const ALL: [BookingField; 4] = [
        BookingField::Space,
        BookingField::Date,
        BookingField::TimeSlot,
        BookingField::Duration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Space => "Space",
            BookingField::Date => "Date",
            BookingField::TimeSlot => "Time",
            BookingField::Duration => "Duration",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the visitor is in the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStep {
    NoSpaceSelected,
    SpaceSelected,
    DateChosen,
    TimeChosen,
    DurationChosen,
    ReadyToConfirm,
}

/// Numbered indicator in the booking page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepIndicator {
    pub number: u8,
    pub label: &'static str,
    pub active: bool,
}

/// The visitor's in-progress booking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    space_id: String,
    date: String,
    time_slot: String,
    duration: String,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_space(&mut self, space_id: impl Into<String>) {
        self.space_id = space_id.into();
        tracing::debug!(space = %self.space_id, "booking space selected");
    }

    /// Set the date as given by the date input (`YYYY-MM-DD`)
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
        tracing::debug!(date = %self.date, "booking date set");
    }

    pub fn select_time_slot(&mut self, time_slot: impl Into<String>) {
        self.time_slot = time_slot.into();
        tracing::debug!(time = %self.time_slot, "booking time selected");
    }

    pub fn select_duration(&mut self, duration: impl Into<String>) {
        self.duration = duration.into();
        tracing::debug!(duration = %self.duration, "booking duration selected");
    }

    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time_slot(&self) -> &str {
        &self.time_slot
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Space => &self.space_id,
            BookingField::Date => &self.date,
            BookingField::TimeSlot => &self.time_slot,
            BookingField::Duration => &self.duration,
        }
    }

    pub fn is_filled(&self, field: BookingField) -> bool {
        !self.value(field).is_empty()
    }

    /// Current step, from the furthest filled field
    pub fn step(&self) -> BookingStep {
        if self.is_complete() {
            return BookingStep::ReadyToConfirm;
        }
        match BookingField::ALL
            .iter()
            .rev()
            .find(|field| self.is_filled(**field))
        {
            Some(BookingField::Duration) => BookingStep::DurationChosen,
            Some(BookingField::TimeSlot) => BookingStep::TimeChosen,
            Some(BookingField::Date) => BookingStep::DateChosen,
            Some(BookingField::Space) => BookingStep::SpaceSelected,
            None => BookingStep::NoSpaceSelected,
        }
    }

    /// Date, time and duration controls are only shown once a space is chosen
    pub fn shows_schedule_controls(&self) -> bool {
        self.is_filled(BookingField::Space)
    }

    pub fn progress(&self) -> [StepIndicator; 3] {
        [
            StepIndicator {
                number: 1,
                label: "Choose Space",
                active: true,
            },
            StepIndicator {
                number: 2,
                label: "Select Date & Time",
                active: self.is_filled(BookingField::Space),
            },
            StepIndicator {
                number: 3,
                label: "Confirm",
                active: self.is_filled(BookingField::Date) && self.is_filled(BookingField::TimeSlot),
            },
        ]
    }

    pub fn missing_fields(&self) -> Vec<BookingField> {
        BookingField::ALL
            .into_iter()
            .filter(|field| !self.is_filled(*field))
            .collect()
    }

    /// Hint listing what is left to pick, once a space has been chosen
    pub fn remaining_hint(&self) -> Option<String> {
        if !self.shows_schedule_controls() || self.is_complete() {
            return None;
        }
        let missing = self
            .missing_fields()
            .iter()
            .map(BookingField::label)
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Still to choose: {missing}"))
    }

    pub fn is_complete(&self) -> bool {
        BookingField::ALL.iter().all(|field| self.is_filled(*field))
    }

    /// Validate the selection and build the confirmation
    ///
    /// The selection itself is left untouched either way.
    pub fn confirm(&self, catalog: &[OfficeSpace]) -> Result<BookingConfirmation, SiteError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(?missing, "booking confirmation blocked");
            return Err(SiteError::IncompleteBooking { missing });
        }

        let space_title = find_space(catalog, &self.space_id)
            .map(|space| space.title.to_string())
            .unwrap_or_else(|| self.space_id.clone());

        let confirmation = BookingConfirmation {
            space_id: self.space_id.clone(),
            space_title,
            date: self.date.clone(),
            time_slot: self.time_slot.clone(),
            duration: self.duration.clone(),
        };
        tracing::info!(
            space = %confirmation.space_id,
            date = %confirmation.date,
            time = %confirmation.time_slot,
            duration = %confirmation.duration,
            "booking confirmed"
        );
        Ok(confirmation)
    }
}

/// Acknowledgment shown after a successful (simulated) booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub space_id: String,
    pub space_title: String,
    pub date: String,
    pub time_slot: String,
    pub duration: String,
}

impl BookingConfirmation {
    pub fn summary(&self) -> String {
        let space = if self.space_title == self.space_id {
            self.space_id.clone()
        } else {
            format!("{} ({})", self.space_title, self.space_id)
        };
        format!(
            "Booking confirmed!\n\nSpace: {space}\nDate: {}\nTime: {}\nDuration: {}\n\nA confirmation email will be sent shortly.",
            self.date, self.time_slot, self.duration
        )
    }
}

/// Render a `YYYY-MM-DD` date as "Saturday, June 1, 2024"
///
/// Input that does not parse is returned unchanged.
pub fn format_booking_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT) {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Value for the date input's `min` attribute
pub fn earliest_booking_date(today: NaiveDate) -> String {
    today.format(DATE_INPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::OFFICE_SPACES;

    fn complete() -> BookingSelection {
        let mut selection = BookingSelection::new();
        selection.select_space("meeting-room");
        selection.set_date("2024-06-01");
        selection.select_time_slot("10:00 AM");
        selection.select_duration("2 hours");
        selection
    }

    #[test]
    fn test_new_selection_is_empty() {
        let selection = BookingSelection::new();
        assert_eq!(selection.step(), BookingStep::NoSpaceSelected);
        assert!(!selection.shows_schedule_controls());
        assert_eq!(selection.missing_fields(), BookingField::ALL.to_vec());
    }

    #[test]
    fn test_steps_follow_picks() {
        let mut selection = BookingSelection::new();
        selection.select_space("private-office");
        assert_eq!(selection.step(), BookingStep::SpaceSelected);
        selection.set_date("2024-06-01");
        assert_eq!(selection.step(), BookingStep::DateChosen);
        selection.select_time_slot("9:00 AM");
        assert_eq!(selection.step(), BookingStep::TimeChosen);
        selection.select_duration("1 hour");
        assert_eq!(selection.step(), BookingStep::ReadyToConfirm);
    }

    #[test]
    fn test_duration_before_date() {
        let mut selection = BookingSelection::new();
        selection.select_space("private-office");
        selection.select_duration("Full day");
        assert_eq!(selection.step(), BookingStep::DurationChosen);
        assert_eq!(
            selection.missing_fields(),
            vec![BookingField::Date, BookingField::TimeSlot]
        );
    }

    #[test]
    fn test_changing_space_keeps_other_fields() {
        let mut selection = complete();
        selection.select_space("coworking-space");
        assert_eq!(selection.date(), "2024-06-01");
        assert_eq!(selection.time_slot(), "10:00 AM");
        assert!(selection.is_complete());
    }

    #[test]
    fn test_progress_indicators() {
        let mut selection = BookingSelection::new();
        let active = |s: &BookingSelection| s.progress().map(|i| i.active);
        assert_eq!(active(&selection), [true, false, false]);

        selection.select_space("meeting-room");
        assert_eq!(active(&selection), [true, true, false]);

        selection.set_date("2024-06-01");
        assert_eq!(active(&selection), [true, true, false]);

        selection.select_time_slot("3:00 PM");
        assert_eq!(active(&selection), [true, true, true]);
        assert_eq!(selection.progress()[2].label, "Confirm");
    }

    #[test]
    fn test_confirm_complete_selection() {
        let confirmation = complete().confirm(OFFICE_SPACES).unwrap();
        assert_eq!(confirmation.space_title, "Dynamic Meeting Room");
        let summary = confirmation.summary();
        assert!(summary.contains("meeting-room"));
        assert!(summary.contains("Dynamic Meeting Room"));
        assert!(summary.contains("2024-06-01"));
        assert!(summary.contains("10:00 AM"));
        assert!(summary.contains("2 hours"));
    }

    #[test]
    fn test_confirm_without_date_is_blocked() {
        let mut selection = BookingSelection::new();
        selection.select_space("meeting-room");
        selection.select_time_slot("10:00 AM");
        selection.select_duration("2 hours");
        let before = selection.clone();

        let err = selection.confirm(OFFICE_SPACES).unwrap_err();
        assert_eq!(
            err,
            SiteError::IncompleteBooking {
                missing: vec![BookingField::Date]
            }
        );
        assert_eq!(err.to_string(), "Please fill in all booking details.");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_confirm_unknown_space_uses_raw_id() {
        let mut selection = complete();
        selection.select_space("rooftop-terrace");
        let confirmation = selection.confirm(OFFICE_SPACES).unwrap();
        assert_eq!(confirmation.space_title, "rooftop-terrace");
        assert!(confirmation.summary().contains("Space: rooftop-terrace\n"));
    }

    #[test]
    fn test_remaining_hint() {
        let mut selection = BookingSelection::new();
        assert_eq!(selection.remaining_hint(), None);

        selection.select_space("private-office");
        assert_eq!(
            selection.remaining_hint().as_deref(),
            Some("Still to choose: Date, Time, Duration")
        );

        selection.select_time_slot("9:00 AM");
        assert_eq!(
            selection.remaining_hint().as_deref(),
            Some("Still to choose: Date, Duration")
        );

        assert_eq!(complete().remaining_hint(), None);
    }

    #[test]
    fn test_format_booking_date() {
        assert_eq!(format_booking_date("2024-06-01"), "Saturday, June 1, 2024");
        assert_eq!(format_booking_date("next tuesday"), "next tuesday");
        assert_eq!(format_booking_date(""), "");
    }

    #[test]
    fn test_earliest_booking_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(earliest_booking_date(today), "2024-03-07");
    }

    #[test]
    fn test_option_lists() {
        assert_eq!(TIME_SLOTS.len(), 9);
        assert_eq!(TIME_SLOTS.first(), Some(&"9:00 AM"));
        assert_eq!(TIME_SLOTS.last(), Some(&"5:00 PM"));
        assert_eq!(DURATION_OPTIONS.last(), Some(&"Full day"));
    }
}
