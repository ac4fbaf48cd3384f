//! Site content and page state
//!
//! Everything here is plain Rust with no browser dependency, so the whole
//! module is exercised by `cargo test` on the host.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod reveal;
#[cfg(test)]
mod tests;

pub use booking::{BookingConfirmation, BookingField, BookingSelection, BookingStep};
pub use catalog::{OFFICE_SPACES, OfficeSpace, SITE_NAME};
pub use contact::{ContactField, ContactForm, InquiryType, SubmissionPhase};
pub use error::SiteError;
pub use filter::{SpaceFilter, filter_spaces};
pub use reveal::{RevealController, RevealOptions, VisibilityObserver};
