//! Routed pages
//!
//! - Home (`/`)
//! - About (`/about`)
//! - Office spaces with the category filter (`/office-spaces`)
//! - Booking flow (`/booking`)
//! - Contact form (`/contact`)
//! - Not found, for every other path

mod about;
mod booking;
mod contact;
mod home;
mod not_found;
mod office_spaces;

pub use about::AboutPage;
pub use booking::BookingPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use office_spaces::OfficeSpacesPage;
