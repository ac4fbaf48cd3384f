//! Common reusable UI components
//!
//! Building blocks shared by every page: buttons, form fields, dialogs,
//! inline messages and spinners.

pub mod button;
pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use button::{Button, ButtonSize, ButtonVariant, LinkButton};
pub use form::{FormField, SelectField, TextAreaField};
pub use message::{ErrorMessage, InfoMessage};
pub use modal::{AlertDialog, BaseModal};
pub use spinner::{InlineSpinner, Spinner, SpinnerSize};
