//! Form domain layer
//!
//! The time entry form owns its field widgets, a cyclic focus ring and the
//! `Editing -> Submitting -> Completed | Error` submission lifecycle.

mod focus;
mod time_entry;

pub use focus::FormFocus;
pub use time_entry::{FormState, TimeEntryDraft, TimeEntryForm, VALIDATION_MESSAGE};
