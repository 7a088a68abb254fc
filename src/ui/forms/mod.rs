//! Form rendering module
//!
//! - `field_renderer`: widget rendering helpers
//! - `time_entry`: the time entry form in each of its states

mod field_renderer;
mod time_entry;

pub use time_entry::draw_time_entry;
