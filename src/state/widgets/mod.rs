//! Focus-aware input widgets used by the forms and screens

mod date_picker;
mod hours_selector;
mod text_input;

pub use date_picker::*;
pub use hours_selector::*;
pub use text_input::*;
