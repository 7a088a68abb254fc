//! Application state module

mod favorites;
mod forms;
mod models;
mod screens;
mod signal;
mod widgets;

pub use favorites::*;
pub use forms::*;
pub use models::*;
pub use screens::*;
pub use signal::*;
pub use widgets::*;
