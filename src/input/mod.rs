//! Input adapters that turn host input into explorer events.

#[cfg(feature = "gui")]
pub mod gui;
