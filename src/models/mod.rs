// Module exports for models

pub mod calendar;
pub mod date_entry;
pub mod recurrence;
pub mod settings;
