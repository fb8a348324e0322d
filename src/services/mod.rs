// Service module exports

pub mod calendar;
pub mod recurrence;
pub mod settings;
