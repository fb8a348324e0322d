// UI-facing state owned by the front end

pub mod view_state;
