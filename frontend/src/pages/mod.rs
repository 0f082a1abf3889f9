pub mod controls;
pub mod date_picker;
pub mod overview;
pub mod patients;
pub mod prescription;
pub mod stepper;
