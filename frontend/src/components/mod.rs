pub mod date_picker;
pub mod icon;
pub mod markdown;
pub mod menu_item;
pub mod number_stepper;
pub mod patient_search;
pub mod prescription_card;
pub mod radio_group;

pub use date_picker::DatePicker;
pub use icon::{Icon, IconName};
pub use markdown::MarkdownView;
pub use menu_item::MenuItem;
pub use number_stepper::NumberStepper;
pub use patient_search::PatientSearch;
pub use prescription_card::PrescriptionCard;
pub use radio_group::{RadioButton, RadioGroup, RadioOption};
