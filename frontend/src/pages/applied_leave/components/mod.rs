pub mod counters;
pub mod date_modal;
pub mod grant_choice;
pub mod list;
