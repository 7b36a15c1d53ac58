pub mod delete_flow;
pub mod form_controller;
pub mod list_sync;
pub mod messages;

pub use delete_flow::{Confirm, DeleteFlow, DeleteOutcome};
pub use form_controller::{FormController, SubmitMode, SubmitOutcome};
