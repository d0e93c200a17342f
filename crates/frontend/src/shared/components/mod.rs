pub mod confirm_dialog;
pub mod modal;
