pub mod components;
pub mod number_format;
pub mod state;
