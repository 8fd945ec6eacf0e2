// Common types and utilities shared across the application

pub mod phrases;

pub use phrases::{RandomPhrasePicker, ENGAGING_PHRASES};
