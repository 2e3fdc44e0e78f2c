//! Core library for the upcoming tasks view
//!
//! This crate contains the core logic, including:
//! - Task model and draft validation
//! - The task list controller and its upcoming-only filter
//! - Presentation-side form drafts

pub mod error;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
