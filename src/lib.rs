//! moodlog - Mood journal with weekly trend reports
//!
//! A command-line mood journal that stores entries as markdown day notes
//! and aggregates them into weekly per-category averages and trends.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
