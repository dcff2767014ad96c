//! bodylog - Terminal body-condition journal
//!
//! A command-line journal for tracking how your body feels: pick a date,
//! record a body part and a 0-5 pain score with a note, and get stretching
//! video suggestions per body part from a plain-text catalog.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BodylogError;
