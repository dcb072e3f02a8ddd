//! skillmatch - Terminal Career Mentor Library
//!
//! A terminal wizard that walks a user from an education level through
//! skill selection to matching job postings, built in Rust.

pub mod domain;
pub mod application;
pub mod presentation;

pub use domain::*;
pub use application::*;
