//! Utility functions for the application

pub mod string;
pub mod time;
