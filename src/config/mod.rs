//! Configuration for paste conversion
//!
//! This module provides the `ParseOptions` struct and its builder.

pub mod builder;
pub mod types;

pub use builder::ParseOptionsBuilder;
pub use types::{MimeType, ParseOptions};
