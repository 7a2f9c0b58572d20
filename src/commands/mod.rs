// ABOUTME: Non-interactive command implementations for the CLI surface
// ABOUTME: Exports bases, create-base, and duplicate handlers

pub mod bases;
pub mod duplicate;

pub use bases::{create_base, list_bases};
pub use duplicate::duplicate;
