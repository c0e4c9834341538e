//! The `utils` module provides common definitions used across the `relaypub`
//! application.
//!
//! It centralizes the error taxonomy and the structured response type that
//! both entry points return to the invoking environment.

pub mod error;
pub mod response;
