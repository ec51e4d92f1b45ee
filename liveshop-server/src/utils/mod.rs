//! Utility module - shared helpers used across the service and API layers
//!
//! # Contents
//!
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - record timestamp formatting
//! - [`validation`] - declarative payload schemas and the generic validator

pub mod logger;
pub mod time;
pub mod validation;
