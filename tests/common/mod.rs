//! Common test utilities and fixtures for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: Isolated command builders and snapshot files
//! - `log_capture`: Tracing capture for asserting on emitted events

#![allow(dead_code)]

pub mod fixtures;
pub mod log_capture;
