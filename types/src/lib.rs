//! Core value types for Keel.
//!
//! This crate contains pure value types with no IO, no logging, and minimal dependencies.
//! Everything here can be used from any layer of the application.

#![allow(clippy::missing_errors_doc)]

pub mod interval;

pub use interval::{Endpoint, Interval, IntervalError, cover, max};
