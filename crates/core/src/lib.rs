//! Och Qolma Core - Shared types library.
//!
//! This crate provides common types used across all Och Qolma components:
//! - `app` - The food-ordering demo application library
//! - `integration-tests` - Cross-crate integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no timers.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
