//! Och Qolma - single-page food-ordering demo, as a domain library.
//!
//! # Architecture
//!
//! - [`catalog`] - read-only recipe/menu data, supplied externally
//! - [`cart`] - the shopping cart (one line per product, snapshot pricing)
//! - [`orders`] - order placement and the scripted fulfillment simulation
//! - [`session`] - one explicit session-state value
//! - [`controller`] - the single writer routing [`controller::Message`]s
//! - [`services::chef`] - chef assistant over an external text-generation API
//! - [`admin`] - demo-only admin gate (not an auth mechanism)
//! - [`partner`] - static partner dashboard figures
//!
//! All state is in-memory and session-scoped. There is no server, no
//! persistence, and no real fulfillment: the order status progression is a
//! fixed-timer simulation, documented as such in [`orders`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod orders;
pub mod partner;
pub mod services;
pub mod session;

pub use controller::{App, Message, Reply};
pub use error::{AppError, Result};
