//! Integration tests for Och Qolma.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p och-qolma-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_lifecycle` - placement and the scripted fulfillment timeline
//! - `session_flow` - full controller flows (cart, checkout, admin, chat)
//!
//! No external services are required: the chef assistant is replaced by a
//! scripted double and timers run under tokio's paused test clock.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Install a tracing subscriber honoring `RUST_LOG`, once per test binary.
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "och_qolma_app=info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
