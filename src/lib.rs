//! Test harness for the travel-purchase payment service.
//!
//! The service under test sells a fixed-price tour and accepts two payment
//! paths: direct card payment and credit. This crate is the reusable layer
//! the scenario tests are composed from: seedable test-data generators, a
//! card payload builder, a thin HTTP client for the payment API, page
//! objects for the checkout form, and a persistence verifier for the
//! payment/order/credit tables.

pub mod config;
pub mod core;
pub mod modules;

pub use config::HarnessConfig;
pub use core::{HarnessError, Result};
pub use modules::api;
pub use modules::data;
pub use modules::db;
pub use modules::ui;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber for a test process.
///
/// Safe to call from every test; only the first call takes effect.
/// Honours `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .init();
    });
}
