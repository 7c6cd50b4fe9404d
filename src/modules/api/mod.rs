//! HTTP-level access to the payment API.

pub mod client;
pub mod endpoint;
pub mod status;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use status::ApiExpectation;
