//! HTTP client and response classifier for the healthcare-verification API.

pub mod classify;
pub mod client;

pub use classify::{classify, dashboard};
pub use client::ApiClient;
