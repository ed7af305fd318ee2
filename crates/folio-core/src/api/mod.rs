//! REST surface of the portfolio backend.

mod client;
pub mod types;

pub use client::ApiClient;
