//! HTTP request execution for a single attempt.
mod client;
mod executor;
mod target;


pub use client::build_client;
pub use executor::HttpExecutor;
pub use target::RequestTarget;
