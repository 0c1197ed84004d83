//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::TesterArgs;
pub use types::HttpMethod;

pub(crate) use defaults::DEFAULT_USER_AGENT;
pub(crate) use parsers::normalize_legacy_flags;
