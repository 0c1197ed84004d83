//! Core library for the `volley` CLI.
//!
//! A run fires `n` concurrent HTTP requests per round, optionally spreading
//! their start times, and stops each round at a fixed ceiling. The
//! [`round`] module holds the dispatch loop and result types, [`http`] the
//! request executor, and [`app`] the sequential repetition of rounds. The
//! primary user-facing interface is the `volley` command-line application.
pub mod app;
pub mod args;
mod cancel;
pub mod config;
pub mod error;
pub mod http;
pub mod round;
