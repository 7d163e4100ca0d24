//! pf-cli library
//!
//! This module exports the HTTP client for use in tests and other crates.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, ProjectFields};
