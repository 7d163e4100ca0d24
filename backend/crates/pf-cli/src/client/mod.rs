pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, ProjectFields};
pub use error::{ClientError, Result as CliClientResult};
