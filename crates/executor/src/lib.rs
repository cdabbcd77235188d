//! Command execution layer for spanlog
//!
//! Transport-agnostic binding over the aggregation engine. A transport
//! (the CLI, an HTTP handler, a test) builds a [`Command`], hands it to
//! [`Executor::execute`], and serializes the returned [`Output`].
//!
//! Both enums are serde types, so a command can arrive as JSON:
//!
//! ```ignore
//! let command: Command = serde_json::from_str(r#"{"command":"GetTimeline","traceId":"t1"}"#)?;
//! let output = executor.execute(command)?;
//! println!("{}", serde_json::to_string(&output)?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod error;
mod executor;
mod handlers;
mod output;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::{Executor, ExecutorConfig};
pub use output::Output;
