//! Argument surface of the `deepsysid session` command.
//!
//! The session runner is an external tool; this crate only knows how to talk
//! to it. Every invocation has the shape
//!
//! ```text
//! deepsysid session --enable-cuda --device-idx=<int> [--reportin=<path>] <report_path> <MODE>
//! ```
//!
//! where `--reportin` is present whenever the mode reads an existing report.
//!
//! # Main Types
//!
//! - [`SessionMode`] - Which step of the session to run
//! - [`SessionInvocation`] - One fully-specified call, rendered by [`SessionInvocation::args`]

mod invocation;
mod mode;

pub use invocation::SessionInvocation;
pub use mode::SessionMode;

/// Program name of the session runner when no override is configured.
pub const RUNNER_PROGRAM: &str = "deepsysid";

/// Subcommand passed as the first argument on every invocation.
pub const RUNNER_SUBCOMMAND: &str = "session";
