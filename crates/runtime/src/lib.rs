//! Runtime for deepsysid grid-search sweeps.
//!
//! Prepares the environment for the session runner, launches it, and drives a
//! full session (primary step followed by best-configuration evaluation).

pub mod environment;
pub mod error;
pub mod runner;
pub mod session;

pub use environment::{EnvironmentBlock, load_environment};
pub use error::{Error, Result};
pub use runner::{ProcessRunner, RUNNER_OVERRIDE_ENV, SessionRunner};
pub use session::{SessionOutcome, mode_for, run_full_session};
pub use sweep_protocol::{SessionInvocation, SessionMode};
