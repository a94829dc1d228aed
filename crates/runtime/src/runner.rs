//! Session runner process management
//!
//! Locates the `deepsysid` executable and runs it as a blocking child. The
//! program is resolved in this order:
//! 1. `DEEPSYSID_BIN` in the prepared environment (a name or a path)
//! 2. [`RUNNER_PROGRAM`] on the prepared environment's `PATH`
//!
//! Resolution uses the prepared environment rather than the ambient one so the
//! lookup sees the same `PATH` the child will.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use sweep_protocol::{RUNNER_PROGRAM, SessionInvocation};
use tokio::process::Command;
use tracing::debug;

use crate::environment::EnvironmentBlock;
use crate::error::{Error, Result};

/// Environment variable that overrides the runner program.
pub const RUNNER_OVERRIDE_ENV: &str = "DEEPSYSID_BIN";

/// Runs one session-runner invocation to completion.
///
/// Implementations must not return before the child has terminated.
#[async_trait]
pub trait SessionRunner: Send + Sync {
	/// Returns the child's exit code.
	async fn run(&self, invocation: &SessionInvocation, env: &EnvironmentBlock) -> Result<i32>;
}

/// Runs the real session runner as a child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
	program: PathBuf,
}

impl ProcessRunner {
	/// Uses `program` as-is, without resolution.
	pub fn new(program: impl Into<PathBuf>) -> Self {
		Self { program: program.into() }
	}

	/// Locates the runner using the override variable and `PATH` from `env`.
	///
	/// # Errors
	///
	/// Returns [`Error::RunnerNotFound`] if the program cannot be located.
	pub fn resolve(env: &EnvironmentBlock) -> Result<Self> {
		let requested = env
			.get(RUNNER_OVERRIDE_ENV)
			.map(|value| value.to_string_lossy().into_owned())
			.filter(|value| !value.is_empty())
			.unwrap_or_else(|| RUNNER_PROGRAM.to_string());

		let cwd = std::env::current_dir().unwrap_or_default();
		let program = resolve_program(&requested, env.get("PATH"), &cwd)?;
		debug!(
			requested = %requested,
			program = %program.display(),
			"resolved session runner"
		);
		Ok(Self { program })
	}

	pub fn program(&self) -> &Path {
		&self.program
	}
}

#[async_trait]
impl SessionRunner for ProcessRunner {
	async fn run(&self, invocation: &SessionInvocation, env: &EnvironmentBlock) -> Result<i32> {
		debug!(
			"spawning: {} {}",
			self.program.display(),
			invocation.display_args()
		);

		let status = Command::new(&self.program)
			.args(invocation.args())
			.env_clear()
			.envs(env.iter())
			.stdin(Stdio::inherit())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.status()
			.await
			.map_err(|source| Error::Spawn {
				program: self.program.clone(),
				source,
			})?;

		Ok(exit_code(status))
	}
}

fn resolve_program(requested: &str, path_var: Option<&std::ffi::OsStr>, cwd: &Path) -> Result<PathBuf> {
	let candidate = Path::new(requested);
	if candidate.components().count() > 1 && candidate.is_file() {
		return Ok(candidate.to_path_buf());
	}

	which::which_in(requested, path_var, cwd).map_err(|source| Error::RunnerNotFound {
		program: requested.to_string(),
		source,
	})
}

/// Exit code of a finished child; termination by signal `n` maps to `-n`.
fn exit_code(status: ExitStatus) -> i32 {
	if let Some(code) = status.code() {
		return code;
	}

	#[cfg(unix)]
	{
		use std::os::unix::process::ExitStatusExt;
		if let Some(signal) = status.signal() {
			return -signal;
		}
	}

	-1
}
