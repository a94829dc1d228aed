//! Error types for the sweep runtime.

use std::path::PathBuf;

use sweep_protocol::SessionMode;
use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or driving a session.
#[derive(Debug, Error)]
pub enum Error {
	/// The environment file could not be read.
	#[error("Failed to read environment file {}: {source}", path.display())]
	EnvFileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A non-blank line of the environment file is not a single `NAME=VALUE` pair.
	#[error("Malformed line {line} in environment file {}: expected NAME=VALUE, got {content:?}", path.display())]
	MalformedEnvLine {
		path: PathBuf,
		/// 1-based line number.
		line: usize,
		/// Line content after stripping surrounding whitespace.
		content: String,
	},

	/// The session runner executable could not be located.
	#[error("Session runner '{program}' not found: {source}")]
	RunnerNotFound {
		program: String,
		#[source]
		source: which::Error,
	},

	/// The session runner could not be started.
	#[error("Failed to launch session runner {}: {source}", program.display())]
	Spawn {
		program: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The primary session step exited unsuccessfully.
	#[error("Failed running gridsearch session ({mode} exited with code {code})")]
	SessionFailed { mode: SessionMode, code: i32 },
}
