use std::fmt;

use sweep_runtime::Error as RuntimeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SweepError>;

#[derive(Debug, Error)]
pub enum SweepError {
	#[error(transparent)]
	Runtime(#[from] RuntimeError),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

/// Category printed alongside an error message on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
	/// Environment file missing, unreadable or malformed
	EnvFileError,
	/// Session runner executable could not be located
	RunnerNotFound,
	/// Session runner could not be started
	SpawnFailed,
	/// Primary session step exited non-zero
	SessionFailed,
	/// Unknown/internal error
	InternalError,
}

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ErrorCode::EnvFileError => write!(f, "ENV_FILE_ERROR"),
			ErrorCode::RunnerNotFound => write!(f, "RUNNER_NOT_FOUND"),
			ErrorCode::SpawnFailed => write!(f, "SPAWN_FAILED"),
			ErrorCode::SessionFailed => write!(f, "SESSION_FAILED"),
			ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
		}
	}
}

impl SweepError {
	pub fn code(&self) -> ErrorCode {
		match self {
			SweepError::Runtime(err) => match err {
				RuntimeError::EnvFileRead { .. } | RuntimeError::MalformedEnvLine { .. } => ErrorCode::EnvFileError,
				RuntimeError::RunnerNotFound { .. } => ErrorCode::RunnerNotFound,
				RuntimeError::Spawn { .. } => ErrorCode::SpawnFailed,
				RuntimeError::SessionFailed { .. } => ErrorCode::SessionFailed,
			},
			SweepError::Anyhow(_) => ErrorCode::InternalError,
		}
	}
}
