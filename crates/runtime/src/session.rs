//! Grid-search session orchestration.
//!
//! A full session is two strictly sequential runner invocations:
//!
//! 1. the primary step, `NEW` when no report exists yet and `CONTINUE`
//!    otherwise. A non-zero exit aborts the session.
//! 2. the `TEST_BEST` step, which evaluates the best configuration in the
//!    report. Its exit code is logged and returned but never fails the session.

use std::path::Path;

use sweep_protocol::{SessionInvocation, SessionMode};
use tracing::{info, warn};

use crate::environment::EnvironmentBlock;
use crate::error::{Error, Result};
use crate::runner::SessionRunner;

/// What a completed session did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
	/// Mode of the primary step.
	pub primary_mode: SessionMode,
	/// Exit code of the `TEST_BEST` step.
	pub test_best_exit_code: i32,
}

/// Primary mode for a report that does or does not exist yet.
pub fn mode_for(report_exists: bool) -> SessionMode {
	if report_exists {
		SessionMode::Continue
	} else {
		SessionMode::New
	}
}

/// Runs the primary step, then `TEST_BEST` if it succeeded.
///
/// # Errors
///
/// Returns [`Error::SessionFailed`] when the primary step exits non-zero, in
/// which case `TEST_BEST` is not attempted. Runner errors (for example a
/// failed spawn) are returned from either step.
pub async fn run_full_session<R>(
	runner: &R,
	report_path: &Path,
	device_idx: i64,
	env: &EnvironmentBlock,
) -> Result<SessionOutcome>
where
	R: SessionRunner + ?Sized,
{
	let primary_mode = mode_for(report_path.exists());
	match primary_mode {
		SessionMode::Continue => info!(report = %report_path.display(), "Continuing session..."),
		_ => info!(report = %report_path.display(), "Starting session from fresh."),
	}

	let primary = SessionInvocation::new(device_idx, report_path, primary_mode);
	let code = runner.run(&primary, env).await?;
	if code != 0 {
		return Err(Error::SessionFailed {
			mode: primary_mode,
			code,
		});
	}

	let test_best = SessionInvocation::test_best(device_idx, report_path);
	let test_best_exit_code = runner.run(&test_best, env).await?;
	if test_best_exit_code == 0 {
		info!(device_idx, "best configuration evaluated");
	} else {
		warn!(
			device_idx,
			code = test_best_exit_code,
			"best-configuration evaluation exited unsuccessfully; ignoring"
		);
	}

	Ok(SessionOutcome {
		primary_mode,
		test_best_exit_code,
	})
}
