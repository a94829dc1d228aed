use std::ffi::OsString;
use std::path::PathBuf;

use crate::{RUNNER_SUBCOMMAND, SessionMode};

/// A single call to the session runner.
///
/// Output and resume-from report point at the same file: the runner reads the
/// report and later overwrites it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInvocation {
	pub device_idx: i64,
	pub report_path: PathBuf,
	pub mode: SessionMode,
	/// Passed as `--reportin=<path>` when present.
	pub report_in: Option<PathBuf>,
}

impl SessionInvocation {
	/// Builds the invocation for `mode`, attaching `--reportin` whenever the
	/// mode reads an existing report.
	pub fn new(device_idx: i64, report_path: impl Into<PathBuf>, mode: SessionMode) -> Self {
		let report_path = report_path.into();
		let report_in = mode.reads_report().then(|| report_path.clone());
		Self {
			device_idx,
			report_path,
			mode,
			report_in,
		}
	}

	/// Best-configuration evaluation against `report_path`.
	pub fn test_best(device_idx: i64, report_path: impl Into<PathBuf>) -> Self {
		Self::new(device_idx, report_path, SessionMode::TestBest)
	}

	/// Argument vector, program name excluded.
	///
	/// Order is fixed: subcommand, `--enable-cuda`, `--device-idx`, optional
	/// `--reportin`, report path, mode.
	pub fn args(&self) -> Vec<OsString> {
		let mut args: Vec<OsString> = Vec::with_capacity(6);
		args.push(RUNNER_SUBCOMMAND.into());
		args.push("--enable-cuda".into());
		args.push(format!("--device-idx={}", self.device_idx).into());
		if let Some(report_in) = &self.report_in {
			let mut flag = OsString::from("--reportin=");
			flag.push(report_in);
			args.push(flag);
		}
		args.push(self.report_path.clone().into_os_string());
		args.push(self.mode.as_str().into());
		args
	}

	/// Space-joined rendering of [`args`](Self::args) for logs.
	pub fn display_args(&self) -> String {
		self.args()
			.iter()
			.map(|arg| arg.to_string_lossy().into_owned())
			.collect::<Vec<_>>()
			.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn strings(invocation: &SessionInvocation) -> Vec<String> {
		invocation
			.args()
			.into_iter()
			.map(|arg| arg.into_string().unwrap())
			.collect()
	}

	#[test]
	fn new_session_has_no_report_input() {
		let invocation = SessionInvocation::new(0, "/exp/configuration/progress-ship.json", SessionMode::New);
		assert_eq!(
			strings(&invocation),
			vec![
				"session",
				"--enable-cuda",
				"--device-idx=0",
				"/exp/configuration/progress-ship.json",
				"NEW",
			]
		);
		assert_eq!(invocation.report_in, None);
	}

	#[test]
	fn continue_session_resumes_from_report() {
		let invocation = SessionInvocation::new(1, "/exp/report.json", SessionMode::Continue);
		assert_eq!(
			strings(&invocation),
			vec![
				"session",
				"--enable-cuda",
				"--device-idx=1",
				"--reportin=/exp/report.json",
				"/exp/report.json",
				"CONTINUE",
			]
		);
	}

	#[test]
	fn test_best_reads_and_writes_same_report() {
		let invocation = SessionInvocation::test_best(3, "/exp/report.json");
		assert_eq!(invocation.mode, SessionMode::TestBest);
		assert_eq!(invocation.report_in.as_deref(), Some(invocation.report_path.as_path()));
		assert_eq!(
			invocation.display_args(),
			"session --enable-cuda --device-idx=3 --reportin=/exp/report.json /exp/report.json TEST_BEST"
		);
	}

	#[test]
	fn negative_device_index_is_forwarded_verbatim() {
		let invocation = SessionInvocation::new(-1, "r.json", SessionMode::New);
		assert_eq!(strings(&invocation)[2], "--device-idx=-1");
	}
}
