use std::fmt;

/// Session step requested from the runner.
///
/// `New` and `Continue` are the primary step, chosen from whether a report
/// already exists. `TestBest` always follows a successful primary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionMode {
	/// Start a fresh grid search and write a new report.
	New,
	/// Resume the grid search recorded in an existing report.
	Continue,
	/// Evaluate the best configuration recorded in the report.
	TestBest,
}

impl SessionMode {
	/// Positional mode argument understood by the runner.
	pub fn as_str(self) -> &'static str {
		match self {
			SessionMode::New => "NEW",
			SessionMode::Continue => "CONTINUE",
			SessionMode::TestBest => "TEST_BEST",
		}
	}

	/// Whether the runner must be handed the existing report via `--reportin`.
	pub fn reads_report(self) -> bool {
		!matches!(self, SessionMode::New)
	}
}

impl fmt::Display for SessionMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
