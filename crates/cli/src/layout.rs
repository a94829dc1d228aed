//! Experiment directory layout.
//!
//! An experiment root holds the session report under `configuration/` and the
//! runner environment under `environment/`:
//!
//! ```text
//! <root>/
//!   configuration/progress-ship.json
//!   environment/ship-ind.env
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::error::Result;

/// Environment variable selecting the experiment root.
pub const ROOT_ENV: &str = "SYSID_SWEEP_ROOT";

pub const CONFIGURATION_DIR: &str = "configuration";
pub const ENVIRONMENT_DIR: &str = "environment";
pub const REPORT_FILE: &str = "progress-ship.json";
pub const ENVIRONMENT_FILE: &str = "ship-ind.env";

/// Paths used by one sweep run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentLayout {
	pub root: PathBuf,
	/// Session report, owned by the runner
	pub report_path: PathBuf,
	/// `NAME=VALUE` file applied to the runner environment
	pub environment_path: PathBuf,
}

impl ExperimentLayout {
	pub fn from_root(root: impl Into<PathBuf>) -> Self {
		let root = root.into();
		Self {
			report_path: root.join(CONFIGURATION_DIR).join(REPORT_FILE),
			environment_path: root.join(ENVIRONMENT_DIR).join(ENVIRONMENT_FILE),
			root,
		}
	}

	/// Root from [`ROOT_ENV`], falling back to the directory above the one
	/// holding the executable (`<root>/bin/sysid-sweep`).
	pub fn resolve() -> Result<Self> {
		let cwd = std::env::current_dir().context("failed to determine the current directory")?;
		let exe = std::env::current_exe().ok();
		let layout = Self::resolve_from(std::env::var_os(ROOT_ENV), exe.as_deref(), &cwd);
		debug!(root = %layout.root.display(), "resolved experiment layout");
		Ok(layout)
	}

	/// Relative overrides are taken relative to `cwd`; an empty override is
	/// ignored. Without an override the root is the executable's grandparent,
	/// or `cwd` when the executable path has none.
	pub fn resolve_from(root_override: Option<OsString>, exe: Option<&Path>, cwd: &Path) -> Self {
		if let Some(value) = root_override.filter(|value| !value.is_empty()) {
			return Self::from_root(cwd.join(value));
		}

		let exe_root = exe.and_then(Path::parent).and_then(Path::parent);
		match exe_root {
			Some(root) if !root.as_os_str().is_empty() => Self::from_root(root),
			_ => Self::from_root(cwd),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EXE: &str = "/exp/ship/bin/sysid-sweep";

	#[test]
	fn paths_hang_off_the_root() {
		let layout = ExperimentLayout::from_root("/exp/ship");
		assert_eq!(layout.report_path, PathBuf::from("/exp/ship/configuration/progress-ship.json"));
		assert_eq!(layout.environment_path, PathBuf::from("/exp/ship/environment/ship-ind.env"));
	}

	#[test]
	fn defaults_to_executable_grandparent() {
		let layout = ExperimentLayout::resolve_from(None, Some(Path::new(EXE)), Path::new("/work"));
		assert_eq!(layout.root, PathBuf::from("/exp/ship"));
		assert_eq!(layout.report_path, PathBuf::from("/exp/ship/configuration/progress-ship.json"));
	}

	#[test]
	fn working_directory_does_not_move_the_default_root() {
		let a = ExperimentLayout::resolve_from(None, Some(Path::new(EXE)), Path::new("/work"));
		let b = ExperimentLayout::resolve_from(None, Some(Path::new(EXE)), Path::new("/elsewhere"));
		assert_eq!(a, b);
	}

	#[test]
	fn falls_back_to_cwd_without_executable_path() {
		let layout = ExperimentLayout::resolve_from(None, None, Path::new("/work"));
		assert_eq!(layout.root, PathBuf::from("/work"));

		let layout = ExperimentLayout::resolve_from(None, Some(Path::new("sysid-sweep")), Path::new("/work"));
		assert_eq!(layout.root, PathBuf::from("/work"));
	}

	#[test]
	fn absolute_override_wins() {
		let layout = ExperimentLayout::resolve_from(Some("/data/exp".into()), Some(Path::new(EXE)), Path::new("/work"));
		assert_eq!(layout.root, PathBuf::from("/data/exp"));
	}

	#[test]
	fn relative_override_is_joined_to_cwd() {
		let layout = ExperimentLayout::resolve_from(Some("runs/ship".into()), Some(Path::new(EXE)), Path::new("/work"));
		assert_eq!(layout.root, PathBuf::from("/work/runs/ship"));
	}

	#[test]
	fn empty_override_is_ignored() {
		let layout = ExperimentLayout::resolve_from(Some(OsString::new()), Some(Path::new(EXE)), Path::new("/work"));
		assert_eq!(layout.root, PathBuf::from("/exp/ship"));
	}
}
