//! Environment block handed to every session-runner child.
//!
//! The block is a copy of the ambient process environment with the entries of
//! a `NAME=VALUE` file laid over it. The running process's own environment is
//! never touched.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Immutable environment mapping for child processes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentBlock {
	vars: BTreeMap<OsString, OsString>,
}

impl EnvironmentBlock {
	/// Lays `overrides` over `ambient` in order; later entries win, including
	/// over ambient values.
	pub fn overlay<A, K, V, O>(ambient: A, overrides: O) -> Self
	where
		A: IntoIterator<Item = (OsString, OsString)>,
		O: IntoIterator<Item = (K, V)>,
		K: Into<OsString>,
		V: Into<OsString>,
	{
		let mut vars: BTreeMap<OsString, OsString> = ambient.into_iter().collect();
		for (name, value) in overrides {
			vars.insert(name.into(), value.into());
		}
		Self { vars }
	}

	pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&OsStr> {
		self.vars.get(name.as_ref()).map(OsString::as_os_str)
	}

	pub fn len(&self) -> usize {
		self.vars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vars.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
		self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
	}
}

/// Snapshots the ambient environment and overlays the entries of `path`.
pub fn load_environment(path: &Path) -> Result<EnvironmentBlock> {
	let overrides = parse_env_file(path)?;
	debug!(
		path = %path.display(),
		entries = overrides.len(),
		"loaded environment file"
	);
	Ok(EnvironmentBlock::overlay(std::env::vars_os(), overrides))
}

/// Reads `NAME=VALUE` pairs from `path`, in file order.
pub fn parse_env_file(path: &Path) -> Result<Vec<(String, String)>> {
	let contents = std::fs::read_to_string(path).map_err(|source| Error::EnvFileRead {
		path: path.to_path_buf(),
		source,
	})?;
	parse_env_str(&contents, path)
}

/// Parses environment-file `contents`; `path` is only used in errors.
///
/// Each line is stripped of surrounding whitespace and must then split on `=`
/// into exactly two fields. Blank lines are skipped.
pub fn parse_env_str(contents: &str, path: &Path) -> Result<Vec<(String, String)>> {
	let mut pairs = Vec::new();
	for (idx, raw) in contents.lines().enumerate() {
		let line = raw.trim();
		if line.is_empty() {
			continue;
		}

		let mut fields = line.split('=');
		let (Some(name), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
			return Err(Error::MalformedEnvLine {
				path: path.to_path_buf(),
				line: idx + 1,
				content: line.to_string(),
			});
		};
		pairs.push((name.to_string(), value.to_string()));
	}
	Ok(pairs)
}
