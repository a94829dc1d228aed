//! Top-level run: layout, environment, runner, session.

use sweep_runtime::{ProcessRunner, load_environment, run_full_session};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::Result;
use crate::layout::ExperimentLayout;

/// Runs one sweep for `cli.device`.
///
/// Layout, environment and runner are all settled before the first child is
/// launched.
pub async fn dispatch(cli: Cli) -> Result<()> {
	let layout = ExperimentLayout::resolve()?;
	let env = load_environment(&layout.environment_path)?;
	let runner = ProcessRunner::resolve(&env)?;

	debug!(
		device_idx = cli.device,
		report = %layout.report_path.display(),
		runner = %runner.program().display(),
		env_vars = env.len(),
		"starting sweep"
	);

	let outcome = run_full_session(&runner, &layout.report_path, cli.device, &env).await?;
	info!(
		primary = %outcome.primary_mode,
		test_best_exit_code = outcome.test_best_exit_code,
		"sweep finished"
	);
	Ok(())
}
