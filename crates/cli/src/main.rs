use clap::Parser;
use sweep_cli::{cli::Cli, commands, error::SweepError, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging();

	if let Err(err) = commands::dispatch(cli).await {
		handle_error(&err);
		std::process::exit(1);
	}
}

fn handle_error(err: &SweepError) {
	eprintln!("Error [{}]: {}", err.code(), err);
}
