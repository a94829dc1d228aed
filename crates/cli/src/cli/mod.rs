#[cfg(test)]
mod tests;

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;

/// Root CLI for sysid-sweep.
#[derive(Parser, Debug)]
#[command(name = "sysid-sweep")]
#[command(about = "Run the 4-DOF ship in-distribution grid search through deepsysid")]
#[command(version)]
#[command(styles = help_styles())]
pub struct Cli {
	/// Compute device index forwarded to the session runner
	#[arg(value_name = "DEVICE", allow_negative_numbers = true)]
	pub device: i64,
}

/// Cargo-like help colours.
fn help_styles() -> Styles {
	let accent = AnsiColor::Cyan.on_default();
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(accent)
		.placeholder(accent)
		.valid(accent)
}
