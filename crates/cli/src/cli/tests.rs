use clap::Parser;
use clap::error::ErrorKind;

use super::*;

#[test]
fn parse_device_index() {
	let cli = Cli::try_parse_from(["sysid-sweep", "2"]).unwrap();
	assert_eq!(cli.device, 2);
}

#[test]
fn negative_device_is_a_number_not_a_flag() {
	let cli = Cli::try_parse_from(["sysid-sweep", "-1"]).unwrap();
	assert_eq!(cli.device, -1);
}

#[test]
fn device_is_required() {
	let err = Cli::try_parse_from(["sysid-sweep"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn device_must_be_an_integer() {
	let err = Cli::try_parse_from(["sysid-sweep", "gpu0"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn extra_positional_is_rejected() {
	let err = Cli::try_parse_from(["sysid-sweep", "0", "1"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn unknown_flag_is_rejected() {
	let err = Cli::try_parse_from(["sysid-sweep", "--enable-cuda", "0"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}
