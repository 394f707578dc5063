#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod docker;
mod image;
mod logging;
mod release;

#[derive(Parser)]
#[clap(version, about)]
struct Cli {
	/// Turn on debug logging
	#[clap(long, overrides_with = "no_debug")]
	debug: bool,

	/// Turn off debug logging (default)
	#[clap(long, overrides_with = "debug")]
	no_debug: bool,

	#[clap(subcommand)]
	command: commands::Command,
}

impl Cli {
	const fn debug(&self) -> bool {
		self.debug && !self.no_debug
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	let debug = cli.debug();

	logging::init(debug);
	println!("Debug mode is {}", if debug { "on" } else { "off" });

	commands::exec(cli.command)
}
