use anyhow::Result;
use clap::Subcommand;

mod release_docker;

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Build the coordinator service image and push it to a registry
	ReleaseDocker(release_docker::ReleaseArgs),
}

pub fn exec(command: Command) -> Result<()> {
	match command {
		Command::ReleaseDocker(args) => release_docker::handle(args),
	}
}
