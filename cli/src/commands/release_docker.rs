use anyhow::Result;
use clap::Args;
use std::io;

use crate::{
	config::{
		ReleaseConfig, DEFAULT_CLIENT_PATH, DEFAULT_REPO, DEFAULT_RUNTIME, DEFAULT_SERVICE_PATH,
		DEFAULT_TAG,
	},
	docker::Docker,
	release::Release,
};

#[derive(Debug, Args)]
pub struct ReleaseArgs {
	/// Registry and namespace the images are pushed to
	#[clap(long, env = "RELEASE_REPO", default_value = DEFAULT_REPO)]
	repo: String,

	/// Tag applied to the built images
	#[clap(long, env = "RELEASE_TAG", default_value = DEFAULT_TAG)]
	tag: String,

	/// Build context of the coordinator client. Only used with --include-client
	#[clap(long, env = "RELEASE_CLIENT_PATH", default_value = DEFAULT_CLIENT_PATH)]
	client_path: String,

	/// Build context of the coordinator service, containing its Dockerfile
	#[clap(long, env = "RELEASE_SERVICE_PATH", default_value = DEFAULT_SERVICE_PATH)]
	service_path: String,

	/// Container runtime binary to invoke
	#[clap(long, env = "RELEASE_RUNTIME", default_value = DEFAULT_RUNTIME)]
	runtime: String,

	/// Stop at the first build or push that fails and exit non-zero
	#[clap(long)]
	strict: bool,

	/// Also build and push the coordinator client image
	#[clap(long)]
	include_client: bool,
}

impl From<ReleaseArgs> for ReleaseConfig {
	fn from(args: ReleaseArgs) -> Self {
		Self {
			repo: args.repo,
			tag: args.tag,
			client_path: args.client_path,
			service_path: args.service_path,
			runtime: args.runtime,
			strict: args.strict,
			include_client: args.include_client,
		}
	}
}

pub fn handle(args: ReleaseArgs) -> Result<()> {
	let config = ReleaseConfig::from(args);
	tracing::debug!(?config, "starting release");

	let report = Release::new(&config).run(&mut Docker::default(), &mut io::stdout().lock())?;

	let failed = report.failures().count();
	if failed > 0 {
		tracing::warn!("{failed} of {} steps failed", report.steps.len());
	}

	Ok(())
}
