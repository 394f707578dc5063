use anyhow::{Context, Result};
use std::{fmt, io::Write};

use crate::{
	config::ReleaseConfig,
	docker::{Captured, Error, Executor, Invocation},
	image::ImageRef,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	Build,
	Push,
}

/// One runtime call in a release, bound to the image it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
	pub action: Action,
	pub image: ImageRef,
	pub invocation: Invocation,
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.action {
			Action::Build => write!(f, "build of {}", self.image),
			Action::Push => write!(f, "push of {}", self.image),
		}
	}
}

#[derive(Debug)]
pub struct StepOutcome {
	pub step: Step,
	pub result: Result<(), Error>,
}

#[derive(Debug, Default)]
pub struct Report {
	pub steps: Vec<StepOutcome>,
}

impl Report {
	pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
		self.steps.iter().filter(|outcome| outcome.result.is_err())
	}
}

/// Builds and pushes the coordinator images, one blocking call at a time.
pub struct Release {
	steps: Vec<Step>,
	strict: bool,
}

impl Release {
	pub fn new(config: &ReleaseConfig) -> Self {
		let mut steps = Self::image_steps(&config.runtime, config.service_image(), &config.service_path);

		if config.include_client {
			steps.extend(Self::image_steps(
				&config.runtime,
				config.client_image(),
				&config.client_path,
			));
		}

		Self {
			steps,
			strict: config.strict,
		}
	}

	fn image_steps(runtime: &str, image: ImageRef, context: &str) -> Vec<Step> {
		vec![
			Step {
				action: Action::Build,
				invocation: Invocation::build(runtime, &image, context),
				image: image.clone(),
			},
			Step {
				action: Action::Push,
				invocation: Invocation::push(runtime, &image),
				image,
			},
		]
	}

	#[must_use]
	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	/// Run every step in order, echoing each command and its captured output to `out`.
	///
	/// A failing step is recorded and the next one still runs, unless the release is strict.
	///
	/// # Errors
	///
	/// Returns an error if writing to `out` fails, or, in strict mode, for the first failing step.
	pub fn run<E: Executor, W: Write>(self, executor: &mut E, out: &mut W) -> Result<Report> {
		let mut report = Report::default();

		for step in self.steps {
			writeln!(out, "Running Command: {}", step.invocation)?;

			let result = match executor.execute(&step.invocation) {
				Ok(captured) => {
					echo(out, &captured)?;
					captured.check(&step.invocation)
				},
				Err(e) => Err(e),
			};

			match &result {
				Ok(()) => tracing::debug!("{step} succeeded"),
				Err(Error::Spawn(e)) => tracing::error!("{step} could not start: {e}"),
				Err(e) => tracing::warn!("{step} failed: {e}"),
			}

			if self.strict {
				if let Err(e) = result {
					return Err(e).with_context(|| format!("Release aborted: {step} failed"));
				}
			}

			report.steps.push(StepOutcome { step, result });
		}

		Ok(report)
	}
}

fn echo<W: Write>(out: &mut W, captured: &Captured) -> std::io::Result<()> {
	if !captured.stderr.is_empty() {
		writeln!(out, "{}", String::from_utf8_lossy(&captured.stderr))?;
	}

	if !captured.stdout.is_empty() {
		writeln!(out, "{}", String::from_utf8_lossy(&captured.stdout))?;
	}

	Ok(())
}
