mod invocation;

use std::process::{Command, ExitStatus, Stdio};

pub use invocation::Invocation;

/// Errors that can occur when interacting with the container runtime.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to run command: {0}")]
	Spawn(#[from] std::io::Error),

	#[error("`{command}` exited with status {status}")]
	Failed { command: String, status: i32 },

	#[error("`{command}` was terminated by a signal")]
	Signal { command: String },
}

/// The fully captured result of a finished runtime call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
	pub status: Option<i32>,
	pub success: bool,
	pub stdout: Vec<u8>,
	pub stderr: Vec<u8>,
}

impl Captured {
	fn from_output(status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
		Self {
			status: status.code(),
			success: status.success(),
			stdout,
			stderr,
		}
	}

	/// Turn an unsuccessful exit into an error for `invocation`.
	///
	/// # Errors
	///
	/// Returns an error if the process exited non-zero or was killed by a signal.
	pub fn check(&self, invocation: &Invocation) -> Result<(), Error> {
		if self.success {
			return Ok(());
		}

		let command = invocation.to_string();
		Err(self
			.status
			.map_or(Error::Signal { command: command.clone() }, |status| {
				Error::Failed { command, status }
			}))
	}
}

/// Runs invocations to completion.
pub trait Executor {
	/// Run `invocation`, blocking until it exits.
	///
	/// # Errors
	///
	/// Returns an error if the process could not be started.
	fn execute(&mut self, invocation: &Invocation) -> Result<Captured, Error>;
}

/// A wrapper around the container runtime CLI.
#[derive(Debug, Default)]
pub struct Docker {}

impl Executor for Docker {
	fn execute(&mut self, invocation: &Invocation) -> Result<Captured, Error> {
		tracing::debug!(program = %invocation.program, args = ?invocation.args, "spawning");

		let output = Command::new(&invocation.program)
			.args(&invocation.args)
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.output()?;

		tracing::debug!(status = ?output.status.code(), "process exited");

		Ok(Captured::from_output(output.status, output.stdout, output.stderr))
	}
}
