use std::fmt;

use crate::image::ImageRef;

/// A container-runtime call as a structured argument list.
///
/// Nothing here goes through a shell; `Display` only renders the line that gets
/// printed before the call runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
	pub program: String,
	pub args: Vec<String>,
}

impl Invocation {
	pub fn new(program: &str) -> Self {
		Self {
			program: program.to_string(),
			args: Vec::new(),
		}
	}

	#[must_use]
	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.args.push(arg.into());
		self
	}

	/// `{runtime} build -f {context}/Dockerfile -t {image} {context}`
	pub fn build(runtime: &str, image: &ImageRef, context: &str) -> Self {
		Self::new(runtime)
			.arg("build")
			.arg("-f")
			.arg(format!("{context}/Dockerfile"))
			.arg("-t")
			.arg(image.to_string())
			.arg(context)
	}

	/// `{runtime} push {image}`
	pub fn push(runtime: &str, image: &ImageRef) -> Self {
		Self::new(runtime).arg("push").arg(image.to_string())
	}
}

impl fmt::Display for Invocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.program)?;

		for arg in &self.args {
			write!(f, " {arg}")?;
		}

		Ok(())
	}
}
