use std::fmt;

/// A fully qualified image reference in the form `{repo}/{name}:{tag}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
	pub repo: String,
	pub name: String,
	pub tag: String,
}

impl ImageRef {
	pub fn new(repo: &str, name: &str, tag: &str) -> Self {
		Self {
			repo: repo.to_string(),
			name: name.to_string(),
			tag: tag.to_string(),
		}
	}
}

impl fmt::Display for ImageRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}:{}", self.repo, self.name, self.tag)
	}
}
