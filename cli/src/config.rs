use crate::image::ImageRef;

pub const DEFAULT_REPO: &str = "us.gcr.io/celo-testnet";
pub const DEFAULT_TAG: &str = "test";
pub const DEFAULT_CLIENT_PATH: &str = "./coordinator-client";
pub const DEFAULT_SERVICE_PATH: &str = "./coordinator-service";
pub const DEFAULT_RUNTIME: &str = "docker";

pub const SERVICE_IMAGE: &str = "coordinator-service";
pub const CLIENT_IMAGE: &str = "coordinator-client";

/// Resolved options for a single `release-docker` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
	pub repo: String,
	pub tag: String,
	pub client_path: String,
	pub service_path: String,
	pub runtime: String,
	pub strict: bool,
	pub include_client: bool,
}

impl Default for ReleaseConfig {
	fn default() -> Self {
		Self {
			repo: DEFAULT_REPO.to_string(),
			tag: DEFAULT_TAG.to_string(),
			client_path: DEFAULT_CLIENT_PATH.to_string(),
			service_path: DEFAULT_SERVICE_PATH.to_string(),
			runtime: DEFAULT_RUNTIME.to_string(),
			strict: false,
			include_client: false,
		}
	}
}

impl ReleaseConfig {
	#[must_use]
	pub fn service_image(&self) -> ImageRef {
		ImageRef::new(&self.repo, SERVICE_IMAGE, &self.tag)
	}

	#[must_use]
	pub fn client_image(&self) -> ImageRef {
		ImageRef::new(&self.repo, CLIENT_IMAGE, &self.tag)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_images() {
		let config = ReleaseConfig::default();

		assert_eq!(
			config.service_image().to_string(),
			"us.gcr.io/celo-testnet/coordinator-service:test"
		);
		assert_eq!(
			config.client_image().to_string(),
			"us.gcr.io/celo-testnet/coordinator-client:test"
		);
	}

	#[test]
	fn test_images_follow_repo_and_tag() {
		let config = ReleaseConfig {
			repo: "ghcr.io/acme".to_string(),
			tag: "v2".to_string(),
			..ReleaseConfig::default()
		};

		assert_eq!(config.service_image().to_string(), "ghcr.io/acme/coordinator-service:v2");
	}
}
