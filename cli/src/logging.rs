use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` takes precedence over `debug`.
///
/// Logs go to stderr so stdout only carries the echoed commands and their output.
pub fn init(debug: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(if debug {
			"coordinator_release=debug"
		} else {
			"warn"
		})
	});

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false)
				.compact(),
		)
		.try_init();
}
