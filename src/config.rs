//! [`FeedConfig`]

use std::time::Duration;

use log::warn;

/// The public NBP Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.nbp.pl/api";
/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding [`FeedConfig::base_url`].
pub const ENV_BASE_URL: &str = "NBP_API_URL";
/// Environment variable overriding [`FeedConfig::timeout`], in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "NBP_TIMEOUT_SECS";

/// Settings of the [HTTP feed](crate::feed::NbpClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
	/// The API root, without the `/exchangerates` path.
	pub base_url: String,
	/// The timeout of a whole request, connection included.
	///
	/// This is the only bound on how long an operation may wait for the feed.
	pub timeout: Duration,
	/// The `User-Agent` header.
	pub user_agent: String,
}

impl Default for FeedConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_owned(),
			timeout: DEFAULT_TIMEOUT,
			user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
		}
	}
}

impl FeedConfig {
	/// Creates the default configuration overridden by the [`ENV_BASE_URL`] and
	/// [`ENV_TIMEOUT_SECS`] environment variables.
	pub fn from_env() -> Self {
		Self::from_vars(|name| std::env::var(name).ok())
	}

	fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
		let mut config = Self::default();
		if let Some(base_url) = var(ENV_BASE_URL).filter(|url| !url.is_empty()) {
			config.base_url = base_url;
		}
		if let Some(timeout) = var(ENV_TIMEOUT_SECS) {
			match timeout.parse::<u64>() {
				Ok(secs) => config.timeout = Duration::from_secs(secs),
				Err(_) => warn!("Ignoring {ENV_TIMEOUT_SECS}={timeout:?}, using {}s", DEFAULT_TIMEOUT.as_secs()),
			}
		}
		config
	}

	/// Sets the [`base_url`](FeedConfig::base_url).
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets the [`timeout`](FeedConfig::timeout).
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}
