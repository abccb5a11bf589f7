//! The upstream [rate feed](RateFeed) and its [HTTP implementation](NbpClient).

use std::{
	fmt::{self, Display, Formatter},
	sync::Arc,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::{header::ACCEPT, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{config::FeedConfig, error::FeedError, quotation::QuotationSeries, url, Currency};

/// An NBP rate table.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize)]
pub enum Table {
	/// Average rates of the major currencies, published every business day.
	A,
	/// Average rates of the remaining currencies, published weekly.
	B,
	/// Bid and ask rates.
	C,
}

impl Table {
	/// The table identifier as it appears in URLs.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::A => "A",
			Self::B => "B",
			Self::C => "C",
		}
	}
}

impl Display for Table {
	#[inline] fn fmt(&self, f: &mut Formatter) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Which quotations of a table to fetch.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
	/// The quotation published on the date.
	Date(NaiveDate),
	/// The given count of most recent quotations.
	Last(u16),
}

/// A fully formed feed request.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
pub struct FeedRequest {
	/// The table to read.
	pub table: Table,
	/// The quoted currency.
	pub currency: Currency,
	/// The quotations to read.
	pub selector: Selector,
}

impl FeedRequest {
	/// Creates a new [`FeedRequest`].
	pub const fn new(table: Table, currency: Currency, selector: Selector) -> Self {
		Self { table, currency, selector }
	}

	/// The URL of the request under the given API root.
	pub fn url(&self, base_url: &str) -> String {
		url::rates_url(base_url, self)
	}
}

/// A source of quotation series.
///
/// Implementations perform one upstream call per [`fetch`](RateFeed::fetch) and must not
/// retry or cache.
#[async_trait]
pub trait RateFeed: Send + Sync {
	/// Fetches the series addressed by `request`.
	///
	/// Returns `Ok(None)` when the call succeeded but carried no series.
	async fn fetch(&self, request: &FeedRequest) -> Result<Option<QuotationSeries>, FeedError>;
}

#[async_trait]
impl<T: RateFeed + ?Sized> RateFeed for Arc<T> {
	async fn fetch(&self, request: &FeedRequest) -> Result<Option<QuotationSeries>, FeedError> {
		(**self).fetch(request).await
	}
}

/// [`RateFeed`] over the [NBP Web API](https://api.nbp.pl/en.html).
///
/// # Examples
/// ```no_run
/// # use nbprates::{FeedConfig, NbpClient};
/// let client = NbpClient::new(FeedConfig::from_env())?;
/// # Ok::<(), nbprates::FeedError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NbpClient {
	client: reqwest::Client,
	config: FeedConfig,
}

impl NbpClient {
	/// Creates a new [`NbpClient`], building its HTTP client from `config`.
	///
	/// # Errors
	/// [`FeedError::Http`] if the HTTP client cannot be built.
	pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
		let client = reqwest::Client::builder()
			.timeout(config.timeout)
			.user_agent(config.user_agent.as_str())
			.build()?;
		Ok(Self { client, config })
	}

	/// Creates a new [`NbpClient`] over an existing HTTP client.
	///
	/// Only [`FeedConfig::base_url`] is used; timeouts are the client's.
	pub fn with_client(client: reqwest::Client, config: FeedConfig) -> Self {
		Self { client, config }
	}

	/// Gets the configuration.
	#[inline] pub fn config(&self) -> &FeedConfig { &self.config }
}

#[async_trait]
impl RateFeed for NbpClient {
	async fn fetch(&self, request: &FeedRequest) -> Result<Option<QuotationSeries>, FeedError> {
		let url = request.url(&self.config.base_url);
		debug!("Fetching {url}");
		let response = self.client.get(&url).header(ACCEPT, "application/json").send().await?;

		let status = response.status();
		// NBP answers 404 for dates and windows without any publication.
		if status == StatusCode::NOT_FOUND {
			warn!("No data for {} {} {:?}", request.table, request.currency, request.selector);
			return Ok(None);
		}
		if !status.is_success() {
			warn!("Feed answered {status} for {url}");
			return Err(FeedError::Status(status));
		}

		let body = response.bytes().await?;
		if body.iter().all(u8::is_ascii_whitespace) {
			warn!("Feed answered an empty body for {url}");
			return Ok(None);
		}
		Ok(Some(serde_json::from_slice(&body)?))
	}
}
