//! [`RateService`]

use chrono::NaiveDate;
use log::{debug, warn};

use crate::{
	feed::{FeedRequest, RateFeed, Selector, Table},
	quotation::QuotationSeries,
	rates::{self, AverageRate, BidAskSpread, MinMaxAverage},
	Currency, Error,
};

/// Exchange rate analytics over a [`RateFeed`].
///
/// Every operation resolves the currency first, then makes exactly one feed call. Nothing is
/// cached between calls, so a service can be shared freely across tasks.
///
/// # Examples
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use nbprates::{FeedConfig, NbpClient, RateService};
///
/// let service = RateService::new(NbpClient::new(FeedConfig::default())?);
/// let spread = service.get_max_bid_ask_spread("EUR", 30).await?;
/// println!("{} {} on {}", spread.currency, spread.spread, spread.date);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RateService<F> {
	feed: F,
}

impl<F: RateFeed> RateService<F> {
	/// Creates a new [`RateService`].
	pub const fn new(feed: F) -> Self { Self { feed } }

	/// Gets the feed.
	#[inline] pub fn feed(&self) -> &F { &self.feed }

	/// Gets the average rate of the currency published on `date`.
	///
	/// There is no fallback to an adjacent date when nothing was published on `date`.
	///
	/// # Errors
	/// - [`Error::InvalidCurrencyCode`] if `code` is not supported; the feed is not called.
	/// - [`Error::EmptyUpstreamResult`] if nothing was published on `date`.
	/// - [`Error::UpstreamUnavailable`] if the feed failed.
	pub async fn get_average_rate(&self, code: &str, date: NaiveDate) -> Result<AverageRate, Error> {
		let currency = Currency::resolve(code)?;
		let series = self.fetch(FeedRequest::new(Table::A, currency, Selector::Date(date))).await?;
		let quotation = series.quotations.first().ok_or(Error::EmptyUpstreamResult)?;
		let rate = AverageRate {
			currency,
			currency_name: currency.description(),
			date,
			average_exchange_rate: quotation.mid_rate()?,
		};
		debug!("Average {currency} rate on {date}: {}", rate.average_exchange_rate);
		Ok(rate)
	}

	/// Gets the lowest and highest average rates over the last `count` quotations.
	///
	/// # Errors
	/// - [`Error::InvalidCurrencyCode`] if `code` is not supported; the feed is not called.
	/// - [`Error::EmptyUpstreamResult`] if the feed returned no quotation.
	/// - [`Error::UpstreamUnavailable`] if the feed failed.
	pub async fn get_min_max_average(&self, code: &str, count: u16) -> Result<MinMaxAverage, Error> {
		let currency = Currency::resolve(code)?;
		let series = self.fetch(FeedRequest::new(Table::B, currency, Selector::Last(count))).await?;
		let (min, max) = rates::min_max_mid(&series.quotations)?;
		debug!("{currency} average over {} quotations: min {min}, max {max}", series.quotations.len());
		Ok(MinMaxAverage { currency, currency_name: currency.description(), min, max })
	}

	/// Gets the largest bid/ask spread over the last `count` quotations.
	///
	/// When several quotations share the largest spread, the latest in feed order wins.
	///
	/// # Errors
	/// - [`Error::InvalidCurrencyCode`] if `code` is not supported; the feed is not called.
	/// - [`Error::EmptyUpstreamResult`] if the feed returned no quotation.
	/// - [`Error::UpstreamUnavailable`] if the feed failed.
	pub async fn get_max_bid_ask_spread(&self, code: &str, count: u16) -> Result<BidAskSpread, Error> {
		let currency = Currency::resolve(code)?;
		let series = self.fetch(FeedRequest::new(Table::C, currency, Selector::Last(count))).await?;
		let (quotation, spread) = rates::max_spread(&series.quotations)?;
		debug!("{currency} widest spread over {} quotations: {spread} on {}", series.quotations.len(), quotation.effective_date);
		Ok(BidAskSpread {
			currency,
			currency_name: currency.description(),
			date: quotation.effective_date,
			spread,
		})
	}

	/// Makes the single feed call of an operation, rejecting series without quotations.
	async fn fetch(&self, request: FeedRequest) -> Result<QuotationSeries, Error> {
		match self.feed.fetch(&request).await? {
			Some(series) if !series.is_empty() => Ok(series),
			_ => {
				warn!("No quotations for {} {} {:?}", request.table, request.currency, request.selector);
				Err(Error::EmptyUpstreamResult)
			}
		}
	}
}
