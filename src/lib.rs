//! Exchange rate analytics over the [NBP](https://api.nbp.pl/en.html) rate tables.
//!
//! [`RateService`] answers three questions about a [`Currency`]:
//! - its [average rate](RateService::get_average_rate) on a date,
//! - its [lowest and highest average rates](RateService::get_min_max_average) over the most recent
//!   quotations,
//! - its [largest bid/ask spread](RateService::get_max_bid_ask_spread) over the most recent
//!   quotations.
//!
//! Each answer costs exactly one call to a [`RateFeed`]; [`NbpClient`] is the HTTP one.

#![deny(missing_docs)]

pub mod config;
pub mod currency;
pub mod error;
pub mod feed;
pub mod quotation;
pub mod rates;
mod scientific;
pub mod service;
mod url;

pub use config::FeedConfig;
pub use currency::Currency;
pub use error::{Error, FeedError};
pub use feed::{FeedRequest, NbpClient, RateFeed, Selector, Table};
pub use quotation::{Quotation, QuotationSeries};
pub use rates::{AverageRate, BidAskSpread, MinMaxAverage};
pub use service::RateService;
