//! [`Error`] types.

use reqwest::StatusCode;

/// An error from a rate service operation.
///
/// Every variant is terminal for the request it occurred in; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The currency code is empty or not in the [registry](crate::Currency).
	#[error("wrong currency code: {0}")]
	InvalidCurrencyCode(String),
	/// The feed answered without any quotation.
	#[error("cannot get exchange rate response from received data")]
	EmptyUpstreamResult,
	/// The feed could not be reached or answered with something unusable.
	#[error("exchange rate feed unavailable: {0}")]
	UpstreamUnavailable(#[from] FeedError),
}

impl Error {
	/// Whether the error was caused by the caller's input rather than by the feed.
	///
	/// A presentation layer maps client errors to a client-side status and the rest to a
	/// server-side one.
	pub fn is_client_error(&self) -> bool {
		matches!(self, Self::InvalidCurrencyCode(_))
	}
}

/// An error from the [feed](crate::feed::RateFeed) transport.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
	/// HTTP error.
	#[error("http error: {0}")]
	Http(#[from] reqwest::Error),
	/// The feed answered with an unsuccessful status.
	#[error("unexpected response status: {0}")]
	Status(StatusCode),
	/// Failed to parse the response.
	#[error("failed to parse the response: {0}")]
	ResponseParse(#[from] serde_json::Error),
	/// A quotation lacks the rate the requested table should carry.
	#[error("quotation {sequence_number} has no {field} rate")]
	MissingRate {
		/// The missing field.
		field: &'static str,
		/// The quotation's sequence number.
		sequence_number: String,
	},
}
