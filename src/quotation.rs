//! Quotations as published by the [rate feed](crate::feed).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{error::FeedError, feed::Table, scientific::deserialize_opt_decimal};

/// One published rate record.
///
/// Average tables (A, B) carry [`mid`](Self::mid) only, the bid/ask table (C) carries
/// [`bid`](Self::bid) and [`ask`](Self::ask) only. `ask >= bid` is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
	/// The table number the quotation was published in, e.g. `080/A/NBP/2023`.
	#[serde(rename = "no")]
	pub sequence_number: String,
	/// The publication date.
	pub effective_date: NaiveDate,
	/// The average rate.
	#[serde(default, deserialize_with = "deserialize_opt_decimal", skip_serializing_if = "Option::is_none")]
	pub mid: Option<Decimal>,
	/// The buy rate.
	#[serde(default, deserialize_with = "deserialize_opt_decimal", skip_serializing_if = "Option::is_none")]
	pub bid: Option<Decimal>,
	/// The sell rate.
	#[serde(default, deserialize_with = "deserialize_opt_decimal", skip_serializing_if = "Option::is_none")]
	pub ask: Option<Decimal>,
}

impl Quotation {
	/// Gets the average rate.
	///
	/// # Errors
	/// [`FeedError::MissingRate`] if the quotation has no average rate.
	pub fn mid_rate(&self) -> Result<Decimal, FeedError> {
		self.mid.ok_or_else(|| self.missing("mid"))
	}

	/// Gets the bid/ask spread, `ask - bid`, with its sign.
	///
	/// # Errors
	/// [`FeedError::MissingRate`] if the quotation lacks either rate.
	pub fn spread(&self) -> Result<Decimal, FeedError> {
		let bid = self.bid.ok_or_else(|| self.missing("bid"))?;
		let ask = self.ask.ok_or_else(|| self.missing("ask"))?;
		Ok(ask - bid)
	}

	fn missing(&self, field: &'static str) -> FeedError {
		FeedError::MissingRate { field, sequence_number: self.sequence_number.clone() }
	}
}

/// The quotations returned by one feed call, in feed order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuotationSeries {
	/// The table the quotations come from.
	pub table: Table,
	/// The currency name as the feed spells it.
	#[serde(default)]
	pub currency: String,
	/// The currency code as the feed returned it.
	pub code: String,
	/// The quotations.
	#[serde(rename = "rates", default)]
	pub quotations: Vec<Quotation>,
}

impl QuotationSeries {
	/// Whether the series has no quotation.
	#[inline] pub fn is_empty(&self) -> bool { self.quotations.is_empty() }
}
