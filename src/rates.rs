//! Rate analytics results and the aggregations behind them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{quotation::Quotation, Currency, Error};

/// The average rate of a currency on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageRate {
	/// The currency.
	#[serde(rename = "currencyCode")]
	pub currency: Currency,
	/// The currency's [description](Currency::description).
	pub currency_name: &'static str,
	/// The requested date.
	pub date: NaiveDate,
	/// The average rate published on [`date`](Self::date).
	pub average_exchange_rate: Decimal,
}

/// The extreme average rates of a currency over its most recent quotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinMaxAverage {
	/// The currency.
	#[serde(rename = "currencyCode")]
	pub currency: Currency,
	/// The currency's [description](Currency::description).
	pub currency_name: &'static str,
	/// The lowest average rate.
	#[serde(rename = "minAvgValue")]
	pub min: Decimal,
	/// The highest average rate.
	#[serde(rename = "maxAvgValue")]
	pub max: Decimal,
}

/// The largest bid/ask spread of a currency over its most recent quotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidAskSpread {
	/// The currency.
	#[serde(rename = "currencyCode")]
	pub currency: Currency,
	/// The currency's [description](Currency::description).
	pub currency_name: &'static str,
	/// The date the spread was quoted on.
	pub date: NaiveDate,
	/// The spread, `ask - bid`.
	#[serde(rename = "majorDifference")]
	pub spread: Decimal,
}

/// Finds the lowest and highest average rates.
///
/// # Errors
/// - [`Error::EmptyUpstreamResult`] if there is no quotation.
/// - [`Error::UpstreamUnavailable`] if a quotation has no average rate.
pub fn min_max_mid(quotations: &[Quotation]) -> Result<(Decimal, Decimal), Error> {
	let mut mids = quotations.iter().map(Quotation::mid_rate);
	let first = mids.next().ok_or(Error::EmptyUpstreamResult)??;
	mids.try_fold((first, first), |(min, max), mid| {
		let mid = mid?;
		Ok::<_, Error>((min.min(mid), max.max(mid)))
	})
}

/// Finds the quotation with the largest bid/ask spread.
///
/// When several quotations share the largest spread, the last one wins.
///
/// # Errors
/// - [`Error::EmptyUpstreamResult`] if there is no quotation.
/// - [`Error::UpstreamUnavailable`] if a quotation lacks its bid or ask rate.
pub fn max_spread(quotations: &[Quotation]) -> Result<(&Quotation, Decimal), Error> {
	let mut widest: Option<(&Quotation, Decimal)> = None;
	for quotation in quotations {
		let spread = quotation.spread()?;
		if widest.map_or(true, |(_, max)| spread >= max) {
			widest = Some((quotation, spread));
		}
	}
	widest.ok_or(Error::EmptyUpstreamResult)
}

#[cfg(test)]
mod tests {
	use rust_decimal_macros::dec;

	use super::*;
	use crate::FeedError;

	fn quotation(day: u32, mid: Decimal, bid: Decimal, ask: Decimal) -> Quotation {
		Quotation {
			sequence_number: format!("{day:03}/X/NBP/2023"),
			effective_date: NaiveDate::from_ymd_opt(2023, 3, day).unwrap(),
			mid: Some(mid),
			bid: Some(bid),
			ask: Some(ask),
		}
	}

	fn march() -> Vec<Quotation> {
		vec![
			quotation(20, dec!(1.1), dec!(2.1), dec!(2.2)),
			quotation(21, dec!(1.2), dec!(2.2), dec!(3.2)),
			quotation(22, dec!(1.3), dec!(2.3), dec!(3.9)),
		]
	}

	#[test]
	fn test_min_max() {
		assert_eq!(min_max_mid(&march()).unwrap(), (dec!(1.1), dec!(1.3)));
	}

	#[test]
	fn test_min_max_unordered() {
		let mut quotations = march();
		quotations.swap(0, 2);
		quotations[1].mid = Some(dec!(0.95));
		assert_eq!(min_max_mid(&quotations).unwrap(), (dec!(0.95), dec!(1.3)));
	}

	#[test]
	fn test_min_max_singleton() {
		let (min, max) = min_max_mid(&march()[1..2]).unwrap();
		assert_eq!(min, max);
		assert_eq!(min, dec!(1.2));
	}

	#[test]
	fn test_min_max_empty() {
		assert!(matches!(min_max_mid(&[]), Err(Error::EmptyUpstreamResult)));
	}

	#[test]
	fn test_min_max_missing_mid() {
		let mut quotations = march();
		quotations[2].mid = None;
		assert!(matches!(
			min_max_mid(&quotations),
			Err(Error::UpstreamUnavailable(FeedError::MissingRate { field: "mid", .. })),
		));
	}

	#[test]
	fn test_max_spread() {
		let quotations = march();
		let (widest, spread) = max_spread(&quotations).unwrap();
		assert_eq!(widest.effective_date, NaiveDate::from_ymd_opt(2023, 3, 22).unwrap());
		assert_eq!(spread, dec!(1.6));
	}

	#[test]
	fn test_max_spread_tie_takes_last() {
		let quotations = vec![
			quotation(20, dec!(1), dec!(1.0), dec!(1.5)),
			quotation(21, dec!(1), dec!(2.0), dec!(2.50)),
			quotation(22, dec!(1), dec!(3.0), dec!(3.1)),
		];
		let (widest, spread) = max_spread(&quotations).unwrap();
		assert_eq!(widest.effective_date, NaiveDate::from_ymd_opt(2023, 3, 21).unwrap());
		assert_eq!(spread, dec!(0.5));
	}

	#[test]
	fn test_max_spread_negative() {
		let quotations = vec![
			quotation(20, dec!(1), dec!(2.0), dec!(1.9)),
			quotation(21, dec!(1), dec!(2.0), dec!(1.7)),
		];
		let (widest, spread) = max_spread(&quotations).unwrap();
		assert_eq!(widest.effective_date, NaiveDate::from_ymd_opt(2023, 3, 20).unwrap());
		assert_eq!(spread, dec!(-0.1));
	}

	#[test]
	fn test_max_spread_empty() {
		assert!(matches!(max_spread(&[]), Err(Error::EmptyUpstreamResult)));
	}

	#[test]
	fn test_max_spread_missing_ask() {
		let mut quotations = march();
		quotations[0].ask = None;
		assert!(matches!(
			max_spread(&quotations),
			Err(Error::UpstreamUnavailable(FeedError::MissingRate { field: "ask", .. })),
		));
	}

	#[test]
	fn test_serialize() {
		let result = BidAskSpread {
			currency: Currency::USD,
			currency_name: Currency::USD.description(),
			date: NaiveDate::from_ymd_opt(2023, 3, 22).unwrap(),
			spread: dec!(1.6),
		};
		assert_eq!(
			serde_json::to_value(&result).unwrap(),
			serde_json::json!({
				"currencyCode": "USD",
				"currencyName": "US Dollar",
				"date": "2023-03-22",
				"majorDifference": "1.6",
			}),
		);
	}
}
