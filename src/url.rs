//! URL building

use crate::{
	feed::{FeedRequest, Selector, Table},
	Currency,
};

/// A path segment of a rates URL.
pub(crate) trait UrlPart {
	/// Appends the part to the URL, preceded by a `/`.
	fn push_url_part(&self, url: &mut String);
}

impl UrlPart for Table {
	#[inline] fn push_url_part(&self, url: &mut String) {
		url.push('/');
		url.push_str(self.as_str());
	}
}

impl UrlPart for Currency {
	#[inline] fn push_url_part(&self, url: &mut String) {
		url.push('/');
		url.push_str(self.code());
	}
}

impl UrlPart for Selector {
	fn push_url_part(&self, url: &mut String) {
		match self {
			Selector::Date(date) => {
				url.push('/');
				url.push_str(&date.format("%Y-%m-%d").to_string());
			}
			Selector::Last(count) => {
				url.push_str("/last/");
				url.push_str(&count.to_string());
			}
		}
	}
}

/// Builds the rates URL of `request` under `base_url`.
pub(crate) fn rates_url(base_url: &str, request: &FeedRequest) -> String {
	let mut url = String::with_capacity(base_url.len() + "/exchangerates/rates/A/XXX/last/255/?format=json".len());
	url.push_str(base_url.trim_end_matches('/'));
	url.push_str("/exchangerates/rates");
	request.table.push_url_part(&mut url);
	request.currency.push_url_part(&mut url);
	request.selector.push_url_part(&mut url);
	url.push_str("/?format=json");
	url
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;

	#[test]
	fn test_date_url() {
		let request = FeedRequest::new(
			Table::A,
			Currency::USD,
			Selector::Date(NaiveDate::from_ymd_opt(2023, 4, 6).unwrap()),
		);
		assert_eq!(
			rates_url("https://api.nbp.pl/api", &request),
			"https://api.nbp.pl/api/exchangerates/rates/A/USD/2023-04-06/?format=json",
		);
	}

	#[test]
	fn test_last_url() {
		let request = FeedRequest::new(Table::C, Currency::GBP, Selector::Last(10));
		assert_eq!(
			rates_url("http://127.0.0.1:8080/api/", &request),
			"http://127.0.0.1:8080/api/exchangerates/rates/C/GBP/last/10/?format=json",
		);
	}
}
