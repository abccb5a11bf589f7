//! [Currency registry](Currency).

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// Defines the [`Currency`] enum along with its metadata accessors and the [`list::ARRAY`] table.
macro_rules! define_currencies {
	($($currency:ident => $unit:literal, $description:literal;)*) => {
		/// A currency quoted in the [NBP](https://api.nbp.pl/en.html) exchange rate tables.
		///
		/// The set is closed: use [`Currency::resolve`] to map a code onto it.
		#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
		pub enum Currency {
			$(
				#[doc = concat!("The ", $description, " (`", stringify!($currency), "`).")]
				$currency,
			)*
		}

		impl Currency {
			/// The currency code, e.g. `USD`.
			pub const fn code(self) -> &'static str {
				match self { $( Self::$currency => stringify!($currency), )* }
			}

			/// The unit the rate tables quote the currency in, e.g. `100 JPY`.
			pub const fn unit(self) -> &'static str {
				match self { $( Self::$currency => $unit, )* }
			}

			/// The display name, e.g. `US Dollar`.
			pub const fn description(self) -> &'static str {
				match self { $( Self::$currency => $description, )* }
			}
		}

		/// The count of supported currencies.
		const LEN: usize = 0 $(+ { stringify!($currency); 1 })*;
		/// Every supported currency, in table order.
		const ALL: [Currency; LEN] = [ $( Currency::$currency ),* ];
	};
}

// Order and units follow NBP table A.
define_currencies! {
	AUD => "1 AUD", "Australian Dollar";
	THB => "1 THB", "Baht";
	BRL => "1 BRL", "Brazilian Real";
	BGN => "1 BGN", "Bulgarian Lev";
	CAD => "1 CAD", "Canadian Dollar";
	CLP => "100 CLP", "Chilean Peso";
	CZK => "1 CZK", "Czech Koruna";
	DKK => "1 DKK", "Danish Krone";
	EUR => "1 EUR", "Euro";
	HUF => "100 HUF", "Forint";
	HKD => "1 HKD", "Hong Kong Dollar";
	UAH => "1 UAH", "Hryvnia";
	ISK => "100 ISK", "Iceland Krona";
	INR => "100 INR", "Indian Rupee";
	MYR => "1 MYR", "Malaysian Ringgit";
	MXN => "1 MXN", "Mexican Peso";
	ILS => "1 ILS", "New Israeli Shekel";
	NZD => "1 NZD", "New Zealand Dollar";
	NOK => "1 NOK", "Norwegian Krone";
	PHP => "1 PHP", "Philippine Peso";
	GBP => "1 GBP", "Pound Sterling";
	ZAR => "1 ZAR", "Rand";
	RON => "1 RON", "Romanian Leu";
	IDR => "10000 IDR", "Rupiah";
	SGD => "1 SGD", "Singapore Dollar";
	SEK => "1 SEK", "Swedish Krona";
	CHF => "1 CHF", "Swiss Franc";
	TRY => "1 TRY", "Turkish Lira";
	USD => "1 USD", "US Dollar";
	KRW => "100 KRW", "Won";
	JPY => "100 JPY", "Yen";
	CNY => "1 CNY", "Yuan Renminbi";
	XDR => "1 XDR", "SDR Int'l Monetary Fund (I.M.F.)";
}

pub mod list {
	//! [Currencies](super::Currency) table.

	/// An array of all the supported currencies.
	pub const ARRAY: [super::Currency; super::LEN] = super::ALL;
}

impl Currency {
	/// Resolves a currency code.
	///
	/// The code must match exactly: no trimming, no case-folding.
	///
	/// # Errors
	/// [`Error::InvalidCurrencyCode`] if the code is empty or unknown.
	pub fn resolve(code: &str) -> Result<Self, Error> {
		list::ARRAY
			.into_iter()
			.find(|currency| currency.code() == code)
			.ok_or_else(|| Error::InvalidCurrencyCode(code.to_owned()))
	}

	/// Resolves a currency code that may be absent.
	///
	/// # Errors
	/// [`Error::InvalidCurrencyCode`] if the code is absent, empty or unknown.
	pub fn resolve_opt(code: Option<&str>) -> Result<Self, Error> {
		Self::resolve(code.unwrap_or_default())
	}
}

impl<'a> TryFrom<&'a str> for Currency {
	type Error = Error;

	#[inline] fn try_from(value: &'a str) -> Result<Self, Self::Error> { Self::resolve(value) }
}

impl FromStr for Currency {
	type Err = Error;

	#[inline] fn from_str(s: &str) -> Result<Self, Self::Err> { Self::resolve(s) }
}

impl AsRef<str> for Currency {
	#[inline] fn as_ref(&self) -> &str { self.code() }
}

impl Display for Currency {
	#[inline] fn fmt(&self, f: &mut Formatter) -> fmt::Result { Display::fmt(self.code(), f) }
}

impl Serialize for Currency {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
		self.code().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Currency {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
		struct Visitor;

		impl<'de> serde::de::Visitor<'de> for Visitor {
			type Value = Currency;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				formatter.write_str("a supported currency code")
			}

			fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> where E: serde::de::Error {
				Currency::resolve(v).map_err(serde::de::Error::custom)
			}
		}

		deserializer.deserialize_str(Visitor)
	}
}
