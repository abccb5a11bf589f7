//! [`FromScientific`]

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use serde_json::value::RawValue;

/// Scientific notation parsing.
pub(crate) trait FromScientific: Sized {
	/// The parse error type.
	type Error;

	/// Parses a decimal number from a string.
	///
	/// The number representation may or may not be in scientific notation.
	fn parse_scientific(s: &str) -> Result<Self, Self::Error>;
}

impl FromScientific for Decimal {
	type Error = rust_decimal::Error;
	fn parse_scientific(s: &str) -> Result<Self, Self::Error> {
		// from_scientific rejects non-scientific so trying both
		s.parse::<Self>().or_else(|_| Self::from_scientific(s))
	}
}

/// Deserializes an optional JSON number into a [`Decimal`] straight from its source text.
///
/// Going through `f64` would round rates such as `4.1512` before they are compared.
pub(crate) fn deserialize_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where D: Deserializer<'de> {
	Option::<Box<RawValue>>::deserialize(deserializer)?
		.map(|raw| Decimal::parse_scientific(raw.get()).map_err(de::Error::custom))
		.transpose()
}
