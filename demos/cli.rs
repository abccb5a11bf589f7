use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nbprates::{currency, Error, FeedConfig, NbpClient, RateService};
use serde::Serialize;

#[derive(Parser, Debug)]
pub struct Cli {
	/// API root, overrides NBP_API_URL.
	#[clap(long)]
	base_url: Option<String>,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	/// Average rate on a date.
	Average {
		currency: String,
		date: NaiveDate,
	},
	/// Lowest and highest average rates over the last quotations.
	MinMax {
		currency: String,
		quotations: u16,
	},
	/// Largest bid/ask spread over the last quotations.
	Spread {
		currency: String,
		quotations: u16,
	},
	/// Supported currencies.
	Currencies,
}

fn print(value: &impl Serialize) {
	match serde_json::to_string_pretty(value) {
		Ok(json) => println!("{json}"),
		Err(e) => eprintln!("{e}"),
	}
}

async fn run(cli: Cli) -> Result<(), Error> {
	let mut config = FeedConfig::from_env();
	if let Some(base_url) = cli.base_url { config = config.base_url(base_url); }
	let service = RateService::new(NbpClient::new(config)?);

	match cli.command {
		CliCommand::Average { currency, date } => print(&service.get_average_rate(&currency, date).await?),
		CliCommand::MinMax { currency, quotations } => print(&service.get_min_max_average(&currency, quotations).await?),
		CliCommand::Spread { currency, quotations } => print(&service.get_max_bid_ask_spread(&currency, quotations).await?),
		CliCommand::Currencies => {
			for currency in currency::list::ARRAY {
				println!("{currency}\t{}\t{}", currency.unit(), currency.description());
			}
		}
	}
	Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
	env_logger::init();
	match run(Cli::parse()).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e}");
			if e.is_client_error() { ExitCode::from(2) } else { ExitCode::FAILURE }
		}
	}
}
