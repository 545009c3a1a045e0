use clap::{Parser, Subcommand};
use sbif::{Client, Config, Indicator, QueryDate, Token};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct Cli {
	/// API key, defaults to the SBIF_API_KEY environment variable.
	#[clap(long)]
	key: Option<String>,
	/// Reject future dates for indicators too.
	#[clap(long)]
	strict: bool,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	/// Prints an indicator value: uf, utm, dollar, euro or ipc.
	Value {
		indicator: Indicator,
		#[clap(long)]
		date: Option<QueryDate>,
	},
	/// Prints an institution profile.
	Institution {
		code: String,
		#[clap(long)]
		date: Option<QueryDate>,
	},
}

#[cfg(feature = "rust_decimal")] type Value = rust_decimal::Decimal;
#[cfg(not(feature = "rust_decimal"))] type Value = f64;

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
	let cli = Cli::parse();

	let mut config = Config::from_env().unwrap().validate_indicator_dates(cli.strict);
	if let Some(key) = cli.key.as_deref() {
		config = config.api_key(Token::try_from(key).unwrap());
	}
	let client = Client::new(config);

	match cli.command {
		CliCommand::Value { indicator, date } => {
			let value = client
				.indicator_as::<Value>(indicator, date.map(QueryDate::date))
				.await
				.unwrap();
			println!("{indicator} {value}");
		}
		CliCommand::Institution { code, date } => {
			let profile = client.institution_data(&code, date.map(QueryDate::date)).await.unwrap();
			for (field, value) in profile.fields() { println!("{field}: {value}"); }
		}
	}
}
