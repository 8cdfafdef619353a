//! NexCoin CLI
//!
//! Display deposit addresses, catalogs and formatted amounts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nexcoin_core::{
    catalog::{default_network, search_assets, NETWORKS},
    format_balance, format_crypto, format_currency, format_number, format_percent, inspect,
    AddressBook, Currency, DepositAddress, GeneratorConfig,
};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "nexcoin")]
#[command(version)]
#[command(about = "NexCoin wallet receive-address toolkit", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed salt (overrides the config file)
    #[arg(long, global = true)]
    salt: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the deposit address for an asset on a network
    Address {
        /// Asset symbol (BTC, ETH, USDT, ...)
        #[arg(short, long)]
        asset: String,

        /// Network id (Ethereum, Tron, Solana, ...); defaults to the wallet's default network
        #[arg(short, long)]
        network: Option<String>,

        /// Only accept catalog assets and networks
        #[arg(long)]
        strict: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an asset's deposit address on every network
    Receive {
        /// Asset symbol
        #[arg(short, long)]
        asset: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported assets
    Assets {
        /// Filter by symbol or name
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// List deposit networks
    Networks,

    /// Detect the format of an address
    Inspect {
        /// Address to inspect
        address: String,
    },

    /// Format an amount the way the wallet displays it
    Amount {
        /// Value to format
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Formatting style
        #[arg(long, default_value = "crypto")]
        style: AmountStyle,

        /// Currency symbol for the currency style
        #[arg(long)]
        currency: Option<CurrencyArg>,

        /// Decimals for the number and percent styles
        #[arg(long, default_value = "2")]
        decimals: usize,
    },
}

#[derive(Clone, ValueEnum)]
enum AmountStyle {
    Currency,
    Crypto,
    Number,
    Percent,
    Balance,
}

#[derive(Clone, ValueEnum)]
enum CurrencyArg {
    Usd,
    Brl,
    Gbp,
    Eur,
}

impl From<CurrencyArg> for Currency {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Usd => Currency::Usd,
            CurrencyArg::Brl => Currency::Brl,
            CurrencyArg::Gbp => Currency::Gbp,
            CurrencyArg::Eur => Currency::Eur,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.salt)?;
    let book = AddressBook::new(config);
    info!(salt = %book.config().salt, "generator config loaded");

    match cli.command {
        Commands::Address {
            asset,
            network,
            strict,
            json,
        } => {
            let network = network.as_deref().unwrap_or(default_network().id);
            cmd_address(&book, &asset, network, strict, json)?;
        }
        Commands::Receive { asset, json } => {
            cmd_receive(&book, &asset, json)?;
        }
        Commands::Assets { search } => {
            cmd_assets(&search);
        }
        Commands::Networks => {
            cmd_networks();
        }
        Commands::Inspect { address } => {
            cmd_inspect(&address)?;
        }
        Commands::Amount {
            value,
            style,
            currency,
            decimals,
        } => {
            println!("{}", format_amount(value, style, currency.map(Into::into), decimals));
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>, salt: Option<String>) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(salt) = salt {
        config = GeneratorConfig::with_salt(salt)?;
    }

    Ok(config)
}

fn cmd_address(
    book: &AddressBook,
    asset: &str,
    network: &str,
    strict: bool,
    json_output: bool,
) -> Result<()> {
    let derived = if strict {
        book.checked_address(asset, network)?
    } else {
        book.address(asset, network)
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&derived)?);
    } else {
        print_address(&derived);
    }

    Ok(())
}

fn cmd_receive(book: &AddressBook, asset: &str, json_output: bool) -> Result<()> {
    let options = book.receive_options(asset)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!("Deposit addresses for {}:", asset);
    println!("{:-<80}", "");
    println!("{:<12} {:<28} {}", "Network", "Format", "Address");
    println!("{:-<80}", "");

    for option in &options {
        println!("{:<12} {:<28} {}", option.network, option.format, option.address);
    }

    Ok(())
}

fn cmd_assets(search: &str) {
    let assets = search_assets(search);

    println!("Supported Assets:");
    println!("{:-<44}", "");
    println!("{:<8} {:<15} {}", "Symbol", "Name", "Price Id");
    println!("{:-<44}", "");

    for asset in assets {
        println!("{:<8} {:<15} {}", asset.symbol, asset.name, asset.price_id);
    }
}

fn cmd_networks() {
    println!("Deposit Networks:");
    println!("{:-<44}", "");
    println!("{:<12} {:<20} {}", "Id", "Name", "Icon");
    println!("{:-<44}", "");

    for network in &NETWORKS {
        println!("{:<12} {:<20} {}", network.id, network.name, network.icon);
    }
}

#[derive(Serialize)]
struct InspectReport<'a> {
    address: &'a str,
    format: nexcoin_core::AddressFormat,
    description: String,
}

fn cmd_inspect(address: &str) -> Result<()> {
    let format = inspect(address)?;
    let report = InspectReport {
        address: address.trim(),
        format,
        description: format.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn format_amount(
    value: f64,
    style: AmountStyle,
    currency: Option<Currency>,
    decimals: usize,
) -> String {
    match style {
        AmountStyle::Currency => format_currency(value, currency),
        AmountStyle::Crypto => format_crypto(value),
        AmountStyle::Number => format_number(value, decimals),
        AmountStyle::Percent => format_percent(value, decimals),
        AmountStyle::Balance => format_balance(value),
    }
}

fn print_address(derived: &DepositAddress) {
    println!();
    println!("Asset:   {}", derived.asset);
    println!("Network: {}", derived.network);
    println!("Format:  {}", derived.format);
    println!("{:-<60}", "");
    println!("{}", derived.address);
    println!("{:-<60}", "");
    println!("Display only: this address cannot receive funds.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_address_command() {
        let cli = Cli::try_parse_from(["nexcoin", "--salt", "demo", "address", "-a", "BTC"]).unwrap();
        assert_eq!(cli.salt.as_deref(), Some("demo"));
        match cli.command {
            Commands::Address { asset, network, strict, json } => {
                assert_eq!(asset, "BTC");
                assert_eq!(network, None);
                assert!(!strict);
                assert!(!json);
            }
            _ => panic!("expected address command"),
        }
    }

    #[test]
    fn test_address_network_falls_back_to_catalog_default() {
        let cli = Cli::try_parse_from(["nexcoin", "address", "-a", "ETH"]).unwrap();
        let Commands::Address { network, .. } = cli.command else {
            panic!("expected address command");
        };
        let network = network.as_deref().unwrap_or(default_network().id);
        let book = AddressBook::default();
        assert_eq!(
            book.address("ETH", network).address,
            "0x0e7705c92a4a703f35a8ddb9d7d2fd3f289b2aca"
        );

        let cli = Cli::try_parse_from(["nexcoin", "address", "-a", "ETH", "-n", "Tron"]).unwrap();
        let Commands::Address { network, .. } = cli.command else {
            panic!("expected address command");
        };
        assert_eq!(network.as_deref(), Some("Tron"));
    }

    #[test]
    fn test_salt_flag_overrides_default() {
        let config = load_config(None, Some("demo".to_string())).unwrap();
        assert_eq!(config.salt, "demo");
        assert!(load_config(None, Some(String::new())).is_err());
    }

    #[test]
    fn test_format_amount_styles() {
        assert_eq!(
            format_amount(100_000.0, AmountStyle::Currency, Some(Currency::Brl), 2),
            "R$ 100.000,00"
        );
        assert_eq!(format_amount(0.5, AmountStyle::Crypto, None, 2), "0,5");
        assert_eq!(format_amount(-1.234, AmountStyle::Percent, None, 2), "-1,23%");
        assert_eq!(format_amount(0.5, AmountStyle::Balance, None, 2), "0.50000000");
    }
}
