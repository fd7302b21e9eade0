use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod calculator;
mod config;

use calculator::{
    BatchEvaluator, InputError, MoneyFormat, ProviderQuote, TransferInput, TransferRecord,
    Waitlist, WaitlistError, WaitlistStats, evaluate, group_thousands, savings_headline,
};
use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "vaultpay",
    version,
    about = "Compare remittance costs with a traditional provider and join the VaultPay waitlist"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare the cost of one transfer pattern
    Compare {
        /// Amount per transfer
        #[arg(long, default_value = "500", allow_hyphen_values = true)]
        amount: String,

        /// Transfers per month
        #[arg(long, default_value = "2", allow_hyphen_values = true)]
        frequency: String,

        /// Destination country
        #[arg(long, default_value = "Nigeria")]
        destination: String,
    },

    /// Compare every row of a CSV file (amount,frequency,destination) and write CSV to stdout
    Batch {
        /// Input CSV file
        input: PathBuf,
    },

    /// Join the early-access waitlist
    Waitlist {
        /// Email address to register
        email: String,
    },

    /// Show how many early-access spots are left
    Stats,
}

/// Errors that end a command.
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Waitlist(#[from] WaitlistError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Batch evaluator failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(err) = run(cli.command, &config).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> Result<(), CliError> {
    match command {
        Command::Compare {
            amount,
            frequency,
            destination,
        } => compare(&amount, &frequency, &destination, config),
        Command::Batch { input } => batch(&input, config).await,
        Command::Waitlist { email } => {
            let mut waitlist = Waitlist::new(config.waitlist_delay);
            println!("Joining...");
            waitlist.submit(&email).await?;
            debug!(state = ?waitlist.get_state(), "Waitlist form state");
            println!("You're on the list! We'll email you when we launch.");
            println!(
                "You're #{} on the waitlist",
                group_thousands(&WaitlistStats::default().position_after_signup().to_string())
            );
            Ok(())
        }
        Command::Stats => {
            let stats = WaitlistStats::default();
            println!(
                "{} of {} spots taken ({}% full), {} remaining",
                stats.current,
                stats.capacity,
                stats.percentage_filled(),
                stats.spots_remaining()
            );
            Ok(())
        }
    }
}

fn compare(
    amount: &str,
    frequency: &str,
    destination: &str,
    config: &Config,
) -> Result<(), CliError> {
    let input = TransferInput::parse(amount, frequency, destination)?;
    if !input.within_ui_bounds() {
        warn!(
            "Amounts between 50 and 10,000 and 1 to 10 transfers per month are typical; \
             figures are still computed"
        );
    }

    let comparison = evaluate(&input);
    if !comparison.is_finite() {
        warn!("Amount is too large to total; some figures overflowed");
    }
    let format = MoneyFormat::new(config.currency_symbol.as_str());
    println!(
        "Sending {} to {} {} times per month",
        format.per_transfer(input.get_amount()),
        input.get_destination(),
        input.get_frequency_per_month()
    );
    print_quote("Traditional providers", &comparison.baseline, &format);
    print_quote("VaultPay", &comparison.product, &format);
    println!();
    println!(
        "Your annual savings with VaultPay: {}",
        format.annual(comparison.savings.annual_savings)
    );
    println!("{}", savings_headline(&comparison.savings));
    Ok(())
}

fn print_quote(provider: &str, quote: &ProviderQuote, format: &MoneyFormat) {
    println!();
    println!("{provider}");
    println!("  Transfer fee     {}", format.per_transfer(quote.transfer_fee));
    println!("  Exchange markup  {}", format.per_transfer(quote.exchange_markup));
    println!("  Hidden fees      {}", format.per_transfer(quote.hidden_fees));
    println!("  Total            {}", format.per_transfer(quote.total_per_transfer));
    println!("                   {}/year", format.annual(quote.total_per_year));
}

async fn batch(input_file: &Path, config: &Config) -> Result<(), CliError> {
    let (sender, receiver) = mpsc::channel(config.channel_size);
    let mut evaluator = BatchEvaluator::new(receiver);

    let handle = tokio::spawn(async move {
        evaluator.run().await;
        evaluator
    });

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(input_file)?;
    for record in reader.deserialize::<TransferRecord>() {
        match record {
            Ok(record) => {
                if sender.send(record).await.is_err() {
                    break;
                }
            }
            Err(err) => warn!("Skipping unreadable row: {err}"),
        }
    }

    drop(sender); // Close the sender to signal no more records will be sent
    let evaluator = handle.await?;

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in evaluator.get_rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(
        evaluated = evaluator.get_rows().len(),
        rejected = evaluator.get_rejected(),
        "Batch complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{
        Cli, Command,
        calculator::{InputError, TransferInput},
    };

    #[test]
    fn test_negative_amount_reaches_validation() {
        let cli = Cli::try_parse_from(["vaultpay", "compare", "--amount", "-5"]).unwrap();
        let Command::Compare {
            amount,
            frequency,
            destination,
        } = cli.command
        else {
            panic!("expected the compare command");
        };
        assert_eq!(amount, "-5");
        assert_eq!(
            TransferInput::parse(&amount, &frequency, &destination),
            Err(InputError::NegativeAmount(-5.0))
        );
    }

    #[test]
    fn test_negative_frequency_reaches_validation() {
        let cli = Cli::try_parse_from(["vaultpay", "compare", "--frequency", "-1"]).unwrap();
        let Command::Compare {
            amount,
            frequency,
            destination,
        } = cli.command
        else {
            panic!("expected the compare command");
        };
        assert_eq!(
            TransferInput::parse(&amount, &frequency, &destination),
            Err(InputError::UnparsableFrequency("-1".to_string()))
        );
    }
}
