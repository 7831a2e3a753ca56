use clap::{Parser, Subcommand};

mod cmd;
mod invoice;
mod numbering;
mod tax;

use cmd::number::NumberCommand;
use cmd::schema::SchemaCommand;
use cmd::totals::TotalsCommand;
use cmd::validate::ValidateCommand;

#[derive(Parser, Debug)]
#[command(
    name = "invc",
    version,
    about = "UK invoice totals: VAT breakdown and CIS deductions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute invoice totals (subtotal, VAT breakdown, CIS deduction)
    Totals(TotalsCommand),
    /// Check an invoice for data quality issues
    Validate(ValidateCommand),
    /// Generate the next invoice number from a pattern
    Number(NumberCommand),
    /// Print expected input formats
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Totals(cmd) => cmd.exec(),
        Command::Validate(cmd) => cmd.exec(),
        Command::Number(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
