use clap::{Parser, Subcommand};
use paycalc::cmd::{
    interactive::InteractiveCommand, invest::InvestCommand, schema::SchemaCommand,
    tax::TaxCommand,
};
use paycalc::format::Locale;

#[derive(Parser, Debug)]
#[command(version, about = "Income tax, medicare levy and weekly investment calculator")]
struct Cli {
    /// Locale used to format currency amounts
    #[arg(long, global = true, value_enum, env = "PAYCALC_LOCALE", default_value_t = Locale::EnAu)]
    locale: Locale,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate income tax, medicare levy and net salary
    Tax(TaxCommand),
    /// Project a weekly investment
    Invest(InvestCommand),
    /// Step through the calculator interactively (default)
    Interactive(InteractiveCommand),
    /// Print the JSON Schema of the --json outputs
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Tax(tax)) => tax.exec(cli.locale),
        Some(Command::Invest(invest)) => invest.exec(cli.locale),
        Some(Command::Interactive(interactive)) => interactive.exec(cli.locale),
        Some(Command::Schema(schema)) => schema.exec(),
        None => InteractiveCommand::default().exec(cli.locale),
    }
}
