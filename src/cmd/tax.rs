//! Tax command - income tax, medicare levy and net salary for one salary

use crate::engine::error::require_positive;
use crate::engine::{Client, TaxResult, WeeklyView};
use crate::format::{self, Locale};
use clap::Args;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct TaxCommand {
    /// Annual gross salary
    #[arg(short, long)]
    salary: Decimal,

    /// Use the non-resident tax table (no medicare levy)
    #[arg(long)]
    non_resident: bool,

    /// Weekly living expenses, deducted to give available funds
    #[arg(short, long, default_value_t = Decimal::ZERO)]
    expenses: Decimal,

    /// Name shown in the summary
    #[arg(short, long, default_value = "")]
    name: String,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Tax command output for JSON
#[derive(Debug, Serialize, JsonSchema)]
pub struct TaxReport {
    #[schemars(with = "String")]
    pub gross_salary: Decimal,
    pub resident: bool,
    #[schemars(with = "String")]
    pub weekly_expenses: Decimal,
    #[serde(flatten)]
    pub annual: TaxResult,
    #[serde(flatten)]
    pub weekly: WeeklyView,
}

impl TaxReport {
    pub fn new(client: &Client) -> Self {
        let annual = client.evaluate();
        TaxReport {
            gross_salary: client.gross_salary,
            resident: client.resident,
            weekly_expenses: client.weekly_expenses,
            annual,
            weekly: client.weekly_view(&annual),
        }
    }
}

impl TaxCommand {
    pub fn exec(&self, locale: Locale) -> anyhow::Result<()> {
        let salary = require_positive("annual income", self.salary)?;
        if self.expenses < Decimal::ZERO {
            anyhow::bail!("Weekly expenses cannot be negative: {}", self.expenses);
        }

        let mut client = Client::new(self.name.trim(), salary, !self.non_resident);
        client.weekly_expenses = self.expenses;
        let report = TaxReport::new(&client);
        log::info!(
            "Salary {} (resident: {}) tax {} medicare {}",
            salary,
            client.resident,
            report.annual.tax,
            report.annual.medicare
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{}", format::client_summary(locale, &client, &report.annual));
        if self.expenses > Decimal::ZERO {
            println!();
            println!("Weekly Expenses: {}", locale.money(self.expenses));
            println!("Available Funds: {}", locale.money(report.weekly.available_funds));
        }
        Ok(())
    }
}
