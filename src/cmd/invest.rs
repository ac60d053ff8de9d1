//! Invest command - project a weekly investment in four-week checkpoints

use crate::engine::error::{require_positive, require_rate, require_weeks};
use crate::engine::tax::round2;
use crate::engine::{Account, Checkpoint};
use crate::format::{self, Locale};
use clap::Args;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;
use std::io;

#[derive(Args, Debug)]
pub struct InvestCommand {
    /// Amount invested each week
    #[arg(short, long)]
    amount: Decimal,

    /// Annual interest rate percentage (1-100)
    #[arg(short, long)]
    rate: Decimal,

    /// Investment length in weeks
    #[arg(short, long)]
    weeks: i64,

    /// Output checkpoints as CSV
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Invest command output for JSON
#[derive(Debug, Serialize, JsonSchema)]
pub struct InvestReport {
    #[schemars(with = "String")]
    pub weekly_amount: Decimal,
    #[schemars(with = "String")]
    pub rate: Decimal,
    pub number_of_weeks: u32,
    pub checkpoints: Vec<Checkpoint>,
}

impl InvestCommand {
    pub fn exec(&self, locale: Locale) -> anyhow::Result<()> {
        let amount = require_positive("weekly investment", self.amount)?;
        let rate = require_rate(self.rate)?;
        let weeks = require_weeks(self.weeks)?;
        let account = Account::new(rate, weeks, amount);
        let checkpoints: Vec<Checkpoint> = account.projection().collect::<Result<_, _>>()?;

        if let Some(last) = checkpoints.last() {
            log::info!("Balance after {} weeks: {}", last.week, last.balance);
        }

        if self.csv {
            return self.write_csv(&checkpoints);
        }

        if self.json {
            let report = InvestReport {
                weekly_amount: amount,
                rate,
                number_of_weeks: weeks,
                checkpoints,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{}", format::account_summary(locale, &account));
        println!();
        println!("{}", format::projection_table(locale, &checkpoints));
        Ok(())
    }

    fn write_csv(&self, checkpoints: &[Checkpoint]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for checkpoint in checkpoints {
            wtr.serialize(Checkpoint {
                week: checkpoint.week,
                balance: round2(checkpoint.balance),
            })?;
        }
        wtr.flush()?;
        Ok(())
    }
}
