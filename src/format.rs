//! Text rendering for amounts, clients and accounts

use crate::engine::{Account, Checkpoint, Client, TaxResult};
use crate::engine::tax::round2;
use clap::ValueEnum;
use rust_decimal::Decimal;
use std::fmt::Write;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// Australian dollars, 1,234.56
    #[default]
    EnAu,
    /// US dollars, 1,234.56
    EnUs,
    /// Pounds sterling, 1,234.56
    EnGb,
    /// Euros, 1.234,56
    DeDe,
}

impl Locale {
    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Locale::EnAu | Locale::EnUs => "$",
            Locale::EnGb => "£",
            Locale::DeDe => "€",
        }
    }

    fn separators(&self) -> (char, char) {
        match self {
            Locale::DeDe => ('.', ','),
            _ => (',', '.'),
        }
    }

    /// Amount without currency symbol, rounded to cents and grouped by thousands
    pub fn number(&self, amount: Decimal) -> String {
        let (group, decimal) = self.separators();
        let text = format!("{:.2}", round2(amount).abs());
        let (whole, cents) = text.split_once('.').unwrap_or((&text, "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(group);
            }
            grouped.push(digit);
        }
        format!("{grouped}{decimal}{cents}")
    }

    pub fn money(&self, amount: Decimal) -> String {
        let sign = if round2(amount) < Decimal::ZERO { "-" } else { "" };
        match self {
            Locale::DeDe => format!("{sign}{} {}", self.number(amount), self.currency_symbol()),
            _ => format!("{sign}{}{}", self.currency_symbol(), self.number(amount)),
        }
    }

    /// Percentage with trailing zeros dropped, e.g. `12%` or `7.5%`
    pub fn percent(&self, rate: Decimal) -> String {
        let text = rate.normalize().to_string();
        match self {
            Locale::DeDe => format!("{}%", text.replace('.', ",")),
            _ => format!("{text}%"),
        }
    }
}

pub fn client_summary(locale: Locale, client: &Client, result: &TaxResult) -> String {
    let weekly = client.weekly_view(result);
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Name: {}", client.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Net Salary");
    let _ = writeln!(out, "Per Week: {}", locale.money(weekly.weekly_net_salary));
    let _ = writeln!(out, "Per Year: {}", locale.money(result.net_salary));
    let _ = writeln!(out);
    let _ = writeln!(out, "Tax Paid");
    let _ = writeln!(out, "Per Week: {}", locale.money(weekly.weekly_tax));
    let _ = writeln!(out, "Per Year: {}", locale.money(result.tax));
    let _ = writeln!(out);
    let _ = write!(out, "Medicare Levy Per Year: {}", locale.money(result.medicare));
    out
}

pub fn account_summary(locale: Locale, account: &Account) -> String {
    format!(
        "Invested per week: {}\nInterest rate: {}\nNumber of weeks: {}",
        locale.money(account.amount()),
        locale.percent(account.rate()),
        account.number_of_weeks()
    )
}

#[derive(Debug, Clone, Tabled)]
struct CheckpointRow {
    #[tabled(rename = "Weeks")]
    week: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

pub fn projection_table(locale: Locale, checkpoints: &[Checkpoint]) -> String {
    let rows: Vec<CheckpointRow> = checkpoints
        .iter()
        .map(|c| CheckpointRow {
            week: format!("{:02}", c.week),
            balance: locale.money(c.balance),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    format!("Investment\n{table}")
}
