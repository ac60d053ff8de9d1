//! Domain preconditions.
//!
//! The calculations accept any input and return whatever the formulas give.
//! These checks are for the input layer, which decides what to do when one
//! fails (re-prompt, abort, report).

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::OnceLock;

pub const MIN_RATE: Decimal = dec!(1);
pub const MAX_RATE: Decimal = dec!(100);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} must be a positive number (and greater than zero): {value}")]
    NotPositive { field: &'static str, value: Decimal },
    #[error("interest rate must be between 1 and 100: {0}")]
    RateOutOfRange(Decimal),
    #[error("expected a first and last name separated by a space: '{0}'")]
    InvalidName(String),
    #[error("weekly expenses {expenses} exceed weekly net salary {weekly_net}")]
    ExpensesExceedIncome { expenses: Decimal, weekly_net: Decimal },
    #[error("investment of {total} exceeds available funds of {available}")]
    InvestmentExceedsFunds { total: Decimal, available: Decimal },
    #[error("projected balance is too large to represent from week {week}")]
    ProjectionOverflow { week: u32 },
}

pub fn require_positive(field: &'static str, value: Decimal) -> Result<Decimal, DomainError> {
    if value > Decimal::ZERO {
        Ok(value)
    } else {
        Err(DomainError::NotPositive { field, value })
    }
}

pub fn require_rate(rate: Decimal) -> Result<Decimal, DomainError> {
    if (MIN_RATE..=MAX_RATE).contains(&rate) {
        Ok(rate)
    } else {
        Err(DomainError::RateOutOfRange(rate))
    }
}

pub fn require_weeks(weeks: i64) -> Result<u32, DomainError> {
    match u32::try_from(weeks) {
        Ok(weeks) if weeks > 0 => Ok(weeks),
        _ => Err(DomainError::NotPositive {
            field: "number of weeks",
            value: Decimal::from(weeks),
        }),
    }
}

fn full_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z]+\s[a-zA-Z]+$").expect("valid name pattern"))
}

/// Accepts exactly two alphabetic words separated by one whitespace character
pub fn require_full_name(name: &str) -> Result<&str, DomainError> {
    if full_name_pattern().is_match(name) {
        Ok(name)
    } else {
        Err(DomainError::InvalidName(name.to_string()))
    }
}

/// Lower-case every word, then upper-case its first letter
pub fn capitalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `weekly_net` must already be rounded to cents
pub fn check_expenses(expenses: Decimal, weekly_net: Decimal) -> Result<(), DomainError> {
    if expenses > weekly_net {
        Err(DomainError::ExpensesExceedIncome {
            expenses,
            weekly_net,
        })
    } else {
        Ok(())
    }
}

/// The new weekly amount plus whatever the other account already takes
pub fn check_investment(
    amount: Decimal,
    other_invested: Decimal,
    available: Decimal,
) -> Result<(), DomainError> {
    let total = amount + other_invested;
    if total > available {
        Err(DomainError::InvestmentExceedsFunds { total, available })
    } else {
        Ok(())
    }
}
