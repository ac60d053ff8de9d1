//! Client and investment account records.
//!
//! These are plain owned records. The calculation functions borrow them and
//! never keep references, so a caller mutating a `Client` must re-run
//! [`evaluate`](super::tax::evaluate) to see updated figures. Records are not
//! meant to be shared between threads while being mutated.

use super::invest::Projection;
use super::tax::{self, TaxResult, WeeklyView};
use rust_decimal::Decimal;

/// Weekly investment account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    rate: Decimal,
    number_of_weeks: u32,
    amount: Decimal,
}

impl Account {
    pub fn new(rate: Decimal, number_of_weeks: u32, amount: Decimal) -> Self {
        Account {
            rate,
            number_of_weeks,
            amount,
        }
    }

    /// Annual interest rate as a percentage
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn number_of_weeks(&self) -> u32 {
        self.number_of_weeks
    }

    /// Weekly contribution
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn projection(&self) -> Projection {
        Projection::new(self.amount, self.rate, self.number_of_weeks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSlot {
    First,
    Second,
}

impl AccountSlot {
    pub fn other(&self) -> AccountSlot {
        match self {
            AccountSlot::First => AccountSlot::Second,
            AccountSlot::Second => AccountSlot::First,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            AccountSlot::First => 1,
            AccountSlot::Second => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Client {
    pub name: String,
    /// Annual gross salary
    pub gross_salary: Decimal,
    pub resident: bool,
    pub weekly_expenses: Decimal,
    pub account1: Option<Account>,
    pub account2: Option<Account>,
}

impl Client {
    pub fn new(name: impl Into<String>, gross_salary: Decimal, resident: bool) -> Self {
        Client {
            name: name.into(),
            gross_salary,
            resident,
            ..Default::default()
        }
    }

    pub fn evaluate(&self) -> TaxResult {
        tax::evaluate(self)
    }

    /// Weekly figures for an evaluation of this client, using its current expenses
    pub fn weekly_view(&self, result: &TaxResult) -> WeeklyView {
        tax::weekly_view(result.net_salary, result.tax, self.weekly_expenses)
    }

    pub fn account(&self, slot: AccountSlot) -> Option<&Account> {
        match slot {
            AccountSlot::First => self.account1.as_ref(),
            AccountSlot::Second => self.account2.as_ref(),
        }
    }

    pub fn set_account(&mut self, slot: AccountSlot, account: Option<Account>) {
        match slot {
            AccountSlot::First => self.account1 = account,
            AccountSlot::Second => self.account2 = account,
        }
    }

    /// Weekly amount already committed to the account in the other slot
    pub fn other_invested(&self, slot: AccountSlot) -> Decimal {
        self.account(slot.other())
            .map_or(Decimal::ZERO, |account| account.amount())
    }

    pub fn clear_accounts(&mut self) {
        self.account1 = None;
        self.account2 = None;
    }
}
