use super::client::Client;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::Serialize;

pub const WEEKS_PER_YEAR: Decimal = dec!(52);

/// Salary at which residents start paying the medicare levy (inclusive)
pub const MEDICARE_THRESHOLD: Decimal = dec!(20000);
pub const MEDICARE_RATE: Decimal = dec!(0.015);

/// A single row of a tax table.
///
/// Tax for a salary inside the bracket is `(gross - floor) * rate + base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Upper bound of the bracket (inclusive), `None` for the top bracket
    pub ceiling: Option<Decimal>,
    /// Upper bound of the previous bracket
    pub floor: Decimal,
    pub rate: Decimal,
    /// Fixed tax owed on everything up to `floor`
    pub base: Decimal,
}

impl TaxBracket {
    pub fn contains(&self, gross: Decimal) -> bool {
        self.ceiling.is_none_or(|ceiling| gross <= ceiling)
    }

    pub fn tax(&self, gross: Decimal) -> Decimal {
        (gross - self.floor) * self.rate + self.base
    }
}

pub const RESIDENT_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        ceiling: Some(dec!(6000)),
        floor: dec!(0),
        rate: dec!(0),
        base: dec!(0),
    },
    TaxBracket {
        ceiling: Some(dec!(37000)),
        floor: dec!(6000),
        rate: dec!(0.15),
        base: dec!(0),
    },
    TaxBracket {
        ceiling: Some(dec!(80000)),
        floor: dec!(37000),
        rate: dec!(0.30),
        base: dec!(4650),
    },
    TaxBracket {
        ceiling: Some(dec!(180000)),
        floor: dec!(80000),
        rate: dec!(0.37),
        base: dec!(17550),
    },
    TaxBracket {
        ceiling: None,
        floor: dec!(180000),
        rate: dec!(0.45),
        base: dec!(54550),
    },
];

pub const NON_RESIDENT_BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        ceiling: Some(dec!(37000)),
        floor: dec!(0),
        rate: dec!(0.29),
        base: dec!(0),
    },
    TaxBracket {
        ceiling: Some(dec!(80000)),
        floor: dec!(37000),
        rate: dec!(0.30),
        base: dec!(10730),
    },
    TaxBracket {
        ceiling: Some(dec!(180000)),
        floor: dec!(80000),
        rate: dec!(0.37),
        base: dec!(23630),
    },
    TaxBracket {
        ceiling: None,
        floor: dec!(180000),
        rate: dec!(0.45),
        base: dec!(60630),
    },
];

/// Residency status, selects the tax table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Residency {
    #[default]
    Resident,
    NonResident,
}

impl Residency {
    pub fn is_resident(&self) -> bool {
        matches!(self, Residency::Resident)
    }

    pub fn brackets(&self) -> &'static [TaxBracket] {
        match self {
            Residency::Resident => &RESIDENT_BRACKETS,
            Residency::NonResident => &NON_RESIDENT_BRACKETS,
        }
    }
}

impl From<bool> for Residency {
    fn from(resident: bool) -> Self {
        if resident {
            Residency::Resident
        } else {
            Residency::NonResident
        }
    }
}

/// Annual figures produced by the tax engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TaxResult {
    #[schemars(with = "String")]
    pub tax: Decimal,
    #[schemars(with = "String")]
    pub medicare: Decimal,
    #[schemars(with = "String")]
    pub net_salary: Decimal,
}

/// Weekly figures, each rounded to cents before any comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WeeklyView {
    #[schemars(with = "String")]
    pub weekly_net_salary: Decimal,
    #[schemars(with = "String")]
    pub weekly_tax: Decimal,
    #[schemars(with = "String")]
    pub available_funds: Decimal,
}

/// Round to cents, halves away from zero
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Annual income tax for the bracket containing `gross`
pub fn income_tax(gross: Decimal, residency: Residency) -> Decimal {
    let brackets = residency.brackets();
    let bracket = brackets
        .iter()
        .find(|b| b.contains(gross))
        .unwrap_or(&brackets[brackets.len() - 1]);
    log::debug!(
        "{:?} bracket over {} at {} (+{}) for gross {}",
        residency,
        bracket.floor,
        bracket.rate,
        bracket.base,
        gross
    );
    bracket.tax(gross)
}

/// Medicare levy: residents only, from the threshold upwards
pub fn medicare_levy(gross: Decimal, residency: Residency) -> Decimal {
    if residency.is_resident() && gross >= MEDICARE_THRESHOLD {
        gross * MEDICARE_RATE
    } else {
        Decimal::ZERO
    }
}

/// Compute tax, then medicare, then net salary
pub fn compute_tax(gross_salary: Decimal, resident: bool) -> TaxResult {
    let residency = Residency::from(resident);
    let tax = income_tax(gross_salary, residency);
    let medicare = medicare_levy(gross_salary, residency);
    let net_salary = gross_salary - tax - medicare;
    TaxResult {
        tax,
        medicare,
        net_salary,
    }
}

/// Evaluate a client's current income inputs.
///
/// Nothing is cached on the client, so the result always reflects the
/// current gross salary and residency.
pub fn evaluate(client: &Client) -> TaxResult {
    compute_tax(client.gross_salary, client.resident)
}

pub fn weekly_view(net_salary: Decimal, tax: Decimal, weekly_expenses: Decimal) -> WeeklyView {
    let weekly_net_salary = round2(net_salary / WEEKS_PER_YEAR);
    let weekly_tax = round2(tax / WEEKS_PER_YEAR);
    let available_funds = round2(weekly_net_salary - weekly_expenses);
    WeeklyView {
        weekly_net_salary,
        weekly_tax,
        available_funds,
    }
}
