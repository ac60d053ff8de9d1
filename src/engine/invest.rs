use super::error::DomainError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::Serialize;

/// Weeks in a reporting group; interest is credited once per full group
pub const GROUP_WEEKS: u32 = 4;

/// Four-week groups per year, the annual rate is split evenly across them
pub const PERIODS_PER_YEAR: Decimal = dec!(13);

/// Balance reported at the close of a group of weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Checkpoint {
    pub week: u32,
    #[schemars(with = "String")]
    pub balance: Decimal,
}

/// Lazy projection of a weekly investment.
///
/// Yields a checkpoint every four weeks. When the term is not a multiple of
/// four, the final 1-3 weeks are reported as a last checkpoint that adds the
/// contributions without crediting interest. A balance too large for
/// `Decimal` yields one `ProjectionOverflow` error and ends the projection.
#[derive(Debug, Clone)]
pub struct Projection {
    weekly_amount: Decimal,
    multiplier: Decimal,
    number_of_weeks: u32,
    week: u32,
    total: Decimal,
}

impl Projection {
    pub fn new(weekly_amount: Decimal, rate_percent: Decimal, number_of_weeks: u32) -> Self {
        Projection {
            weekly_amount,
            multiplier: rate_percent / PERIODS_PER_YEAR / dec!(100) + Decimal::ONE,
            number_of_weeks,
            week: 0,
            total: Decimal::ZERO,
        }
    }

    /// Growth factor applied at the close of each full group
    pub fn multiplier(&self) -> Decimal {
        self.multiplier
    }

    fn close_group(&self, group_weeks: u32) -> Option<Decimal> {
        let contribution = self.weekly_amount.checked_mul(Decimal::from(group_weeks))?;
        let total = self.total.checked_add(contribution)?;
        if group_weeks == GROUP_WEEKS {
            total.checked_mul(self.multiplier)
        } else {
            Some(total)
        }
    }
}

/// Number of checkpoints in a term of `number_of_weeks`
pub fn checkpoint_count(number_of_weeks: u32) -> usize {
    number_of_weeks.div_ceil(GROUP_WEEKS) as usize
}

impl Iterator for Projection {
    type Item = Result<Checkpoint, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.week >= self.number_of_weeks {
            return None;
        }
        let close = (self.week + GROUP_WEEKS).min(self.number_of_weeks);
        let Some(total) = self.close_group(close - self.week) else {
            log::warn!("balance overflowed at week {}", close);
            self.week = self.number_of_weeks;
            return Some(Err(DomainError::ProjectionOverflow { week: close }));
        };
        self.total = total;
        self.week = close;
        log::trace!("week {} balance {}", close, self.total);
        Some(Ok(Checkpoint {
            week: close,
            balance: self.total,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = checkpoint_count(self.number_of_weeks.saturating_sub(self.week));
        (remaining.min(1), Some(remaining))
    }
}

/// Project a weekly investment, collecting every checkpoint
pub fn project_investment(
    weekly_amount: Decimal,
    rate_percent: Decimal,
    number_of_weeks: u32,
) -> Result<Vec<Checkpoint>, DomainError> {
    log::debug!(
        "projecting {} per week at {}% for {} weeks ({} checkpoints)",
        weekly_amount,
        rate_percent,
        number_of_weeks,
        checkpoint_count(number_of_weeks)
    );
    Projection::new(weekly_amount, rate_percent, number_of_weeks).collect()
}
