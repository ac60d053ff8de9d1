pub mod client;
pub mod error;
pub mod invest;
pub mod tax;

// Flat public surface for domain types and functions.
pub use client::{Account, AccountSlot, Client};
pub use error::DomainError;
pub use invest::{checkpoint_count, project_investment, Checkpoint, Projection};
pub use tax::{compute_tax, evaluate, round2, weekly_view, Residency, TaxResult, WeeklyView};
