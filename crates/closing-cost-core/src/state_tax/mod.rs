//! Per-state property tax, transfer tax and recording fee figures.
//!
//! The table is read-only static data: no initialisation, no locking, and a
//! lookup for a code outside it is an error rather than a zeroed record.

mod table;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::ClosingCostError;
use crate::types::{Money, Percent};
use crate::ClosingCostResult;

use table::STATE_TAX_TABLE;

/// Tax and fee figures for one state (or DC).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateTaxRates {
    /// Uppercase two-letter code, e.g. "CA" or "DC".
    pub code: &'static str,
    pub name: &'static str,
    /// Annual property tax as a percent of home price.
    pub property_tax_rate_percent: Percent,
    /// Real-estate transfer tax as a percent of home price.
    pub transfer_tax_rate_percent: Percent,
    /// Flat government recording charge.
    pub recording_fees: Money,
}

impl StateTaxRates {
    /// Monthly property tax on a home of the given price.
    pub fn property_tax_monthly(&self, home_price: Money) -> Money {
        home_price * self.property_tax_rate_percent / dec!(100) / dec!(12)
    }

    /// One-time transfer tax on a home of the given price.
    pub fn transfer_tax(&self, home_price: Money) -> Money {
        home_price * self.transfer_tax_rate_percent / dec!(100)
    }

    /// True when the state levies no transfer tax at all.
    pub fn has_transfer_tax(&self) -> bool {
        self.transfer_tax_rate_percent > Decimal::ZERO
    }
}

/// Look up a state by exact uppercase code.
pub fn lookup_state(code: &str) -> ClosingCostResult<&'static StateTaxRates> {
    STATE_TAX_TABLE
        .binary_search_by(|entry| entry.code.cmp(code))
        .map(|idx| &STATE_TAX_TABLE[idx])
        .map_err(|_| ClosingCostError::UnknownState { code: code.into() })
}

/// Every entry, ordered by code.
pub fn all_states() -> &'static [StateTaxRates] {
    &STATE_TAX_TABLE
}
