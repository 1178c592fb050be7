pub mod analysis;
pub mod closing;
pub mod escrow;
pub mod loan;
pub mod payment;
pub mod projection;

#[cfg(feature = "schedule")]
pub mod schedule;

pub use analysis::{
    analyze_purchase, compare_terms, ClosingCostOverrides, PurchaseAnalysis, PurchaseInput,
    RecurringCostOverrides, TermComparison,
};
pub use closing::{
    compute_cash_to_close, compute_closing_cost_total, derive_closing_costs, ClosingCosts,
};
pub use escrow::{derive_pmi, derive_recurring_costs, RecurringCosts};
pub use loan::{LoanConfiguration, PMI_WAIVER_DOWN_PAYMENT_PERCENT};
pub use payment::{compute_monthly_payment, MonthlyPaymentBreakdown};
pub use projection::{compute_projection, ProjectionResult};
