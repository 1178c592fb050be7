pub mod assumptions;
pub mod error;
pub mod mortgage;
pub mod state_tax;
pub mod time_value;
pub mod types;

pub use error::{ClosingCostError, ErrorKind};
pub use types::*;

/// Standard result type for all closing-cost operations
pub type ClosingCostResult<T> = Result<T, ClosingCostError>;
