//! Cap and Fee Domain Services

mod cap_fee_calculator;
mod fee_lock;

pub use cap_fee_calculator::{CapFeeCalculator, SummaryInput};
pub use fee_lock::FeeLockPolicy;
