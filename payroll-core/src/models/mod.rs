mod ctc_profile;
mod payroll_month;
mod regime;

pub use ctc_profile::{CtcProfile, CtcProfileError, GratuityRule, ProfileCode};
pub use payroll_month::PayrollMonth;
pub use regime::{RegimeConfig, RegimeKind, TaxSlab};
