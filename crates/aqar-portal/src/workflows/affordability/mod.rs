//! Policy-driven max-loan estimation.
//!
//! The affordability formula is owned by the backend; this module composes
//! the two calls around it (policy lookup, max-loan computation) and keeps
//! the panel state in an explicit snapshot instead of scattered globals.

mod panel;
mod policy;

pub use panel::{AffordabilityPanel, PanelState};
pub use policy::{EffectiveInputs, LoanPolicy, MaxLoanEstimate, MaxLoanRequest};

/// Loan type preselected when the panel opens.
pub const DEFAULT_LOAN_TYPE: &str = "housing";
