//! Loan calculator workflow: closed-form amortization plus financing-offer
//! pre-fill and clamping.

mod amortization;
mod offers;

pub use amortization::{clip, monthly_payment, LoanTerms, PaymentBreakdown};
pub use offers::FinancingOffer;
