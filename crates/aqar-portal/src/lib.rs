//! Client-side engine for a real-estate valuation and financing portal.
//!
//! The portal front end owns no business data: everything is either a pure
//! computation over form inputs (instant valuation, loan amortization) or a
//! thin composition over backend endpoints (loan policies, max-loan
//! estimates, company directory, testimonials). This crate models those
//! pieces as explicit workflows so they can be exercised and tested without
//! a browser.

pub mod backend;
pub mod config;
pub mod error;
pub mod format;
pub mod telemetry;
pub mod views;
pub mod workflows;
