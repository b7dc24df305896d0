pub mod affordability;
pub mod directory;
pub mod financing;
pub mod testimonials;
pub mod valuation;
