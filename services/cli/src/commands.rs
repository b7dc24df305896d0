use std::sync::Arc;

use aqar_portal::backend::{HttpPortalBackend, PortalBackend};
use aqar_portal::config::AppConfig;
use aqar_portal::error::AppError;
use aqar_portal::format::{currency, FractionDigits, UNAVAILABLE};
use aqar_portal::telemetry;
use aqar_portal::workflows::affordability::AffordabilityPanel;
use aqar_portal::workflows::directory::{ApplicantType, CompanyQuery};
use aqar_portal::workflows::financing::{monthly_payment, FinancingOffer, LoanTerms};
use aqar_portal::workflows::testimonials::TestimonialDraft;
use aqar_portal::workflows::valuation::{estimate, ValuationInput};
use tracing::debug;

use crate::cli::{CompaniesArgs, LoanArgs, MaxLoanArgs, TestimonialArgs, ValuateArgs};

pub(crate) fn run_valuate(args: ValuateArgs) -> Result<(), AppError> {
    let input = ValuationInput::from_form(
        args.land_area,
        args.location.as_deref(),
        args.building_age,
        args.built_area,
    );
    let value = estimate(&input);
    println!("Estimated value: {}", currency(value, FractionDigits::Whole));
    Ok(())
}

pub(crate) fn run_loan(args: LoanArgs) -> Result<(), AppError> {
    let mut terms = LoanTerms::new(
        args.amount.unwrap_or(f64::NAN),
        args.rate.unwrap_or(f64::NAN),
        args.months.unwrap_or(f64::NAN),
    );

    let offer_selected = args.offer_rate.is_some()
        || args.offer_min_months.is_some()
        || args.offer_max_months.is_some()
        || args.offer_min_amount.is_some()
        || args.offer_max_amount.is_some();
    if offer_selected {
        let offer = FinancingOffer {
            annual_rate_percent: args.offer_rate.unwrap_or(0.0),
            min_term_months: args.offer_min_months,
            max_term_months: args.offer_max_months,
            min_amount: args.offer_min_amount,
            max_amount: args.offer_max_amount,
        };
        terms = offer.apply(terms);
        if let Some(hint) = offer.term_hint() {
            println!("Offer term bracket: {hint}");
        }
    }

    let breakdown = monthly_payment(terms);
    println!(
        "Monthly payment: {}",
        currency(breakdown.monthly, FractionDigits::Cents)
    );
    println!(
        "Total interest:  {}",
        currency(breakdown.total_interest, FractionDigits::Cents)
    );
    println!(
        "Total cost:      {}",
        currency(breakdown.total_cost, FractionDigits::Cents)
    );
    Ok(())
}

pub(crate) async fn run_max_loan(args: MaxLoanArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let backend = Arc::new(HttpPortalBackend::new(&config.backend)?);
    let mut panel = AffordabilityPanel::new(backend);

    if let Some(loan_type) = &args.loan_type {
        panel.select_loan_type(loan_type).await;
    }
    panel.set_income(args.income).await;
    panel.set_years(args.years).await;
    panel.set_annual_rate(args.rate).await;
    panel.select_bank(&args.bank).await;

    let state = panel.state();
    println!("Policy: {}", state.policy_summary());
    match &state.estimate {
        Some(estimate) => {
            println!(
                "Max principal:       {}",
                currency(estimate.max_principal, FractionDigits::Cents)
            );
            println!(
                "Max monthly payment: {}",
                currency(estimate.max_monthly_payment, FractionDigits::Cents)
            );
            println!("Based on: {}", estimate.used.formula_line());
        }
        None => {
            println!("Max principal:       {UNAVAILABLE}");
            println!("Max monthly payment: {UNAVAILABLE}");
        }
    }
    Ok(())
}

pub(crate) async fn run_companies(args: CompaniesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let query = CompanyQuery {
        bank_slug: args.bank,
        amount: args.amount,
        applicant_type: args.applicant_type.as_deref().and_then(parse_applicant_type),
        purpose: args.purpose,
    };
    if !query.is_searchable() {
        println!("No matching companies.");
        return Ok(());
    }

    let backend = HttpPortalBackend::new(&config.backend)?;
    let items = match backend.filter_companies(&query).await {
        Ok(list) => list.items,
        Err(err) => {
            debug!(error = %err, "company filter failed");
            Vec::new()
        }
    };

    if items.is_empty() {
        println!("No matching companies.");
        return Ok(());
    }
    for company in &items {
        match company.limit_label() {
            Some(label) => println!("{} ({label}) -> {}", company.company_name, company.apply_url),
            None => println!("{} -> {}", company.company_name, company.apply_url),
        }
    }
    Ok(())
}

pub(crate) async fn run_testimonial(args: TestimonialArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let draft = TestimonialDraft::from_form(
        Some(&args.name),
        Some(&args.property_type),
        Some(&args.rating),
        Some(&args.experience),
    );

    let backend = HttpPortalBackend::new(&config.backend)?;
    match backend.submit_testimonial(&draft).await {
        Ok(published) => println!("Published: {}: {}", published.name, published.body),
        Err(err) => {
            debug!(error = %err, "testimonial submission failed");
            println!("Submission failed, please try again later.");
        }
    }
    Ok(())
}

fn parse_applicant_type(raw: &str) -> Option<ApplicantType> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "individual" => Some(ApplicantType::Individual),
        "company" => Some(ApplicantType::Company),
        _ => None,
    }
}
