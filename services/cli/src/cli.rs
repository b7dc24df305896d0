use aqar_portal::error::AppError;
use clap::{Args, Parser, Subcommand};

use crate::commands;

#[derive(Parser, Debug)]
#[command(
    name = "Aqar Portal",
    about = "Exercise the valuation and financing portal engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute an instant heuristic property valuation
    Valuate(ValuateArgs),
    /// Compute amortized loan figures, optionally through a financing offer
    Loan(LoanArgs),
    /// Estimate the maximum loan for a bank and loan type via the backend
    MaxLoan(MaxLoanArgs),
    /// List valuation companies matching a bank and requested amount
    Companies(CompaniesArgs),
    /// Submit a testimonial to the portal backend
    Testimonial(TestimonialArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ValuateArgs {
    /// Land area in square meters
    #[arg(long)]
    pub(crate) land_area: Option<f64>,
    /// Location tag (muscat, bawshar, seeb, mabella, sohar, salalah, nizwa)
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Building age in years
    #[arg(long)]
    pub(crate) building_age: Option<f64>,
    /// Built-up area in square meters
    #[arg(long)]
    pub(crate) built_area: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct LoanArgs {
    /// Loan principal
    #[arg(long)]
    pub(crate) amount: Option<f64>,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) rate: Option<f64>,
    /// Term in months
    #[arg(long)]
    pub(crate) months: Option<f64>,
    /// Annual rate published by a selected financing offer
    #[arg(long)]
    pub(crate) offer_rate: Option<f64>,
    /// Offer's minimum term in months
    #[arg(long)]
    pub(crate) offer_min_months: Option<f64>,
    /// Offer's maximum term in months
    #[arg(long)]
    pub(crate) offer_max_months: Option<f64>,
    /// Offer's minimum amount
    #[arg(long)]
    pub(crate) offer_min_amount: Option<f64>,
    /// Offer's maximum amount
    #[arg(long)]
    pub(crate) offer_max_amount: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct MaxLoanArgs {
    /// Bank slug, e.g. bank_a
    #[arg(long)]
    pub(crate) bank: String,
    /// Loan type (defaults to housing)
    #[arg(long)]
    pub(crate) loan_type: Option<String>,
    /// Monthly income
    #[arg(long)]
    pub(crate) income: Option<f64>,
    /// Term in years; left empty, the policy default applies
    #[arg(long)]
    pub(crate) years: Option<f64>,
    /// Annual rate in percent; left empty, the policy default applies
    #[arg(long)]
    pub(crate) rate: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct CompaniesArgs {
    /// Bank slug
    #[arg(long)]
    pub(crate) bank: String,
    /// Requested valuation amount
    #[arg(long)]
    pub(crate) amount: f64,
    /// Applicant type: individual or company
    #[arg(long)]
    pub(crate) applicant_type: Option<String>,
    /// Valuation purpose
    #[arg(long)]
    pub(crate) purpose: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct TestimonialArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) property_type: String,
    #[arg(long)]
    pub(crate) rating: String,
    #[arg(long)]
    pub(crate) experience: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Valuate(args) => commands::run_valuate(args),
        Command::Loan(args) => commands::run_loan(args),
        Command::MaxLoan(args) => commands::run_max_loan(args).await,
        Command::Companies(args) => commands::run_companies(args).await,
        Command::Testimonial(args) => commands::run_testimonial(args).await,
    }
}
