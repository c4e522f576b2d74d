use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use claim_status::config::AppConfig;
use claim_status::error::AppError;
use claim_status::scenarios::{ClaimRecord, ScenarioEngine};
use claim_status::status::ClaimStatusView;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Path to a claim record as returned by the API gateway
    #[arg(long)]
    pub(crate) claim: PathBuf,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&args.claim)?;
    let claim: ClaimRecord = serde_json::from_str(&raw)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let engine = ScenarioEngine::new(config.classifier.clone());
    let resolution = engine.resolve(&claim, today);

    println!("Claim status classification");
    println!("Evaluated: {today}");
    println!(
        "Scenario {}: {}",
        resolution.code(),
        resolution.scenario.description()
    );
    println!("Continue certifying: {}", yes_no(resolution.continue_certifying()));

    let view = ClaimStatusView::assemble(&claim, &resolution, config.classifier.minimum_valid_date)?;
    render_view(&view);
    Ok(())
}

fn render_view(view: &ClaimStatusView) {
    if let Some(appointment) = &view.appointment {
        match &appointment.time_slot_label {
            Some(slot) => println!("Appointment: {} between {}", appointment.date_label, slot),
            None => println!("Appointment: {}", appointment.date_label),
        }
    }

    let details = &view.claim_details;
    println!("\nClaim details");
    for (label, value) in [
        ("Program type", &details.program_type),
        ("Benefit year", &details.benefit_year),
        ("Claim balance", &details.claim_balance),
        ("Weekly benefit amount", &details.weekly_benefit_amount),
        ("Last payment issued", &details.last_payment_issued),
        ("Last payment amount", &details.last_payment_amount),
    ] {
        println!("- {label}: {}", value.as_deref().unwrap_or("n/a"));
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
