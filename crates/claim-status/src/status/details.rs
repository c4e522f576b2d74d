use chrono::NaiveDate;
use serde::Serialize;

use crate::scenarios::{parse_valid_date, ClaimDetails};

/// Benefit program a claim is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    UnemploymentInsurance,
    PandemicEmergencyCompensation,
    PandemicUnemploymentAssistance,
    ExtendedDuration,
    DisasterAssistance,
    Other(String),
}

impl ProgramType {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "UI" => Self::UnemploymentInsurance,
            "PEUC" => Self::PandemicEmergencyCompensation,
            "PUA" => Self::PandemicUnemploymentAssistance,
            "FED-ED" => Self::ExtendedDuration,
            "DUA" => Self::DisasterAssistance,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::UnemploymentInsurance => "Unemployment Insurance (UI)",
            Self::PandemicEmergencyCompensation => {
                "Pandemic Emergency Unemployment Compensation (PEUC)"
            }
            Self::PandemicUnemploymentAssistance => "Pandemic Unemployment Assistance (PUA)",
            Self::ExtendedDuration => "Federal-State Extended Duration (FED-ED)",
            Self::DisasterAssistance => "Disaster Unemployment Assistance (DUA)",
            Self::Other(code) => code.as_str(),
        }
    }
}

/// Display-ready benefit summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimDetailsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_benefit_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment_issued: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment_amount: Option<String>,
}

impl ClaimDetailsView {
    pub fn from_details(details: &ClaimDetails, minimum_valid_date: NaiveDate) -> Self {
        let valid_date = |text: &Option<String>| {
            text.as_deref()
                .and_then(|raw| parse_valid_date(raw, minimum_valid_date))
        };

        let benefit_year = match (
            valid_date(&details.benefit_year_start_date),
            valid_date(&details.benefit_year_end_date),
        ) {
            (Some(start), Some(end)) => {
                Some(format!("{} - {}", short_date(start), short_date(end)))
            }
            _ => None,
        };

        Self {
            program_type: details
                .program_type
                .as_deref()
                .filter(|code| !code.trim().is_empty())
                .map(|code| ProgramType::from_code(code).label().to_string()),
            benefit_year,
            claim_balance: details.claim_balance.map(format_currency),
            weekly_benefit_amount: details.weekly_benefit_amount.map(format_currency),
            last_payment_issued: valid_date(&details.last_payment_issued).map(short_date),
            last_payment_amount: details.last_payment_amount.map(format_currency),
        }
    }
}

pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// US dollars with thousands separators, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}
