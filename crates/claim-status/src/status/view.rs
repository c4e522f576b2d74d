use chrono::NaiveDate;
use serde::Serialize;

use super::details::ClaimDetailsView;
use super::service::ClaimStatusError;
use crate::scenarios::{
    parse_claim_date, parse_time_slot, ClaimRecord, PendingDetermination, ScenarioResolution,
    ScenarioType, TimeSlot,
};

/// Scheduled interview shown for [`ScenarioType::InterviewScheduled`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentView {
    pub date: NaiveDate,
    pub date_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot_label: Option<String>,
}

impl AppointmentView {
    pub fn from_determination(determination: &PendingDetermination) -> Option<Self> {
        let date = determination.schedule_date().and_then(parse_claim_date)?;
        let time_slot = parse_time_slot(determination.time_slot());

        Some(Self {
            date,
            date_label: date.format("%A, %B %-d, %Y").to_string(),
            time_slot,
            time_slot_label: time_slot.map(|slot| slot.to_string()),
        })
    }
}

/// Everything the rendering layer needs to pick and fill claim-status content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimStatusView {
    pub scenario: ScenarioType,
    pub scenario_code: u8,
    pub description: &'static str,
    pub heading_key: String,
    pub summary_key: String,
    pub continue_certifying: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<AppointmentView>,
    pub claim_details: ClaimDetailsView,
}

impl ClaimStatusView {
    /// Fails only when the record carries no claim details at all.
    pub fn assemble(
        claim: &ClaimRecord,
        resolution: &ScenarioResolution,
        minimum_valid_date: NaiveDate,
    ) -> Result<Self, ClaimStatusError> {
        let details = claim
            .claim_details
            .as_ref()
            .ok_or(ClaimStatusError::MissingClaimDetails)?;

        let code = resolution.code();
        let appointment = resolution
            .determination
            .as_ref()
            .and_then(AppointmentView::from_determination);

        Ok(Self {
            scenario: resolution.scenario,
            scenario_code: code,
            description: resolution.scenario.description(),
            heading_key: format!("claim-status:scenario{code}.heading"),
            summary_key: format!("claim-status:scenario{code}.summary"),
            continue_certifying: resolution.continue_certifying(),
            appointment,
            claim_details: ClaimDetailsView::from_details(details, minimum_valid_date),
        })
    }
}
