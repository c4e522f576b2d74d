use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::scenarios::{ClaimDetails, ClaimRecord, ClassifierConfig, PendingDetermination};
use crate::status::gateway::{ClaimGateway, GatewayError, InMemoryClaimGateway};
use crate::status::ClaimStatusService;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 5, 5).expect("valid date")
}

pub(super) fn claim_details() -> ClaimDetails {
    ClaimDetails {
        program_type: Some("UI".to_string()),
        benefit_year_start_date: Some("2020-03-15T00:00:00".to_string()),
        benefit_year_end_date: Some("2021-03-13T00:00:00".to_string()),
        claim_balance: Some(10_400.0),
        weekly_benefit_amount: Some(400.0),
        last_payment_issued: Some("2020-04-28T00:00:00".to_string()),
        last_payment_amount: Some(400.0),
    }
}

pub(super) fn scheduled(date: &str, time_slot: &str) -> PendingDetermination {
    PendingDetermination {
        determination_status: Some("Scheduled".to_string()),
        schedule_date: Some(date.to_string()),
        request_date: Some("2020-04-01T00:00:00".to_string()),
        time_slot_description: Some(time_slot.to_string()),
    }
}

pub(super) fn scheduled_claim() -> ClaimRecord {
    ClaimRecord {
        unique_number: Some("U-2".to_string()),
        has_pending_weeks: Some(true),
        has_certification_weeks_available: Some(true),
        pending_determinations: vec![
            scheduled("2020-05-08T00:00:00", "1-3"),
            scheduled("2020-05-08T00:00:00", "10-12"),
        ],
        claim_details: Some(claim_details()),
    }
}

pub(super) fn base_claim() -> ClaimRecord {
    ClaimRecord {
        unique_number: Some("U-6".to_string()),
        has_pending_weeks: Some(false),
        has_certification_weeks_available: Some(true),
        pending_determinations: Vec::new(),
        claim_details: Some(claim_details()),
    }
}

pub(super) fn build_service() -> Arc<ClaimStatusService<InMemoryClaimGateway>> {
    let gateway = InMemoryClaimGateway::default();
    gateway.insert("U-2", scheduled_claim());
    gateway.insert("U-6", base_claim());
    gateway.insert(
        "U-bare",
        ClaimRecord {
            claim_details: None,
            ..base_claim()
        },
    );

    Arc::new(ClaimStatusService::new(
        Arc::new(gateway),
        ClassifierConfig::default(),
    ))
}

pub(super) struct UnavailableGateway;

impl ClaimGateway for UnavailableGateway {
    fn fetch(&self, _unique_number: &str) -> Result<Option<ClaimRecord>, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
