//! End-to-end scenario classification through the public engine facade.

use chrono::NaiveDate;

use claim_status::scenarios::{
    is_first_time_slot_earlier, is_valid_date, parse_time_slot, same_period, ClaimRecord,
    ClassifierConfig, PendingDetermination, ScenarioEngine, ScenarioType, TimeSlot,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 5, 5).expect("valid date")
}

fn scheduled(date: &str, time_slot: &str) -> PendingDetermination {
    PendingDetermination {
        determination_status: Some("Scheduled".to_string()),
        schedule_date: Some(date.to_string()),
        request_date: Some("2020-04-01T00:00:00".to_string()),
        time_slot_description: Some(time_slot.to_string()),
    }
}

fn not_yet_scheduled() -> PendingDetermination {
    PendingDetermination {
        request_date: Some("2020-04-01T00:00:00".to_string()),
        ..PendingDetermination::default()
    }
}

fn claim_with(determinations: Vec<PendingDetermination>) -> ClaimRecord {
    ClaimRecord {
        has_pending_weeks: Some(false),
        has_certification_weeks_available: Some(true),
        pending_determinations: determinations,
        ..ClaimRecord::default()
    }
}

#[test]
fn helper_properties_hold() {
    assert_eq!(
        parse_time_slot("10-12"),
        Some(TimeSlot {
            range_start: 10,
            range_end: 12
        })
    );
    assert_eq!(parse_time_slot("10\u{2014}12"), parse_time_slot("10-12"));
    assert!(same_period(8, 10));
    assert!(!same_period(8, 3));
    assert_eq!(is_first_time_slot_earlier("10-12", "1-3"), Some(true));
    assert_eq!(is_first_time_slot_earlier("not a time slot", "10-12"), Some(false));

    let minimum = ClassifierConfig::default().minimum_valid_date;
    assert!(!is_valid_date("0001-01-01T00:00:00", minimum));
    assert!(is_valid_date("2013-01-01T00:00:00", minimum));
}

#[test]
fn scheduled_interview_beats_unscheduled_request() {
    let engine = ScenarioEngine::default();
    let claim = claim_with(vec![not_yet_scheduled(), scheduled("2020-05-20T00:00:00", "1-3")]);

    let resolution = engine.resolve(&claim, today());

    assert_eq!(resolution.scenario, ScenarioType::InterviewScheduled);
    assert_eq!(resolution.determination.as_ref(), Some(&claim.pending_determinations[1]));
    assert!(resolution.continue_certifying());
}

#[test]
fn earlier_date_is_carried() {
    let engine = ScenarioEngine::default();
    let claim = claim_with(vec![
        scheduled("2020-05-21T00:00:00", "8-10"),
        scheduled("2020-05-06T00:00:00", "3-5"),
    ]);

    let resolution = engine.resolve(&claim, today());

    assert_eq!(resolution.determination.as_ref(), Some(&claim.pending_determinations[1]));
}

#[test]
fn same_date_is_broken_by_time_slot() {
    let engine = ScenarioEngine::default();
    let claim = claim_with(vec![
        scheduled("2020-05-06T00:00:00", "1-3"),
        scheduled("2020-05-06T00:00:00", "10-12"),
        scheduled("2020-05-06T00:00:00", "unknown"),
    ]);

    let resolution = engine.resolve(&claim, today());

    assert_eq!(resolution.determination.as_ref(), Some(&claim.pending_determinations[1]));
}

#[test]
fn appointment_today_is_still_scheduled() {
    let engine = ScenarioEngine::default();
    let claim = claim_with(vec![scheduled("2020-05-05T00:00:00", "10-12")]);

    assert_eq!(
        engine.resolve(&claim, today()).scenario,
        ScenarioType::InterviewScheduled
    );

    let tomorrow = today().succ_opt().expect("valid date");
    let resolution = engine.resolve(&claim, tomorrow);
    assert_eq!(resolution.scenario, ScenarioType::AwaitingDecision);
    assert!(resolution.determination.is_none());
}

#[test]
fn flag_scenarios_apply_without_determinations() {
    let engine = ScenarioEngine::default();

    let mut claim = claim_with(Vec::new());
    claim.has_certification_weeks_available = Some(false);
    let resolution = engine.resolve(&claim, today());
    assert_eq!(resolution.scenario.code(), 5);
    assert!(!resolution.continue_certifying());

    claim.has_certification_weeks_available = Some(true);
    assert_eq!(engine.resolve(&claim, today()).scenario.code(), 6);

    claim.has_pending_weeks = Some(true);
    for certification in [None, Some(false), Some(true)] {
        claim.has_certification_weeks_available = certification;
        assert_eq!(engine.resolve(&claim, today()).scenario.code(), 4);
    }
}

#[test]
fn malformed_records_never_fail() {
    let engine = ScenarioEngine::default();
    let claim: ClaimRecord = serde_json::from_str(
        r#"{
            "hasPendingWeeks": true,
            "pendingDetermination": [
                {},
                { "determinationStatus": "Scheduled", "scheduleDate": "0001-01-01T00:00:00" },
                { "determinationStatus": "INVL", "scheduleDate": "2020-06-01T00:00:00" },
                { "scheduleDate": "tomorrow", "timeSlotDesc": "whenever" }
            ]
        }"#,
    )
    .expect("payload parses");

    assert_eq!(
        engine.resolve(&claim, today()).scenario,
        ScenarioType::PendingWeeks
    );
}

#[test]
fn custom_minimum_date_changes_validity() {
    let config = ClassifierConfig {
        minimum_valid_date: NaiveDate::from_ymd_opt(2020, 5, 10).expect("valid date"),
        ..ClassifierConfig::default()
    };
    let engine = ScenarioEngine::new(config);
    let claim = claim_with(vec![
        scheduled("2020-05-08T00:00:00", "8-10"),
        scheduled("2020-05-12T00:00:00", "1-3"),
    ]);

    let resolution = engine.resolve(&claim, today());

    assert_eq!(resolution.determination.as_ref(), Some(&claim.pending_determinations[1]));
}
