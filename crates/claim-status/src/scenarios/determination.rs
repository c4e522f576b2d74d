use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::config::ClassifierConfig;
use super::dates::{is_date_past, parse_valid_date};
use super::domain::PendingDetermination;
use super::time_slot::is_first_time_slot_earlier;

/// Per-record outcome before the records are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeterminationState {
    /// Open determination with an interview today or later.
    PendingScheduled(NaiveDate),
    /// Open determination whose interview date has passed.
    PendingAwaitingDecision,
    /// Requested but never given a status or interview date.
    NotYetScheduled,
    Ignored,
}

/// The three scenarios a set of determinations can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeterminationScenario {
    NotYetScheduled,
    Scheduled { determination: PendingDetermination },
    AwaitingDecision,
}

/// Stateless classifier over a claim's pending determinations.
#[derive(Debug, Clone, Default)]
pub struct DeterminationClassifier {
    config: ClassifierConfig,
}

impl DeterminationClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn is_pending(&self, determination: &PendingDetermination) -> bool {
        match determination.status() {
            None => true,
            Some(status) => !self.config.is_ignored_status(status),
        }
    }

    pub fn classify_record(
        &self,
        determination: &PendingDetermination,
        today: NaiveDate,
    ) -> DeterminationState {
        let schedule_date = determination
            .schedule_date()
            .and_then(|text| parse_valid_date(text, self.config.minimum_valid_date));

        if self.is_pending(determination) {
            match schedule_date {
                Some(date) if is_date_past(date, today) => {
                    return DeterminationState::PendingAwaitingDecision
                }
                Some(date) => return DeterminationState::PendingScheduled(date),
                None => {}
            }
        }

        if determination.status().is_none()
            && determination.schedule_date().is_none()
            && determination.request_date().is_some()
        {
            return DeterminationState::NotYetScheduled;
        }

        DeterminationState::Ignored
    }

    /// Aggregate the records into a single scenario, if any applies.
    ///
    /// Scheduled beats awaiting-decision beats not-yet-scheduled. Among
    /// scheduled records the earliest day wins; on the same day the earlier
    /// time slot wins and otherwise the first record seen is kept.
    pub fn classify(
        &self,
        determinations: &[PendingDetermination],
        today: NaiveDate,
    ) -> Option<DeterminationScenario> {
        let mut earliest: Option<(NaiveDate, &PendingDetermination)> = None;
        let mut awaiting_decision = false;
        let mut not_yet_scheduled = false;

        for determination in determinations {
            let state = self.classify_record(determination, today);
            debug!(?state, "classified pending determination");

            match state {
                DeterminationState::PendingScheduled(date) => {
                    let replace = match earliest {
                        Some((best_date, best)) => is_earlier(date, determination, best_date, best),
                        None => true,
                    };
                    if replace {
                        earliest = Some((date, determination));
                    }
                }
                DeterminationState::PendingAwaitingDecision => awaiting_decision = true,
                DeterminationState::NotYetScheduled => not_yet_scheduled = true,
                DeterminationState::Ignored => {}
            }
        }

        if let Some((_, determination)) = earliest {
            return Some(DeterminationScenario::Scheduled {
                determination: determination.clone(),
            });
        }
        if awaiting_decision {
            return Some(DeterminationScenario::AwaitingDecision);
        }
        if not_yet_scheduled {
            return Some(DeterminationScenario::NotYetScheduled);
        }
        None
    }
}

fn is_earlier(
    date: NaiveDate,
    candidate: &PendingDetermination,
    best_date: NaiveDate,
    best: &PendingDetermination,
) -> bool {
    if date != best_date {
        return date < best_date;
    }
    is_first_time_slot_earlier(candidate.time_slot(), best.time_slot()).unwrap_or(false)
}
