use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::config::ClassifierConfig;
use super::determination::{DeterminationClassifier, DeterminationScenario};
use super::domain::{ClaimRecord, PendingDetermination};

/// The six mutually exclusive claim-status scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    InterviewNotYetScheduled,
    InterviewScheduled,
    AwaitingDecision,
    PendingWeeks,
    BaseNoWeeksToCertify,
    BaseWeeksToCertify,
}

impl ScenarioType {
    pub const ALL: [ScenarioType; 6] = [
        ScenarioType::InterviewNotYetScheduled,
        ScenarioType::InterviewScheduled,
        ScenarioType::AwaitingDecision,
        ScenarioType::PendingWeeks,
        ScenarioType::BaseNoWeeksToCertify,
        ScenarioType::BaseWeeksToCertify,
    ];

    pub fn code(self) -> u8 {
        match self {
            Self::InterviewNotYetScheduled => 1,
            Self::InterviewScheduled => 2,
            Self::AwaitingDecision => 3,
            Self::PendingWeeks => 4,
            Self::BaseNoWeeksToCertify => 5,
            Self::BaseWeeksToCertify => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|scenario| scenario.code() == code)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::InterviewNotYetScheduled => "Determination interview not yet scheduled",
            Self::InterviewScheduled => "Determination interview scheduled",
            Self::AwaitingDecision => "Determination interview occurred, decision pending",
            Self::PendingWeeks => "Generic pending state with pending weeks",
            Self::BaseNoWeeksToCertify => "Base state, no pending weeks, no weeks to certify",
            Self::BaseWeeksToCertify => "Base state, no pending weeks, weeks available to certify",
        }
    }

    pub fn is_base_state(self) -> bool {
        matches!(self, Self::BaseNoWeeksToCertify | Self::BaseWeeksToCertify)
    }
}

impl From<&DeterminationScenario> for ScenarioType {
    fn from(value: &DeterminationScenario) -> Self {
        match value {
            DeterminationScenario::NotYetScheduled => Self::InterviewNotYetScheduled,
            DeterminationScenario::Scheduled { .. } => Self::InterviewScheduled,
            DeterminationScenario::AwaitingDecision => Self::AwaitingDecision,
        }
    }
}

/// Whether the claimant should keep certifying for benefits.
pub fn continue_certifying(scenario: ScenarioType, claim: &ClaimRecord) -> bool {
    !scenario.is_base_state() && claim.has_certification_weeks_available()
}

/// Final classification handed to content selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioResolution {
    pub scenario: ScenarioType,
    /// Winning appointment, present only for a scheduled interview.
    pub determination: Option<PendingDetermination>,
    pub certification_weeks_available: bool,
}

impl ScenarioResolution {
    pub fn code(&self) -> u8 {
        self.scenario.code()
    }

    pub fn continue_certifying(&self) -> bool {
        !self.scenario.is_base_state() && self.certification_weeks_available
    }
}

/// Maps a claim record onto exactly one scenario.
#[derive(Debug, Clone, Default)]
pub struct ScenarioEngine {
    classifier: DeterminationClassifier,
}

impl ScenarioEngine {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: DeterminationClassifier::new(config),
        }
    }

    pub fn classifier(&self) -> &DeterminationClassifier {
        &self.classifier
    }

    pub fn resolve(&self, claim: &ClaimRecord, today: NaiveDate) -> ScenarioResolution {
        let certification_weeks_available = claim.has_certification_weeks_available();

        let determination_scenario = if claim.pending_determinations.is_empty() {
            None
        } else {
            self.classifier.classify(&claim.pending_determinations, today)
        };

        let (scenario, determination) = match determination_scenario {
            Some(result) => {
                let scenario = ScenarioType::from(&result);
                let determination = match result {
                    DeterminationScenario::Scheduled { determination } => Some(determination),
                    _ => None,
                };
                (scenario, determination)
            }
            None => (fallback_scenario(claim), None),
        };

        debug!(
            scenario = scenario.code(),
            determinations = claim.pending_determinations.len(),
            "resolved claim scenario"
        );

        ScenarioResolution {
            scenario,
            determination,
            certification_weeks_available,
        }
    }
}

fn fallback_scenario(claim: &ClaimRecord) -> ScenarioType {
    if claim.has_pending_weeks() {
        ScenarioType::PendingWeeks
    } else if claim.has_certification_weeks_available == Some(false) {
        ScenarioType::BaseNoWeeksToCertify
    } else {
        ScenarioType::BaseWeeksToCertify
    }
}
