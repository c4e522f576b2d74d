//! Claim scenario classification.
//!
//! A claim record is mapped onto one of six display scenarios. Pending
//! determinations are consulted first; the top-level week flags decide the
//! remaining cases. All functions here are pure and take "today" explicitly.

pub mod config;
pub mod dates;
pub mod determination;
pub mod domain;
pub mod resolver;
pub mod time_slot;

pub use config::{ClassifierConfig, DEFAULT_IGNORED_STATUSES};
pub use dates::{is_date_past, is_valid_date, parse_claim_date, parse_valid_date};
pub use determination::{DeterminationClassifier, DeterminationScenario, DeterminationState};
pub use domain::{ClaimDetails, ClaimRecord, PendingDetermination};
pub use resolver::{continue_certifying, ScenarioEngine, ScenarioResolution, ScenarioType};
pub use time_slot::{is_first_time_slot_earlier, parse_time_slot, same_period, Period, TimeSlot};
