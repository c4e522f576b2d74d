//! Appointment time slots such as `10-12` or `1–3`.
//!
//! Slots carry bare 12-hour numbers. The period is inferred from the hour
//! using the claim office convention: 8 through 12 are morning, 1 through 7
//! are afternoon.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hyphen, en dash or em dash between two one- or two-digit hours.
const TIME_SLOT_PATTERN: &str = "^([0-9]{1,2})[-\u{2013}\u{2014}]([0-9]{1,2})$";

fn time_slot_regex() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(TIME_SLOT_PATTERN).ok())
        .as_ref()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub range_start: u8,
    pub range_end: u8,
}

/// Half of the day an hour belongs to. Morning sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    pub fn of_hour(hour: u8) -> Self {
        if (1..=7).contains(&hour) {
            Self::Afternoon
        } else {
            Self::Morning
        }
    }

    /// Period shown to claimants; 12 is noon even though it sorts with the morning.
    pub fn display_of_hour(hour: u8) -> Self {
        if hour == 12 {
            Self::Afternoon
        } else {
            Self::of_hour(hour)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "a.m.",
            Self::Afternoon => "p.m.",
        }
    }
}

impl TimeSlot {
    fn start_order(&self) -> (Period, u8) {
        (Period::of_hour(self.range_start), self.range_start)
    }

    /// Whether both ends display with the same a.m./p.m. label.
    pub fn is_single_period(&self) -> bool {
        Period::display_of_hour(self.range_start) == Period::display_of_hour(self.range_end)
    }
}

impl fmt::Display for TimeSlot {
    /// `8–10 a.m.` within one period, `10 a.m.–1 p.m.` across periods.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = Period::display_of_hour(self.range_start);
        let end = Period::display_of_hour(self.range_end);
        if start == end {
            write!(f, "{}\u{2013}{} {}", self.range_start, self.range_end, end.label())
        } else {
            write!(
                f,
                "{} {}\u{2013}{} {}",
                self.range_start,
                start.label(),
                self.range_end,
                end.label()
            )
        }
    }
}

pub fn parse_time_slot(text: &str) -> Option<TimeSlot> {
    let captures = time_slot_regex()?.captures(text.trim())?;
    let range_start = captures.get(1)?.as_str().parse::<u8>().ok()?;
    let range_end = captures.get(2)?.as_str().parse::<u8>().ok()?;

    let hours = 1..=12;
    if !hours.contains(&range_start) || !hours.contains(&range_end) {
        return None;
    }

    Some(TimeSlot {
        range_start,
        range_end,
    })
}

pub fn same_period(hour_a: u8, hour_b: u8) -> bool {
    Period::of_hour(hour_a) == Period::of_hour(hour_b)
}

/// Compare two slot descriptions by their starting hour.
///
/// `None` only when neither side parses. When exactly one side parses, that
/// side counts as the earlier one: `Some(true)` if it is `first`,
/// `Some(false)` if it is `second`. Identical starts are not earlier.
pub fn is_first_time_slot_earlier(first: &str, second: &str) -> Option<bool> {
    match (parse_time_slot(first), parse_time_slot(second)) {
        (None, None) => None,
        (Some(_), None) => Some(true),
        (None, Some(_)) => Some(false),
        (Some(a), Some(b)) => Some(a.start_order() < b.start_order()),
    }
}
