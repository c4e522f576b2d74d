use serde::{Deserialize, Deserializer, Serialize};

/// Claim payload as returned by the API gateway.
///
/// Nothing here is schema-validated; every field may be missing or malformed
/// and the scenario engine decides what that means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    #[serde(default)]
    pub unique_number: Option<String>,
    #[serde(default)]
    pub has_pending_weeks: Option<bool>,
    #[serde(default)]
    pub has_certification_weeks_available: Option<bool>,
    #[serde(
        default,
        alias = "pendingDetermination",
        deserialize_with = "null_as_empty"
    )]
    pub pending_determinations: Vec<PendingDetermination>,
    #[serde(default)]
    pub claim_details: Option<ClaimDetails>,
}

impl ClaimRecord {
    pub fn has_pending_weeks(&self) -> bool {
        self.has_pending_weeks == Some(true)
    }

    pub fn has_certification_weeks_available(&self) -> bool {
        self.has_certification_weeks_available == Some(true)
    }
}

/// One eligibility-determination interview or request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDetermination {
    #[serde(default)]
    pub determination_status: Option<String>,
    #[serde(default)]
    pub schedule_date: Option<String>,
    #[serde(default)]
    pub request_date: Option<String>,
    #[serde(default, alias = "timeSlotDesc")]
    pub time_slot_description: Option<String>,
}

impl PendingDetermination {
    pub fn status(&self) -> Option<&str> {
        non_blank(&self.determination_status)
    }

    pub fn schedule_date(&self) -> Option<&str> {
        non_blank(&self.schedule_date)
    }

    pub fn request_date(&self) -> Option<&str> {
        non_blank(&self.request_date)
    }

    pub fn time_slot(&self) -> &str {
        self.time_slot_description.as_deref().unwrap_or_default()
    }
}

/// Benefit summary shown alongside the scenario content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetails {
    #[serde(default)]
    pub program_type: Option<String>,
    #[serde(default)]
    pub benefit_year_start_date: Option<String>,
    #[serde(default)]
    pub benefit_year_end_date: Option<String>,
    #[serde(default)]
    pub claim_balance: Option<f64>,
    #[serde(default)]
    pub weekly_benefit_amount: Option<f64>,
    #[serde(default)]
    pub last_payment_issued: Option<String>,
    #[serde(default)]
    pub last_payment_amount: Option<f64>,
}

/// `null` lists and `null` entries are treated as absent.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PendingDetermination>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Vec<Option<PendingDetermination>>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default().into_iter().flatten().collect())
}

/// Empty and whitespace-only strings count as absent.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}
