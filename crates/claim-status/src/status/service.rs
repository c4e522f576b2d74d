use std::sync::Arc;

use chrono::NaiveDate;

use super::gateway::{ClaimGateway, GatewayError};
use super::view::ClaimStatusView;
use crate::scenarios::{ClaimRecord, ClassifierConfig, ScenarioEngine};

/// Service composing the claim gateway and the scenario engine.
pub struct ClaimStatusService<G> {
    gateway: Arc<G>,
    engine: Arc<ScenarioEngine>,
    minimum_valid_date: NaiveDate,
}

impl<G> ClaimStatusService<G>
where
    G: ClaimGateway + 'static,
{
    pub fn new(gateway: Arc<G>, config: ClassifierConfig) -> Self {
        let minimum_valid_date = config.minimum_valid_date;
        Self {
            gateway,
            engine: Arc::new(ScenarioEngine::new(config)),
            minimum_valid_date,
        }
    }

    pub fn engine(&self) -> &ScenarioEngine {
        &self.engine
    }

    /// Fetch a claimant's record and build their status page.
    pub fn status(
        &self,
        unique_number: &str,
        today: NaiveDate,
    ) -> Result<ClaimStatusView, ClaimStatusError> {
        let claim = self
            .gateway
            .fetch(unique_number)?
            .ok_or_else(|| ClaimStatusError::NotFound(unique_number.to_string()))?;
        self.evaluate(&claim, today)
    }

    /// Build a status page from a record already in hand.
    pub fn evaluate(
        &self,
        claim: &ClaimRecord,
        today: NaiveDate,
    ) -> Result<ClaimStatusView, ClaimStatusError> {
        let resolution = self.engine.resolve(claim, today);
        ClaimStatusView::assemble(claim, &resolution, self.minimum_valid_date)
    }
}

/// Error raised while assembling a claim status page.
#[derive(Debug, thiserror::Error)]
pub enum ClaimStatusError {
    #[error("missing claim details")]
    MissingClaimDetails,
    #[error("no claim found for unique number {0}")]
    NotFound(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
