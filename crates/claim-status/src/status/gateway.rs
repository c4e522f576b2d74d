use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::scenarios::ClaimRecord;

/// Outbound seam to the claim API gateway.
///
/// Implementations own transport concerns (TLS, pooling, retries);
/// callers only see a decoded record or an error.
pub trait ClaimGateway: Send + Sync {
    fn fetch(&self, unique_number: &str) -> Result<Option<ClaimRecord>, GatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("claim gateway unavailable: {0}")]
    Unavailable(String),
    #[error("claim gateway returned an unreadable payload: {0}")]
    InvalidPayload(String),
}

/// Gateway backed by records held in memory, keyed by unique number.
#[derive(Debug, Default, Clone)]
pub struct InMemoryClaimGateway {
    records: Arc<RwLock<HashMap<String, ClaimRecord>>>,
}

impl InMemoryClaimGateway {
    pub fn new(records: HashMap<String, ClaimRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Load a JSON object of `{ "<unique number>": <claim record>, ... }`.
    pub fn from_json(raw: &str) -> Result<Self, GatewayError> {
        let records: HashMap<String, ClaimRecord> = serde_json::from_str(raw)
            .map_err(|err| GatewayError::InvalidPayload(err.to_string()))?;
        Ok(Self::new(records))
    }

    pub fn insert(&self, unique_number: impl Into<String>, record: ClaimRecord) {
        if let Ok(mut guard) = self.records.write() {
            guard.insert(unique_number.into(), record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ClaimGateway for InMemoryClaimGateway {
    fn fetch(&self, unique_number: &str) -> Result<Option<ClaimRecord>, GatewayError> {
        let guard = self
            .records
            .read()
            .map_err(|_| GatewayError::Unavailable("claim store lock poisoned".to_string()))?;
        Ok(guard.get(unique_number).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_fixture_json() {
        let gateway = InMemoryClaimGateway::from_json(
            r#"{ "U-100": { "hasPendingWeeks": true }, "U-200": {} }"#,
        )
        .expect("fixture parses");

        assert_eq!(gateway.len(), 2);
        let record = gateway.fetch("U-100").expect("fetch ok").expect("record present");
        assert!(record.has_pending_weeks());
        assert!(gateway.fetch("U-999").expect("fetch ok").is_none());
    }

    #[test]
    fn rejects_malformed_fixture() {
        let err = InMemoryClaimGateway::from_json("[1, 2, 3]").expect_err("must fail");
        assert!(matches!(err, GatewayError::InvalidPayload(_)));
    }
}
