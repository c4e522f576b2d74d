//! Claim status page assembly: gateway seam, service facade and HTTP routes.

pub mod details;
pub mod gateway;
pub mod router;
pub mod service;
pub mod view;

#[cfg(test)]
mod tests;

pub use details::{format_currency, ClaimDetailsView, ProgramType};
pub use gateway::{ClaimGateway, GatewayError, InMemoryClaimGateway};
pub use router::{claim_status_router, EvaluateRequest};
pub use service::{ClaimStatusError, ClaimStatusService};
pub use view::{AppointmentView, ClaimStatusView};
