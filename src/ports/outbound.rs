//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, MealPlan, PlanRequest};

/// Text-generation gateway. One-shot request/response, no retry policy:
/// any transport, auth, or provider failure maps to
/// `DomainError::Generation` and is surfaced to the caller unchanged.
#[async_trait::async_trait]
pub trait GenerationPort: Send + Sync {
    /// Send the plan request and return the provider's raw text output.
    async fn generate(&self, request: &PlanRequest) -> Result<MealPlan, DomainError>;
}
