//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the profile → plan flow.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session (collect profile, generate, display).
    /// Returns when the user declines another plan.
    async fn run(&self) -> Result<(), DomainError>;
}
