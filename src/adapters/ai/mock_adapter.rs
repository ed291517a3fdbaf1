//! Mock generation adapter for testing without API calls.
//!
//! Returns a deterministic plan built from the request, so presence
//! checks against the prompt are possible. Can be switched into a
//! failure mode to exercise the error path.

use crate::domain::{DomainError, MealPlan, PlanRequest};
use crate::ports::GenerationPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::info;

/// Mock generation adapter.
///
/// Simulates network latency with a configurable delay and counts calls
/// so tests can assert that no retry happens.
pub struct MockGenerationAdapter {
    delay_ms: u64,
    fail: bool,
    calls: AtomicUsize,
}

impl MockGenerationAdapter {
    /// Create a mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self {
            delay_ms: 100,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock adapter that fails every call (simulated timeout).
    pub fn failing(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGenerationAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GenerationPort for MockGenerationAdapter {
    async fn generate(&self, request: &PlanRequest) -> Result<MealPlan, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        info!(
            plan_days = request.plan_days,
            prompt_len = request.prompt.len(),
            "[MOCK] Simulating plan generation"
        );

        // Simulate network delay
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        if self.fail {
            return Err(DomainError::Generation(
                "[MOCK] simulated provider timeout".to_string(),
            ));
        }

        let generated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        let mut text = format!(
            "[MOCK] Personalized {}-day meal plan.\n\n\
             In a real run the provider would return a day-by-day plan here, \
             honoring the profile below.\n\n",
            request.plan_days
        );
        text.push_str("--- Request echo ---\n");
        text.push_str(&request.prompt);

        Ok(MealPlan {
            text,
            model: "mock".to_string(),
            generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PlanRequest {
        PlanRequest {
            prompt: "=== USER PROFILE ===\n- Name: Test User\n".to_string(),
            plan_days: 7,
        }
    }

    #[tokio::test]
    async fn mock_echoes_request() {
        let adapter = MockGenerationAdapter::with_delay(10);
        let plan = adapter.generate(&request()).await.unwrap();

        assert!(plan.text.contains("7-day"));
        assert!(plan.text.contains("Test User"));
        assert_eq!(plan.model, "mock");
        assert_eq!(adapter.call_count(), 1);
    }

    #[tokio::test]
    async fn failing_mock_surfaces_generation_error() {
        let adapter = MockGenerationAdapter::failing(10);
        let err = adapter.generate(&request()).await.unwrap_err();
        assert!(matches!(err, DomainError::Generation(_)));
        assert_eq!(adapter.call_count(), 1);
    }
}
