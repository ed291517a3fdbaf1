//! Plan service. Orchestrates the profile → plan workflow.
//!
//! Coordinates metric computation (domain), the generation adapter, and
//! report writing (filesystem).

use crate::domain::{
    metrics::compute_metrics, DomainError, MealPlan, NutritionMetrics, PlanRequest, UserProfile,
};
use crate::ports::GenerationPort;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::{info, warn};

/// Result of a full plan run: metrics shown alongside the raw plan text,
/// plus the path of the saved Markdown report. The report is best-effort:
/// a write failure must not discard an already generated plan, so the
/// path is None when saving failed.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub metrics: NutritionMetrics,
    pub plan: MealPlan,
    pub report_path: Option<PathBuf>,
}

/// Service for meal-plan generation.
///
/// Flow:
/// 1. Validate the profile
/// 2. Compute nutrition metrics
/// 3. Build the plan request prompt
/// 4. Call the generation port (one shot, no retry)
/// 5. Save a Markdown report
pub struct PlanService {
    generator: Arc<dyn GenerationPort>,
    reports_dir: PathBuf,
}

impl PlanService {
    /// Create a new plan service.
    ///
    /// # Arguments
    /// * `generator` - Generation port implementation (OpenAI, Mock, etc.)
    /// * `reports_dir` - Directory to save generated plan reports
    pub fn new(generator: Arc<dyn GenerationPort>, reports_dir: PathBuf) -> Self {
        Self {
            generator,
            reports_dir,
        }
    }

    /// Run the full flow for one profile.
    pub async fn create_plan(&self, profile: &UserProfile) -> Result<PlanOutcome, DomainError> {
        profile.validate()?;

        let metrics = compute_metrics(profile)?;
        info!(
            bmi = metrics.bmi,
            bmr = metrics.bmr,
            tdee = metrics.tdee,
            target = metrics.target_calories,
            "metrics computed"
        );

        let request = PlanRequest::build(profile, &metrics);
        let plan = self.generator.generate(&request).await?;

        let report_path = match self.write_report(profile, &metrics, &plan).await {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "report could not be saved, plan kept in memory");
                None
            }
        };

        info!(plan_days = profile.plan_days, "plan generated");

        Ok(PlanOutcome {
            metrics,
            plan,
            report_path,
        })
    }

    /// Save the plan as a Markdown report. Header carries the metrics;
    /// the body is the provider text verbatim.
    async fn write_report(
        &self,
        profile: &UserProfile,
        metrics: &NutritionMetrics,
        plan: &MealPlan,
    ) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to create reports dir: {}", e)))?;

        let timestamp = DateTime::<Utc>::from_timestamp(plan.generated_at, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let date_tag = DateTime::<Utc>::from_timestamp(plan.generated_at, 0)
            .map(|dt| dt.format("%Y%m%d_%H%M%S").to_string())
            .unwrap_or_else(|| "undated".to_string());

        let filename = format!("plan_{}_{}.md", slug(&profile.name), date_tag);
        let path = self.reports_dir.join(&filename);

        let mut md = String::new();
        md.push_str(&format!(
            "# NutriAI Meal Plan: {} ({} days)\n\n",
            profile.name, profile.plan_days
        ));
        md.push_str(&format!(
            "**Model:** {} | **Generated:** {}\n\n",
            plan.model, timestamp
        ));
        md.push_str("---\n\n");

        md.push_str("## Metrics\n\n");
        md.push_str(&format!("- **BMI:** {:.1}\n", metrics.bmi));
        md.push_str(&format!("- **BMR:** {:.0} kcal/day\n", metrics.bmr));
        md.push_str(&format!("- **TDEE:** {:.0} kcal/day\n", metrics.tdee));
        md.push_str(&format!(
            "- **Daily calorie target:** {:.0} kcal\n\n",
            metrics.target_calories
        ));

        md.push_str("## Plan\n\n");
        md.push_str(&plan.text);
        md.push_str("\n\n---\n*Generated by NutriAI*\n");

        fs::write(&path, md)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to write report: {}", e)))?;

        info!(path = %path.display(), "report saved");

        Ok(path)
    }
}

/// Filesystem-safe slug from a user name.
fn slug(name: &str) -> String {
    let s: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let trimmed = s.trim_matches('_');
    if trimmed.is_empty() {
        "user".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerationAdapter;
    use crate::domain::{
        ActivityLevel, Budget, DietaryPreference, Goal, MealFrequency, Sex, UserProfile,
    };

    fn profile() -> UserProfile {
        UserProfile {
            name: "Alex Johnson".into(),
            age: 30,
            sex: Sex::Male,
            height_cm: 175.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::ModeratelyActive,
            dietary_preference: DietaryPreference::None,
            allergies: vec!["nuts".into()],
            region: "Western Europe".into(),
            preferred_cuisines: vec![],
            meal_frequency: MealFrequency::ThreeMeals,
            goal: Goal::Maintain,
            budget: Budget::Medium,
            plan_days: 7,
        }
    }

    #[test]
    fn slug_sanitizes_names() {
        assert_eq!(slug("Alex Johnson"), "alex_johnson");
        assert_eq!(slug("  !!  "), "user");
    }

    #[tokio::test]
    async fn create_plan_writes_report_with_plan_text() {
        let dir = std::env::temp_dir().join(format!("nutriai_test_{}", std::process::id()));
        let adapter = Arc::new(MockGenerationAdapter::with_delay(10));
        let service = PlanService::new(adapter.clone(), dir.clone());

        let outcome = service.create_plan(&profile()).await.unwrap();

        assert!((outcome.metrics.bmi - 22.857).abs() < 0.01);
        let path = outcome.report_path.as_ref().unwrap();
        let saved = tokio::fs::read_to_string(path).await.unwrap();
        assert!(saved.contains(&outcome.plan.text));
        assert!(saved.contains("BMI"));
        assert_eq!(adapter.call_count(), 1);

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn report_write_failure_keeps_plan() {
        // Reports dir nested under a regular file: create_dir_all must fail.
        let blocker = std::env::temp_dir().join(format!(
            "nutriai_blocker_{}",
            std::process::id()
        ));
        tokio::fs::write(&blocker, b"").await.unwrap();
        let dir = blocker.join("reports");

        let adapter = Arc::new(MockGenerationAdapter::with_delay(10));
        let service = PlanService::new(adapter.clone(), dir);

        let outcome = service.create_plan(&profile()).await.unwrap();

        assert!(outcome.report_path.is_none());
        assert!(!outcome.plan.text.is_empty(), "plan text must survive");
        assert_eq!(adapter.call_count(), 1);

        let _ = tokio::fs::remove_file(&blocker).await;
    }

    #[tokio::test]
    async fn invalid_profile_rejected_before_generation() {
        let adapter = Arc::new(MockGenerationAdapter::with_delay(10));
        let service = PlanService::new(adapter.clone(), std::env::temp_dir());

        let mut p = profile();
        p.plan_days = 3;
        let err = service.create_plan(&p).await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(adapter.call_count(), 0, "generator must not be called");
    }

    #[tokio::test]
    async fn generation_failure_surfaced_without_retry() {
        let adapter = Arc::new(MockGenerationAdapter::failing(10));
        let service = PlanService::new(adapter.clone(), std::env::temp_dir());

        let err = service.create_plan(&profile()).await.unwrap_err();

        assert!(matches!(err, DomainError::Generation(_)));
        assert_eq!(adapter.call_count(), 1, "no retry expected");
    }
}
