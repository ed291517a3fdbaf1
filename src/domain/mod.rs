//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod metrics;
pub mod prompt;

pub use entities::{
    ActivityLevel, Budget, DietaryPreference, Goal, MealFrequency, MealPlan, NutritionMetrics,
    Sex, UserProfile, PLAN_DAYS_MAX, PLAN_DAYS_MIN,
};
pub use errors::DomainError;
pub use prompt::PlanRequest;
