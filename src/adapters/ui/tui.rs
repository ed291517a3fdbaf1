//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Collects the health profile, runs the plan service, and prints the
//! metrics and the raw plan text. Re-prompts the form on invalid input.

use crate::domain::{
    ActivityLevel, Budget, DietaryPreference, DomainError, Goal, MealFrequency, Sex, UserProfile,
    PLAN_DAYS_MAX, PLAN_DAYS_MIN,
};
use crate::ports::InputPort;
use crate::usecases::{PlanOutcome, PlanService};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, CustomType, MultiSelect, Select, Text};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

const REGIONS: [&str; 11] = [
    "North America",
    "South America",
    "Western Europe",
    "Eastern Europe",
    "Mediterranean",
    "Middle East",
    "South Asia",
    "East Asia",
    "Southeast Asia",
    "Africa",
    "Australia/Oceania",
];

const CUISINES: [&str; 10] = [
    "Mediterranean",
    "Asian",
    "Indian",
    "Mexican",
    "American",
    "European",
    "Middle Eastern",
    "African",
    "Caribbean",
    "Latin American",
];

fn input_err(e: inquire::InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    plan_service: Arc<PlanService>,
}

impl TuiInputPort {
    pub fn new(plan_service: Arc<PlanService>) -> Self {
        Self { plan_service }
    }

    /// One pass over the form. Field-level parsing is handled by inquire;
    /// cross-field invariants are checked by the caller via `validate`.
    fn collect_profile(&self) -> Result<UserProfile, DomainError> {
        let name = Text::new("Full name:")
            .with_placeholder("Alex Johnson")
            .prompt()
            .map_err(input_err)?;

        let age = CustomType::<u32>::new("Age (years):")
            .with_error_message("Please enter a whole number")
            .prompt()
            .map_err(input_err)?;

        let sex = Select::new("Sex:", vec![Sex::Male, Sex::Female])
            .prompt()
            .map_err(input_err)?;

        let height_cm = CustomType::<f64>::new("Height (cm):")
            .with_error_message("Please enter a number")
            .prompt()
            .map_err(input_err)?;

        let weight_kg = CustomType::<f64>::new("Weight (kg):")
            .with_error_message("Please enter a number")
            .prompt()
            .map_err(input_err)?;

        let activity_level = Select::new("Activity level:", ActivityLevel::ALL.to_vec())
            .prompt()
            .map_err(input_err)?;

        let dietary_preference =
            Select::new("Dietary preference:", DietaryPreference::ALL.to_vec())
                .prompt()
                .map_err(input_err)?;

        let allergies_raw = Text::new("Food restrictions/allergies (comma-separated, empty for none):")
            .with_placeholder("e.g., nuts, shellfish")
            .prompt()
            .map_err(input_err)?;
        let allergies: Vec<String> = allergies_raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let region = Select::new("Your region:", REGIONS.to_vec())
            .prompt()
            .map_err(input_err)?
            .to_string();

        let preferred_cuisines = MultiSelect::new("Preferred cuisines:", CUISINES.to_vec())
            .prompt()
            .map_err(input_err)?
            .into_iter()
            .map(str::to_string)
            .collect();

        let meal_frequency = Select::new("Meal frequency:", MealFrequency::ALL.to_vec())
            .prompt()
            .map_err(input_err)?;

        let goal = Select::new("Primary goal:", Goal::ALL.to_vec())
            .prompt()
            .map_err(input_err)?;

        let budget = Select::new("Budget:", Budget::ALL.to_vec())
            .prompt()
            .map_err(input_err)?;

        let plan_days = CustomType::<u32>::new(&format!(
            "Plan duration in days ({}-{}):",
            PLAN_DAYS_MIN, PLAN_DAYS_MAX
        ))
        .with_default(7)
        .with_error_message("Please enter a whole number")
        .prompt()
        .map_err(input_err)?;

        Ok(UserProfile {
            name,
            age,
            sex,
            height_cm,
            weight_kg,
            activity_level,
            dietary_preference,
            allergies,
            region,
            preferred_cuisines,
            meal_frequency,
            goal,
            budget,
            plan_days,
        })
    }

    /// Collect until the profile passes validation. Invalid input is
    /// reported and the form restarts; prompt failures abort.
    fn collect_valid_profile(&self) -> Result<UserProfile, DomainError> {
        loop {
            let profile = self.collect_profile()?;
            match profile.validate() {
                Ok(()) => return Ok(profile),
                Err(DomainError::InvalidInput(msg)) => {
                    warn!(%msg, "profile rejected");
                    println!("\nInvalid input: {}. Let's try again.\n", msg);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_outcome(outcome: &PlanOutcome) {
        let m = &outcome.metrics;
        println!("\n=== Your Nutrition Dashboard ===");
        println!("  BMI:            {:.1}", m.bmi);
        println!("  BMR:            {:.0} kcal/day", m.bmr);
        println!("  TDEE:           {:.0} kcal/day", m.tdee);
        println!("  Calorie target: {:.0} kcal/day", m.target_calories);
        println!("\n=== Your Meal Plan ===\n");
        println!("{}", outcome.plan.text);
        match &outcome.report_path {
            Some(path) => println!("\nSaved to {}", path.display()),
            None => println!("\nThe plan could not be saved to disk; copy it from above."),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let profile = self.collect_valid_profile()?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Analyzing your profile and creating your personalized plan...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = self.plan_service.create_plan(&profile).await;
            spinner.finish_and_clear();

            match result {
                Ok(outcome) => Self::print_outcome(&outcome),
                // Single failure message, no automatic retry; the user
                // may re-submit via the loop below.
                Err(DomainError::Generation(msg)) => {
                    println!("\nPlan generation failed: {}", msg);
                    println!("Check your API key and network, then try again.");
                }
                Err(e) => return Err(e),
            }

            let again = Confirm::new("Generate another plan?")
                .with_default(false)
                .prompt()
                .map_err(input_err)?;
            if !again {
                return Ok(());
            }
        }
    }
}
