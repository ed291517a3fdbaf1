//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Allowed range for the plan duration in days.
pub const PLAN_DAYS_MIN: u32 = 7;
pub const PLAN_DAYS_MAX: u32 = 28;

/// Biological sex, as required by the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Physical activity level. Keys the TDEE multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "Sedentary (little to no exercise)"),
            Self::LightlyActive => write!(f, "Lightly Active (light exercise 1-3 days/week)"),
            Self::ModeratelyActive => {
                write!(f, "Moderately Active (moderate exercise 3-5 days/week)")
            }
            Self::VeryActive => write!(f, "Very Active (hard exercise 6-7 days/week)"),
            Self::ExtraActive => write!(f, "Extremely Active (very hard exercise & physical job)"),
        }
    }
}

/// Dietary preference. Feeds the prompt, not the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    None,
    Vegetarian,
    Vegan,
    Pescatarian,
    Flexitarian,
}

impl DietaryPreference {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Vegetarian,
        Self::Vegan,
        Self::Pescatarian,
        Self::Flexitarian,
    ];
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Vegetarian => write!(f, "Vegetarian"),
            Self::Vegan => write!(f, "Vegan"),
            Self::Pescatarian => write!(f, "Pescatarian"),
            Self::Flexitarian => write!(f, "Flexitarian"),
        }
    }
}

/// Weight goal. Keys the calorie-target offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainWeight,
}

impl Goal {
    pub const ALL: [Self; 3] = [Self::LoseWeight, Self::Maintain, Self::GainWeight];
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoseWeight => write!(f, "Weight Loss"),
            Self::Maintain => write!(f, "Maintain Weight"),
            Self::GainWeight => write!(f, "Weight Gain"),
        }
    }
}

/// Grocery budget bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// How many meals/snacks per day the plan should schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealFrequency {
    ThreeMeals,
    ThreeMealsOneSnack,
    ThreeMealsTwoSnacks,
    SmallFrequentMeals,
}

impl MealFrequency {
    pub const ALL: [Self; 4] = [
        Self::ThreeMeals,
        Self::ThreeMealsOneSnack,
        Self::ThreeMealsTwoSnacks,
        Self::SmallFrequentMeals,
    ];
}

impl std::fmt::Display for MealFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThreeMeals => write!(f, "3 meals"),
            Self::ThreeMealsOneSnack => write!(f, "3 meals + 1 snack"),
            Self::ThreeMealsTwoSnacks => write!(f, "3 meals + 2 snacks"),
            Self::SmallFrequentMeals => write!(f, "5-6 small meals"),
        }
    }
}

/// A user's health/diet profile. Built once per session from the form,
/// immutable afterwards. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    pub allergies: Vec<String>,
    pub region: String,
    pub preferred_cuisines: Vec<String>,
    pub meal_frequency: MealFrequency,
    pub goal: Goal,
    pub budget: Budget,
    pub plan_days: u32,
}

impl UserProfile {
    /// Check field invariants: positive numerics, plan duration within
    /// [PLAN_DAYS_MIN, PLAN_DAYS_MAX]. The metric formulas assume this
    /// has passed; callers re-prompt on failure.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.age == 0 {
            return Err(DomainError::InvalidInput("age must be positive".into()));
        }
        if !(self.height_cm > 0.0) {
            return Err(DomainError::InvalidInput(
                "height must be positive (cm)".into(),
            ));
        }
        if !(self.weight_kg > 0.0) {
            return Err(DomainError::InvalidInput(
                "weight must be positive (kg)".into(),
            ));
        }
        if !(PLAN_DAYS_MIN..=PLAN_DAYS_MAX).contains(&self.plan_days) {
            return Err(DomainError::InvalidInput(format!(
                "plan duration must be between {} and {} days, got {}",
                PLAN_DAYS_MIN, PLAN_DAYS_MAX, self.plan_days
            )));
        }
        Ok(())
    }

    /// Allergies rendered for the prompt ("None" when empty).
    pub fn allergies_display(&self) -> String {
        if self.allergies.is_empty() {
            "None".to_string()
        } else {
            self.allergies.join(", ")
        }
    }

    /// Preferred cuisines rendered for the prompt ("Any" when empty).
    pub fn cuisines_display(&self) -> String {
        if self.preferred_cuisines.is_empty() {
            "Any".to_string()
        } else {
            self.preferred_cuisines.join(", ")
        }
    }
}

/// Derived nutrition metrics. Recomputed deterministically from a profile,
/// never mutated independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionMetrics {
    /// Body Mass Index: weight_kg / height_m².
    pub bmi: f64,
    /// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor.
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day): BMR × activity factor.
    pub tdee: f64,
    /// Daily calorie target: TDEE adjusted for the weight goal.
    pub target_calories: f64,
}

/// A meal plan as returned by the generation provider. The text is kept
/// verbatim; no parsing or validation is applied to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub text: String,
    pub model: String,
    /// Unix timestamp of generation.
    pub generated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Alex Johnson".into(),
            age: 30,
            sex: Sex::Male,
            height_cm: 175.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::ModeratelyActive,
            dietary_preference: DietaryPreference::None,
            allergies: vec![],
            region: "Western Europe".into(),
            preferred_cuisines: vec![],
            meal_frequency: MealFrequency::ThreeMeals,
            goal: Goal::Maintain,
            budget: Budget::Medium,
            plan_days: 7,
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn plan_days_bounds() {
        let mut p = profile();
        p.plan_days = 3;
        assert!(matches!(p.validate(), Err(DomainError::InvalidInput(_))));
        p.plan_days = 7;
        assert!(p.validate().is_ok());
        p.plan_days = 28;
        assert!(p.validate().is_ok());
        p.plan_days = 29;
        assert!(p.validate().is_err());
    }

    #[test]
    fn zero_height_rejected() {
        let mut p = profile();
        p.height_cm = 0.0;
        assert!(matches!(p.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn zero_weight_rejected() {
        let mut p = profile();
        p.weight_kg = 0.0;
        assert!(matches!(p.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn empty_allergies_display_none() {
        assert_eq!(profile().allergies_display(), "None");
        let mut p = profile();
        p.allergies = vec!["nuts".into(), "shellfish".into()];
        assert_eq!(p.allergies_display(), "nuts, shellfish");
    }
}
