//! Metric calculator. Pure functions over a validated profile.
//!
//! BMR uses the Mifflin-St Jeor equation (1990); activity factors follow
//! McArdle et al. (2010). Coefficients live in explicit mapping tables so
//! they can be audited and tested in one place.

use crate::domain::{ActivityLevel, DomainError, Goal, NutritionMetrics, Sex, UserProfile};

/// Mifflin-St Jeor coefficients: BMR = 10·kg + 6.25·cm − 5·age + sex constant.
const MSJ_WEIGHT_COEF: f64 = 10.0;
const MSJ_HEIGHT_COEF: f64 = 6.25;
const MSJ_AGE_COEF: f64 = 5.0;
const MSJ_MALE_CONSTANT: f64 = 5.0;
const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// TDEE multiplier per activity level (McArdle factors).
const ACTIVITY_FACTORS: [(ActivityLevel, f64); 5] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::LightlyActive, 1.375),
    (ActivityLevel::ModeratelyActive, 1.55),
    (ActivityLevel::VeryActive, 1.725),
    (ActivityLevel::ExtraActive, 1.9),
];

/// Calorie-target multiplier per goal: 15% deficit to lose, 15% surplus
/// to gain, unchanged to maintain.
const GOAL_MULTIPLIERS: [(Goal, f64); 3] = [
    (Goal::LoseWeight, 0.85),
    (Goal::Maintain, 1.0),
    (Goal::GainWeight, 1.15),
];

/// TDEE multiplier for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    ACTIVITY_FACTORS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, f)| *f)
        .unwrap_or(1.0)
}

/// Calorie adjustment multiplier for a goal.
pub fn goal_multiplier(goal: Goal) -> f64 {
    GOAL_MULTIPLIERS
        .iter()
        .find(|(g, _)| *g == goal)
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

/// Body Mass Index. Height is normalized from cm to meters before squaring.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, DomainError> {
    if !(weight_kg > 0.0) {
        return Err(DomainError::InvalidInput(
            "weight must be positive (kg)".into(),
        ));
    }
    if !(height_cm > 0.0) {
        return Err(DomainError::InvalidInput(
            "height must be positive (cm)".into(),
        ));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Basal Metabolic Rate via Mifflin-St Jeor (kcal/day).
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> Result<f64, DomainError> {
    if !(weight_kg > 0.0) || !(height_cm > 0.0) {
        return Err(DomainError::InvalidInput(
            "weight and height must be positive".into(),
        ));
    }
    if age == 0 {
        return Err(DomainError::InvalidInput("age must be positive".into()));
    }
    let sex_constant = match sex {
        Sex::Male => MSJ_MALE_CONSTANT,
        Sex::Female => MSJ_FEMALE_CONSTANT,
    };
    Ok(MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * f64::from(age)
        + sex_constant)
}

/// Derive all metrics from a profile. Deterministic, no side effects.
/// Validation runs first so invalid numerics fail with `InvalidInput`
/// rather than propagating a non-finite value.
pub fn compute_metrics(profile: &UserProfile) -> Result<NutritionMetrics, DomainError> {
    profile.validate()?;

    let bmi = bmi(profile.weight_kg, profile.height_cm)?;
    let bmr = bmr(profile.weight_kg, profile.height_cm, profile.age, profile.sex)?;
    let tdee = bmr * activity_factor(profile.activity_level);
    let target_calories = tdee * goal_multiplier(profile.goal);

    Ok(NutritionMetrics {
        bmi,
        bmr,
        tdee,
        target_calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Budget, DietaryPreference, MealFrequency};

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
    fn bmi_reference_value() {
        // 70 kg at 175 cm ≈ 22.86
        let v = bmi(70.0, 175.0).unwrap();
        assert!((v - 22.857).abs() < 0.01, "got {v}");
    }

    #[test]
    fn bmi_zero_height_is_invalid_not_infinite() {
        assert!(matches!(
            bmi(70.0, 0.0),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn bmr_male_known_value() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        let v = bmr(70.0, 175.0, 30, Sex::Male).unwrap();
        assert!((v - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn bmr_female_known_value() {
        // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25
        let v = bmr(60.0, 165.0, 25, Sex::Female).unwrap();
        assert!((v - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn activity_factors_table() {
        assert_eq!(activity_factor(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_factor(ActivityLevel::LightlyActive), 1.375);
        assert_eq!(activity_factor(ActivityLevel::ModeratelyActive), 1.55);
        assert_eq!(activity_factor(ActivityLevel::VeryActive), 1.725);
        assert_eq!(activity_factor(ActivityLevel::ExtraActive), 1.9);
    }

    #[test]
    fn goal_multipliers_table() {
        assert_eq!(goal_multiplier(Goal::LoseWeight), 0.85);
        assert_eq!(goal_multiplier(Goal::Maintain), 1.0);
        assert_eq!(goal_multiplier(Goal::GainWeight), 1.15);
    }

    #[test]
    fn compute_metrics_deterministic() {
        let p = profile();
        let a = compute_metrics(&p).unwrap();
        let b = compute_metrics(&p).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn compute_metrics_chains_formulas() {
        let m = compute_metrics(&profile()).unwrap();
        assert!((m.bmr - 1648.75).abs() < 1e-9);
        assert!((m.tdee - 1648.75 * 1.55).abs() < 1e-9);
        // Maintain: target equals TDEE
        assert!((m.target_calories - m.tdee).abs() < 1e-9);
        assert!(m.bmi.is_finite());
    }

    #[test]
    fn lose_goal_applies_deficit() {
        let mut p = profile();
        p.goal = Goal::LoseWeight;
        let m = compute_metrics(&p).unwrap();
        assert!((m.target_calories - m.tdee * 0.85).abs() < 1e-9);
    }

    #[test]
    fn invalid_profile_fails_before_division() {
        let mut p = profile();
        p.height_cm = 0.0;
        assert!(matches!(
            compute_metrics(&p),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
