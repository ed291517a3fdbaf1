//! Plan request builder. Serializes profile + metrics into the prompt
//! sent to the generation provider.
//!
//! The layout is stable and human-readable; every profile field value
//! appears verbatim so the provider sees exactly what the user entered.

use crate::domain::{NutritionMetrics, UserProfile};

/// A one-shot prompt for the generation provider. Consumed exactly once;
/// never persisted.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub prompt: String,
    /// Days the plan should cover, echoed for logging.
    pub plan_days: u32,
}

impl PlanRequest {
    /// Build the prompt from a profile and its derived metrics.
    pub fn build(profile: &UserProfile, metrics: &NutritionMetrics) -> Self {
        let mut p = String::with_capacity(1024);

        p.push_str(&format!(
            "You are NutriAI, an advanced AI nutritionist. Generate a personalized \
             {}-day diet plan.\n\n",
            profile.plan_days
        ));

        p.push_str("=== USER PROFILE ===\n");
        p.push_str(&format!("- Name: {}\n", profile.name));
        p.push_str(&format!("- Age: {}\n", profile.age));
        p.push_str(&format!("- Sex: {}\n", profile.sex));
        p.push_str(&format!("- Weight: {} kg\n", profile.weight_kg));
        p.push_str(&format!("- Height: {} cm\n", profile.height_cm));
        p.push_str(&format!("- Activity: {}\n", profile.activity_level));
        p.push_str(&format!("- Goal: {}\n", profile.goal));
        p.push_str(&format!("- Preference: {}\n", profile.dietary_preference));
        p.push_str(&format!("- Allergies: {}\n", profile.allergies_display()));
        p.push_str(&format!("- Region: {}\n", profile.region));
        p.push_str(&format!("- Cuisines: {}\n", profile.cuisines_display()));
        p.push_str(&format!("- Budget: {}\n", profile.budget));
        p.push_str(&format!("- Meal Frequency: {}\n", profile.meal_frequency));

        p.push_str("\n=== COMPUTED METRICS ===\n");
        p.push_str(&format!("- BMI: {:.1}\n", metrics.bmi));
        p.push_str(&format!("- BMR: {:.0} kcal/day\n", metrics.bmr));
        p.push_str(&format!("- TDEE: {:.0} kcal/day\n", metrics.tdee));
        p.push_str(&format!(
            "- Daily calorie target: {:.0} kcal\n",
            metrics.target_calories
        ));

        p.push_str(&format!(
            "\n=== REGIONAL CONSIDERATIONS ===\n\
             Incorporate authentic and regionally appropriate foods based on the user's \
             region ({}). Focus on locally available ingredients and traditional cooking \
             methods common in that area.\n",
            profile.region
        ));

        p.push_str(&format!(
            "\n=== OUTPUT ===\n\
             Produce a day-by-day plan for all {} days. For each day list every meal \
             per the meal frequency with a short description, key ingredients, and \
             approximate calories, keeping daily totals near the calorie target. \
             Finish with a consolidated shopping list and general recommendations. \
             Respect the stated allergies and dietary preference strictly.\n",
            profile.plan_days
        ));

        Self {
            prompt: p,
            plan_days: profile.plan_days,
        }
    }
}
