use tracing::debug;

use crate::domain::{
    anthropometry::{
        entities::{Gender, Goal},
        services::assess_bmi,
    },
    chat::ports::{ChatSessionRepository, GenerativeModel},
    common::{entities::app_errors::CoreError, services::Service},
    plan::{
        entities::{ExerciseCard, MealCard, PlanReport, Profile},
        ports::PlanService,
        value_objects::{AssessBmiInput, BmiAssessment, ProjectProgressInput},
    },
    progress::{entities::ProgressProjection, services as progress_services},
    recommendation::{
        entities::{DietPreference, MealPlan},
        services::{exercise_image_url, meal_image_url, suggest_exercises, suggest_meal_plan},
    },
};

fn ensure_weight(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "{field} must be greater than zero"
        )))
    }
}

pub fn build_plan(profile: Profile) -> Result<PlanReport, CoreError> {
    profile.validate()?;

    let height_cm = profile.height.to_cm();
    let bmi = assess_bmi(profile.weight_kg, height_cm)?;

    let meals = suggest_meal_plan(bmi.goal, profile.diet, profile.gender)
        .iter()
        .map(|(slot, meal)| MealCard {
            slot,
            image_url: meal_image_url(&meal.food).to_string(),
            meal: meal.clone(),
        })
        .collect();

    let exercises = suggest_exercises(bmi.goal, profile.gender)
        .into_iter()
        .map(|suggestion| ExerciseCard {
            image_url: exercise_image_url(&suggestion).to_string(),
            suggestion,
        })
        .collect();

    Ok(PlanReport {
        summary: format!(
            "Your BMI is: {:.2} → {} ({})",
            bmi.bmi, bmi.category, profile.gender
        ),
        headline: format!(
            "Goal: {} (Target: {:?} kg)",
            bmi.goal, profile.target_weight_kg
        ),
        projection: progress_services::project_progress(
            profile.weight_kg,
            profile.target_weight_kg,
        ),
        profile,
        height_cm,
        bmi,
        meals,
        exercises,
    })
}

impl<LLM, CS> PlanService for Service<LLM, CS>
where
    LLM: GenerativeModel,
    CS: ChatSessionRepository,
{
    fn assess_bmi(&self, input: AssessBmiInput) -> Result<BmiAssessment, CoreError> {
        let height_cm = input.height.to_cm();
        let result = assess_bmi(input.weight_kg, height_cm)?;

        Ok(BmiAssessment { height_cm, result })
    }

    fn project_progress(
        &self,
        input: ProjectProgressInput,
    ) -> Result<ProgressProjection, CoreError> {
        ensure_weight("weight_kg", input.weight_kg)?;
        ensure_weight("target_weight_kg", input.target_weight_kg)?;

        Ok(progress_services::project_progress(
            input.weight_kg,
            input.target_weight_kg,
        ))
    }

    fn meal_plan(&self, goal: Goal, diet: DietPreference, gender: Gender) -> MealPlan {
        suggest_meal_plan(goal, diet, gender)
    }

    fn exercises(&self, goal: Goal, gender: Gender) -> Vec<String> {
        suggest_exercises(goal, gender)
    }

    fn build_plan(&self, profile: Profile) -> Result<PlanReport, CoreError> {
        let report = build_plan(profile)?;
        debug!(
            bmi = report.bmi.bmi,
            goal = %report.bmi.goal,
            days = report.projection.days,
            "built health plan"
        );

        Ok(report)
    }
}
