use crate::domain::{
    anthropometry::entities::{Gender, Goal},
    common::entities::app_errors::CoreError,
    plan::{
        entities::{PlanReport, Profile},
        value_objects::{AssessBmiInput, BmiAssessment, ProjectProgressInput},
    },
    progress::entities::ProgressProjection,
    recommendation::entities::{DietPreference, MealPlan},
};

/// Service trait for the profile-driven health plan
pub trait PlanService: Send + Sync {
    fn assess_bmi(&self, input: AssessBmiInput) -> Result<BmiAssessment, CoreError>;

    fn project_progress(&self, input: ProjectProgressInput)
    -> Result<ProgressProjection, CoreError>;

    fn meal_plan(&self, goal: Goal, diet: DietPreference, gender: Gender) -> MealPlan;

    fn exercises(&self, goal: Goal, gender: Gender) -> Vec<String>;

    fn build_plan(&self, profile: Profile) -> Result<PlanReport, CoreError>;
}
