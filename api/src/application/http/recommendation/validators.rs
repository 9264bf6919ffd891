use ferrisfit_core::domain::{
    anthropometry::entities::{Gender, Goal},
    recommendation::entities::DietPreference,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MealPlanParams {
    #[param(example = "Weight Loss")]
    pub goal: Goal,
    #[param(example = "Vegetarian")]
    pub diet: DietPreference,
    #[param(example = "Female")]
    pub gender: Gender,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ExerciseParams {
    #[param(example = "Weight Gain")]
    pub goal: Goal,
    #[param(example = "Male")]
    pub gender: Gender,
}
