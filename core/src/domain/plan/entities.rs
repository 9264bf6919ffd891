use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    anthropometry::entities::{BmiResult, Gender, Height},
    common::entities::app_errors::CoreError,
    progress::entities::ProgressProjection,
    recommendation::entities::{DietPreference, MealEntry, MealSlot},
};

pub const MIN_AGE: u8 = 5;
pub const MAX_AGE: u8 = 100;
pub const MIN_WEIGHT_KG: f64 = 10.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub age: u8,
    pub gender: Gender,
    pub height: Height,
    pub weight_kg: f64,
    pub target_weight_kg: f64,
    pub diet: DietPreference,
}

impl Profile {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(CoreError::InvalidInput(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }

        Height::new(self.height.feet, self.height.inches)?;

        for (field, value) in [
            ("weight_kg", self.weight_kg),
            ("target_weight_kg", self.target_weight_kg),
        ] {
            if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&value) {
                return Err(CoreError::InvalidInput(format!(
                    "{field} must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG}"
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealCard {
    pub slot: MealSlot,
    pub meal: MealEntry,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseCard {
    pub suggestion: String,
    pub image_url: String,
}

/// Everything shown after the user submits their profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanReport {
    pub profile: Profile,
    pub height_cm: f64,
    pub bmi: BmiResult,
    pub summary: String,
    pub headline: String,
    pub meals: Vec<MealCard>,
    pub exercises: Vec<ExerciseCard>,
    pub projection: ProgressProjection,
}
