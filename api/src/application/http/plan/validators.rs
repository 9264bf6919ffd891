use ferrisfit_core::domain::{
    anthropometry::entities::{Gender, Height},
    plan::entities::Profile,
    recommendation::entities::DietPreference,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ConvertHeightRequest {
    #[validate(range(min = 1, max = 8, message = "feet must be between 1 and 8"))]
    pub feet: u8,

    #[validate(range(max = 11, message = "inches must be between 0 and 11"))]
    pub inches: u8,
}

impl ConvertHeightRequest {
    pub fn height(&self) -> Height {
        Height {
            feet: self.feet,
            inches: self.inches,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AssessBmiRequest {
    #[validate(range(min = 1, max = 8, message = "feet must be between 1 and 8"))]
    pub feet: u8,

    #[validate(range(max = 11, message = "inches must be between 0 and 11"))]
    pub inches: u8,

    #[validate(range(
        min = 10.0,
        max = 300.0,
        message = "weight_kg must be between 10 and 300"
    ))]
    pub weight_kg: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProjectProgressRequest {
    #[validate(range(
        min = 10.0,
        max = 300.0,
        message = "weight_kg must be between 10 and 300"
    ))]
    pub weight_kg: f64,

    #[validate(range(
        min = 10.0,
        max = 300.0,
        message = "target_weight_kg must be between 10 and 300"
    ))]
    pub target_weight_kg: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePlanRequest {
    #[validate(range(min = 5, max = 100, message = "age must be between 5 and 100"))]
    pub age: u8,

    pub gender: Gender,

    #[validate(range(min = 1, max = 8, message = "feet must be between 1 and 8"))]
    pub feet: u8,

    #[validate(range(max = 11, message = "inches must be between 0 and 11"))]
    pub inches: u8,

    #[validate(range(
        min = 10.0,
        max = 300.0,
        message = "weight_kg must be between 10 and 300"
    ))]
    pub weight_kg: f64,

    #[validate(range(
        min = 10.0,
        max = 300.0,
        message = "target_weight_kg must be between 10 and 300"
    ))]
    pub target_weight_kg: f64,

    pub diet: DietPreference,
}

impl From<CreatePlanRequest> for Profile {
    fn from(request: CreatePlanRequest) -> Self {
        Profile {
            age: request.age,
            gender: request.gender,
            height: Height {
                feet: request.feet,
                inches: request.inches,
            },
            weight_kg: request.weight_kg,
            target_weight_kg: request.target_weight_kg,
            diet: request.diet,
        }
    }
}
