use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::anthropometry::entities::{BmiResult, Height};

#[derive(Debug, Clone, Copy)]
pub struct AssessBmiInput {
    pub height: Height,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BmiAssessment {
    pub height_cm: f64,
    #[serde(flatten)]
    pub result: BmiResult,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectProgressInput {
    pub weight_kg: f64,
    pub target_weight_kg: f64,
}
