use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const MIN_FEET: u8 = 1;
pub const MAX_FEET: u8 = 8;
pub const MAX_INCHES: u8 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Height as entered on the form, in feet and inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Height {
    pub feet: u8,
    pub inches: u8,
}

impl Height {
    pub fn new(feet: u8, inches: u8) -> Result<Self, CoreError> {
        if !(MIN_FEET..=MAX_FEET).contains(&feet) {
            return Err(CoreError::InvalidInput(format!(
                "feet must be between {MIN_FEET} and {MAX_FEET}"
            )));
        }

        if inches > MAX_INCHES {
            return Err(CoreError::InvalidInput(format!(
                "inches must be between 0 and {MAX_INCHES}"
            )));
        }

        Ok(Self { feet, inches })
    }

    pub fn to_cm(&self) -> f64 {
        super::services::convert_height_to_cm(self.feet.into(), self.inches.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Goal {
    #[serde(rename = "Weight Gain")]
    WeightGain,
    #[serde(rename = "Maintain Weight")]
    MaintainWeight,
    #[serde(rename = "Weight Loss")]
    WeightLoss,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightGain => "Weight Gain",
            Goal::MaintainWeight => "Maintain Weight",
            Goal::WeightLoss => "Weight Loss",
        }
    }

    pub fn all() -> [Goal; 3] {
        [Goal::WeightGain, Goal::MaintainWeight, Goal::WeightLoss]
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub goal: Goal,
}
