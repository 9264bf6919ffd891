use crate::domain::{
    anthropometry::entities::{BmiCategory, BmiResult, Goal},
    common::entities::app_errors::CoreError,
};

pub const CM_PER_FOOT: f64 = 30.48;
pub const CM_PER_INCH: f64 = 2.54;

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_UP_TO: f64 = 24.9;
const OVERWEIGHT_FROM: f64 = 25.0;
const OVERWEIGHT_UP_TO: f64 = 29.9;

pub fn convert_height_to_cm(feet: u32, inches: u32) -> f64 {
    f64::from(feet) * CM_PER_FOOT + f64::from(inches) * CM_PER_INCH
}

pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, CoreError> {
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(CoreError::InvalidInput(
            "height must be greater than zero".to_string(),
        ));
    }

    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(CoreError::InvalidInput(
            "weight must be greater than zero".to_string(),
        ));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Published closed bands; anything outside them, including the (24.9, 25)
/// gap, is Obese.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi <= NORMAL_UP_TO {
        BmiCategory::NormalWeight
    } else if (OVERWEIGHT_FROM..=OVERWEIGHT_UP_TO).contains(&bmi) {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub fn derive_goal(bmi: f64) -> Goal {
    if bmi < UNDERWEIGHT_BELOW {
        Goal::WeightGain
    } else if bmi <= NORMAL_UP_TO {
        Goal::MaintainWeight
    } else {
        Goal::WeightLoss
    }
}

pub fn assess_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiResult, CoreError> {
    let bmi = calculate_bmi(weight_kg, height_cm)?;

    Ok(BmiResult {
        bmi,
        category: bmi_category(bmi),
        goal: derive_goal(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::anthropometry::entities::Height;

    #[test]
    fn test_convert_height_five_ten() {
        assert!((convert_height_to_cm(5, 10) - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_height_rejects_out_of_range() {
        assert!(Height::new(0, 5).is_err());
        assert!(Height::new(9, 0).is_err());
        assert!(Height::new(5, 12).is_err());
        assert!(Height::new(8, 11).is_ok());
    }

    #[test]
    fn test_calculate_bmi_known_value() {
        let bmi = calculate_bmi(70.0, 175.0).unwrap();
        assert!((bmi - 22.857142857).abs() < 1e-6);
    }

    #[test]
    fn test_calculate_bmi_guards_non_positive_height() {
        assert!(matches!(
            calculate_bmi(70.0, 0.0),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(calculate_bmi(70.0, -10.0).is_err());
        assert!(calculate_bmi(0.0, 170.0).is_err());
    }

    #[test]
    fn test_bmi_monotonic_in_height_and_weight() {
        let mut previous = f64::INFINITY;
        for height in (120..=220).step_by(5) {
            let bmi = calculate_bmi(80.0, f64::from(height)).unwrap();
            assert!(bmi < previous);
            previous = bmi;
        }

        let mut previous = 0.0;
        for weight in (10..=300).step_by(10) {
            let bmi = calculate_bmi(f64::from(weight), 170.0).unwrap();
            assert!(bmi > previous);
            previous = bmi;
        }
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(24.9), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(24.95), BmiCategory::Obese);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.9), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.95), BmiCategory::Obese);
        assert_eq!(bmi_category(42.0), BmiCategory::Obese);
    }

    #[test]
    fn test_gap_between_normal_and_overweight_is_obese() {
        let bmi = calculate_bmi(78.85, convert_height_to_cm(5, 10)).unwrap();
        assert!(bmi > 24.9 && bmi < 25.0);

        let result = assess_bmi(78.85, convert_height_to_cm(5, 10)).unwrap();
        assert_eq!(result.category, BmiCategory::Obese);
        assert_eq!(result.goal, Goal::WeightLoss);
    }

    #[test]
    fn test_goal_boundaries() {
        assert_eq!(derive_goal(18.49), Goal::WeightGain);
        assert_eq!(derive_goal(18.5), Goal::MaintainWeight);
        assert_eq!(derive_goal(24.9), Goal::MaintainWeight);
        assert_eq!(derive_goal(25.0), Goal::WeightLoss);
        assert_eq!(derive_goal(35.0), Goal::WeightLoss);
    }

    #[test]
    fn test_assess_bmi_combines_category_and_goal() {
        let result = assess_bmi(95.0, 175.0).unwrap();
        assert_eq!(result.category, BmiCategory::Obese);
        assert_eq!(result.goal, Goal::WeightLoss);
    }
}
