use crate::domain::progress::entities::{
    ChartAnnotation, ProgressChart, ProgressProjection, ProjectionStatus, TrajectoryPoint,
};

/// Assumed daily caloric deficit (or surplus) in kcal.
pub const DAILY_CALORIE_DEFICIT: f64 = 500.0;

/// Energy content of one kilogram of body mass, in kcal.
pub const KCAL_PER_KG: f64 = 7700.0;

pub fn predict_days_to_target(weight_kg: f64, target_weight_kg: f64) -> u32 {
    if weight_kg == target_weight_kg {
        return 0;
    }

    let total_kcal = (weight_kg - target_weight_kg).abs() * KCAL_PER_KG;
    // Saturating float-to-int cast; the input ranges keep this far below u32::MAX.
    (total_kcal / DAILY_CALORIE_DEFICIT).floor() as u32
}

/// Linear interpolation from the current weight to the target, one point per day.
pub fn weight_trajectory(weight_kg: f64, target_weight_kg: f64, days: u32) -> Vec<TrajectoryPoint> {
    if days == 0 {
        return Vec::new();
    }

    let delta = weight_kg - target_weight_kg;
    (0..=days)
        .map(|day| TrajectoryPoint {
            day,
            weight_kg: weight_kg - (f64::from(day) / f64::from(days)) * delta,
        })
        .collect()
}

pub fn project_progress(weight_kg: f64, target_weight_kg: f64) -> ProgressProjection {
    let days = predict_days_to_target(weight_kg, target_weight_kg);

    let status = if weight_kg == target_weight_kg {
        ProjectionStatus::AtTarget
    } else if days == 0 {
        ProjectionStatus::NegligibleGap
    } else if weight_kg > target_weight_kg {
        ProjectionStatus::Losing
    } else {
        ProjectionStatus::Gaining
    };

    let (message, chart) = match status {
        ProjectionStatus::AtTarget => ("You are already at your target weight ✅".to_string(), None),
        ProjectionStatus::NegligibleGap => (
            "You are already effectively at your target weight ✅".to_string(),
            None,
        ),
        ProjectionStatus::Losing | ProjectionStatus::Gaining => (
            format!("Estimated time to reach target: {days} days"),
            Some(progress_chart(weight_kg, target_weight_kg, days)),
        ),
    };

    ProgressProjection {
        status,
        current_weight_kg: weight_kg,
        target_weight_kg,
        days,
        message,
        trajectory: weight_trajectory(weight_kg, target_weight_kg, days),
        chart,
    }
}

fn progress_chart(weight_kg: f64, target_weight_kg: f64, days: u32) -> ProgressChart {
    ProgressChart {
        title: format!("Predicted Weight Progress (Target in {days} days)"),
        x_label: "Days".to_string(),
        y_label: "Weight (kg)".to_string(),
        start: ChartAnnotation {
            day: 0,
            weight_kg,
            label: format!("Start: {weight_kg:?}kg"),
        },
        target: ChartAnnotation {
            day: days,
            weight_kg: target_weight_kg,
            label: format!("Target: {target_weight_kg:?}kg"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_for_ten_kg_loss() {
        assert_eq!(predict_days_to_target(80.0, 70.0), 154);
    }

    #[test]
    fn test_days_symmetric_for_gain() {
        assert_eq!(predict_days_to_target(70.0, 80.0), 154);
    }

    #[test]
    fn test_days_zero_when_equal() {
        assert_eq!(predict_days_to_target(70.0, 70.0), 0);
    }

    #[test]
    fn test_trajectory_endpoints_and_monotonic() {
        let projection = project_progress(80.0, 70.0);
        assert_eq!(projection.status, ProjectionStatus::Losing);
        assert_eq!(projection.days, 154);
        assert_eq!(projection.trajectory.len(), 155);

        let first = projection.trajectory.first().unwrap();
        let last = projection.trajectory.last().unwrap();
        assert_eq!(first.day, 0);
        assert!((first.weight_kg - 80.0).abs() < 1e-9);
        assert_eq!(last.day, 154);
        assert!((last.weight_kg - 70.0).abs() < 1e-9);

        for pair in projection.trajectory.windows(2) {
            assert!(pair[1].weight_kg < pair[0].weight_kg);
        }

        let steps: Vec<f64> = projection
            .trajectory
            .windows(2)
            .map(|pair| pair[0].weight_kg - pair[1].weight_kg)
            .collect();
        for step in &steps {
            assert!((step - steps[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gaining_projection_rises() {
        let projection = project_progress(60.0, 62.0);
        assert_eq!(projection.status, ProjectionStatus::Gaining);
        assert_eq!(projection.days, 30);
        let last = projection.trajectory.last().unwrap();
        assert!((last.weight_kg - 62.0).abs() < 1e-9);
    }

    #[test]
    fn test_at_target_has_no_timeline() {
        let projection = project_progress(70.0, 70.0);
        assert_eq!(projection.status, ProjectionStatus::AtTarget);
        assert_eq!(projection.days, 0);
        assert!(projection.trajectory.is_empty());
        assert!(projection.chart.is_none());
    }

    #[test]
    fn test_negligible_gap_is_distinct_from_at_target() {
        let projection = project_progress(70.05, 70.0);
        assert_eq!(projection.days, 0);
        assert_eq!(projection.status, ProjectionStatus::NegligibleGap);
        assert!(projection.trajectory.is_empty());
    }

    #[test]
    fn test_chart_annotations() {
        let projection = project_progress(80.0, 70.0);
        let chart = projection.chart.unwrap();
        assert_eq!(chart.title, "Predicted Weight Progress (Target in 154 days)");
        assert_eq!(chart.start.label, "Start: 80.0kg");
        assert_eq!(chart.target.label, "Target: 70.0kg");
        assert_eq!(chart.target.day, 154);
    }
}
