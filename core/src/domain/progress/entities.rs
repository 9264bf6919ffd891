use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionStatus {
    /// Current weight equals the target.
    AtTarget,
    /// The gap is smaller than one day of deficit, so no timeline is drawn.
    NegligibleGap,
    Losing,
    Gaining,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrajectoryPoint {
    pub day: u32,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartAnnotation {
    pub day: u32,
    pub weight_kg: f64,
    pub label: String,
}

/// Presentation data for the weight progress chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub start: ChartAnnotation,
    pub target: ChartAnnotation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressProjection {
    pub status: ProjectionStatus,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub days: u32,
    pub message: String,
    pub trajectory: Vec<TrajectoryPoint>,
    pub chart: Option<ProgressChart>,
}
