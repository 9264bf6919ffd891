pub mod assess_bmi;
pub mod convert_height;
pub mod create_plan;
pub mod project_progress;
