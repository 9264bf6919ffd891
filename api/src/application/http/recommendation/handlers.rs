pub mod get_exercises;
pub mod get_meal_plan;
