use crate::domain::{
    anthropometry::entities::{Gender, Goal},
    recommendation::{
        entities::{DietPreference, MacroAdjustment, MealEntry, MealPlan},
        table::{
            BaseMeal, DEFAULT_EXERCISE_IMAGE, DEFAULT_MEAL_IMAGE, EXERCISE_IMAGES, MEAL_IMAGES,
            base_exercises, base_meal_plan,
        },
    },
};

pub fn gender_adjustment(gender: Gender) -> MacroAdjustment {
    match gender {
        Gender::Male => MacroAdjustment {
            calories: 100,
            protein: 5,
        },
        Gender::Female => MacroAdjustment {
            calories: -50,
            protein: -2,
        },
    }
}

fn adjusted(meal: &BaseMeal, adjustment: MacroAdjustment) -> MealEntry {
    // Saturates at zero: the lowest protein entry is below the female offset.
    MealEntry {
        food: meal.food.to_string(),
        calories: meal.calories.saturating_add_signed(adjustment.calories),
        protein: meal.protein.saturating_add_signed(adjustment.protein),
        fiber: meal.fiber,
        benefit: meal.benefit.to_string(),
    }
}

pub fn suggest_meal_plan(goal: Goal, diet: DietPreference, gender: Gender) -> MealPlan {
    let adjustment = gender_adjustment(gender);
    let [morning, lunch, evening, dinner] = base_meal_plan(goal, diet);

    MealPlan {
        morning: adjusted(morning, adjustment),
        lunch: adjusted(lunch, adjustment),
        evening: adjusted(evening, adjustment),
        dinner: adjusted(dinner, adjustment),
    }
}

pub fn suggest_exercises(goal: Goal, gender: Gender) -> Vec<String> {
    let (common, tailored) = base_exercises(goal);

    common
        .iter()
        .map(|exercise| exercise.to_string())
        .chain(std::iter::once(format!("⚡ For {gender}: {tailored}")))
        .collect()
}

fn lookup_image(
    text: &str,
    table: &[(&str, &'static str)],
    fallback: &'static str,
) -> &'static str {
    let haystack = text.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| haystack.contains(&keyword.to_lowercase()))
        .map(|(_, url)| *url)
        .unwrap_or(fallback)
}

/// Illustrative picture for a meal card, matched on keywords in the food text.
pub fn meal_image_url(food: &str) -> &'static str {
    lookup_image(food, &MEAL_IMAGES, DEFAULT_MEAL_IMAGE)
}

pub fn exercise_image_url(exercise: &str) -> &'static str {
    lookup_image(exercise, &EXERCISE_IMAGES, DEFAULT_EXERCISE_IMAGE)
}
