use crate::domain::{anthropometry::entities::Goal, recommendation::entities::DietPreference};

pub(super) struct BaseMeal {
    pub food: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub fiber: u32,
    pub benefit: &'static str,
}

/// Morning, Lunch, Evening, Dinner.
pub(super) type BaseMealPlan = [BaseMeal; 4];

const fn meal(
    food: &'static str,
    calories: u32,
    protein: u32,
    fiber: u32,
    benefit: &'static str,
) -> BaseMeal {
    BaseMeal {
        food,
        calories,
        protein,
        fiber,
        benefit,
    }
}

static GAIN_VEGETARIAN: BaseMealPlan = [
    meal(
        "Banana shake + Oats with milk & nuts",
        450,
        15,
        8,
        "Boosts energy, rich in potassium, protein & fiber.",
    ),
    meal(
        "Paneer curry with roti + salad",
        600,
        25,
        10,
        "High protein meal for muscle gain with balanced carbs.",
    ),
    meal(
        "Dry fruits + Protein smoothie",
        300,
        10,
        5,
        "Healthy fats & protein for recovery.",
    ),
    meal(
        "Dal, rice & mixed vegetable curry",
        500,
        20,
        12,
        "Balanced dinner with protein & vitamins.",
    ),
];

static GAIN_NON_VEGETARIAN: BaseMealPlan = [
    meal(
        "Egg omelette + Toast + Milk",
        400,
        22,
        4,
        "Rich in protein, supports muscle growth.",
    ),
    meal(
        "Chicken curry with rice + salad",
        650,
        35,
        8,
        "High protein with carbs for strength.",
    ),
    meal(
        "Boiled eggs + Banana shake",
        300,
        18,
        4,
        "Quick recovery snack.",
    ),
    meal(
        "Grilled chicken + Roti + Vegetables",
        550,
        40,
        10,
        "Protein-rich dinner for overnight repair.",
    ),
];

static MAINTAIN_VEGETARIAN: BaseMealPlan = [
    meal(
        "Green tea + Poha/Upma",
        300,
        8,
        5,
        "Light breakfast, keeps metabolism active.",
    ),
    meal(
        "Quinoa salad with beans",
        400,
        18,
        12,
        "Balanced carbs, protein, and fiber.",
    ),
    meal(
        "Fruits + Yogurt",
        200,
        10,
        4,
        "Probiotics & antioxidants.",
    ),
    meal(
        "Vegetable stir fry + Roti",
        350,
        12,
        10,
        "Low fat dinner, easy to digest.",
    ),
];

static MAINTAIN_NON_VEGETARIAN: BaseMealPlan = [
    meal(
        "Boiled eggs + Green tea",
        250,
        12,
        0,
        "High protein breakfast to keep energy stable.",
    ),
    meal(
        "Grilled fish with brown rice",
        450,
        28,
        6,
        "Omega-3 fatty acids for heart health with clean carbs.",
    ),
    meal(
        "Chicken soup + Salad",
        220,
        18,
        5,
        "Light evening snack rich in protein.",
    ),
    meal(
        "Egg curry + Roti + Vegetables",
        400,
        22,
        8,
        "Balanced meal with protein, carbs, and fiber.",
    ),
];

static LOSS_VEGETARIAN: BaseMealPlan = [
    meal(
        "Warm water + Sprouts salad",
        180,
        10,
        8,
        "Low calorie, protein & fiber-rich.",
    ),
    meal(
        "Vegetable soup + Brown rice",
        300,
        12,
        10,
        "Keeps you full, aids digestion.",
    ),
    meal(
        "Apple + Green tea",
        150,
        1,
        5,
        "Low calorie snack with antioxidants.",
    ),
    meal(
        "Dal + Steamed vegetables",
        250,
        14,
        9,
        "Light dinner with protein & fiber.",
    ),
];

static LOSS_NON_VEGETARIAN: BaseMealPlan = [
    meal(
        "Egg whites + Green tea",
        150,
        12,
        0,
        "Lean protein breakfast, helps fat loss.",
    ),
    meal(
        "Grilled chicken breast + Salad",
        300,
        32,
        6,
        "Low calorie, high protein to preserve muscle.",
    ),
    meal(
        "Tuna salad or Boiled eggs",
        200,
        25,
        2,
        "Protein-rich snack to control hunger.",
    ),
    meal(
        "Grilled fish + Steamed vegetables",
        280,
        30,
        8,
        "High protein, omega-3 fats, light dinner.",
    ),
];

pub(super) fn base_meal_plan(goal: Goal, diet: DietPreference) -> &'static BaseMealPlan {
    match (goal, diet) {
        (Goal::WeightGain, DietPreference::Vegetarian) => &GAIN_VEGETARIAN,
        (Goal::WeightGain, DietPreference::NonVegetarian) => &GAIN_NON_VEGETARIAN,
        (Goal::MaintainWeight, DietPreference::Vegetarian) => &MAINTAIN_VEGETARIAN,
        (Goal::MaintainWeight, DietPreference::NonVegetarian) => &MAINTAIN_NON_VEGETARIAN,
        (Goal::WeightLoss, DietPreference::Vegetarian) => &LOSS_VEGETARIAN,
        (Goal::WeightLoss, DietPreference::NonVegetarian) => &LOSS_NON_VEGETARIAN,
    }
}

/// The first three exercises per goal; the fourth is gender-tailored.
pub(super) fn base_exercises(goal: Goal) -> ([&'static str; 3], &'static str) {
    match goal {
        Goal::WeightGain => (
            [
                "🏋️ Heavy strength training (4–5 times/week)",
                "🍑 Squats, Deadlifts, Bench Press",
                "🏃‍♂️ Light cardio (15 min)",
            ],
            "Focus on progressive overload & compound lifts",
        ),
        Goal::MaintainWeight => (
            [
                "🏃 Jogging/Walking (30 min)",
                "🧘 Yoga or Stretching",
                "💪 Moderate strength training (2–3 times/week)",
            ],
            "Include flexibility & balance exercises",
        ),
        Goal::WeightLoss => (
            [
                "🏃 Cardio (Running, Cycling, HIIT – 30–40 min)",
                "🏋️ Strength training (3–4 times/week)",
                "🧘 Yoga/Stretching for recovery",
            ],
            "Emphasize calorie burn & core workouts",
        ),
    }
}

pub(super) const MEAL_IMAGES: [(&str, &str); 4] = [
    (
        "Banana shake",
        "https://www.vegrecipesofindia.com/wp-content/uploads/2021/04/banana-shake-recipe-1-500x500.jpg",
    ),
    (
        "Paneer curry",
        "https://www.vegrecipesofindia.com/wp-content/uploads/2021/01/paneer-curry-1-500x500.jpg",
    ),
    (
        "Chicken curry",
        "https://www.indianhealthyrecipes.com/wp-content/uploads/2021/07/chicken-curry-recipe.jpg",
    ),
    (
        "Grilled fish",
        "https://www.eatwell101.com/wp-content/uploads/2019/06/Grilled-Fish-Recipe.jpg",
    ),
];

pub(super) const DEFAULT_MEAL_IMAGE: &str = "https://img.icons8.com/color/48/meal.png";

pub(super) const EXERCISE_IMAGES: [(&str, &str); 5] = [
    ("Squats", "https://images.pexels.com/photos/8411307/pexels-photo-8411307.jpeg"),
    ("Deadlifts", "https://images.pexels.com/photos/1552249/pexels-photo-1552249.jpeg"),
    ("Bench Press", "https://images.pexels.com/photos/3838389/pexels-photo-3838389.jpeg"),
    ("Running", "https://images.pexels.com/photos/1199590/pexels-photo-1199590.jpeg"),
    ("Yoga", "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg"),
];

pub(super) const DEFAULT_EXERCISE_IMAGE: &str = "https://img.icons8.com/color/48/dumbbell.png";
