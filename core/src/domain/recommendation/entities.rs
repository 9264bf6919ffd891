use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DietPreference {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl DietPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::NonVegetarian => "Non-Vegetarian",
        }
    }

    pub fn all() -> [DietPreference; 2] {
        [DietPreference::Vegetarian, DietPreference::NonVegetarian]
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum MealSlot {
    Morning,
    Lunch,
    Evening,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Morning,
        MealSlot::Lunch,
        MealSlot::Evening,
        MealSlot::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Morning => "Morning",
            MealSlot::Lunch => "Lunch",
            MealSlot::Evening => "Evening",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealEntry {
    pub food: String,
    pub calories: u32,
    pub protein: u32,
    pub fiber: u32,
    pub benefit: String,
}

/// One meal per time-of-day slot, always four entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MealPlan {
    pub morning: MealEntry,
    pub lunch: MealEntry,
    pub evening: MealEntry,
    pub dinner: MealEntry,
}

impl MealPlan {
    pub fn get(&self, slot: MealSlot) -> &MealEntry {
        match slot {
            MealSlot::Morning => &self.morning,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Evening => &self.evening,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &MealEntry)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Per-gender adjustment applied to every meal after lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroAdjustment {
    pub calories: i32,
    pub protein: i32,
}
