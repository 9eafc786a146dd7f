//! Reference Data
//!
//! Read-only planner content (`data.json`): schedule, grocery list,
//! supplements, recipes and workouts. Object order in the source file is the
//! display order, so maps are `IndexMap`s.

use indexmap::IndexMap;
use serde::Deserialize;

use super::route::Route;

/// Key of the summary list inside the `nutrition` object
const DAILY_SUMMARY_KEY: &str = "Daily Nutrition Summary";

/// One `[title, meta]` pair in a day's schedule
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleEntry(pub String, pub String);

impl ScheduleEntry {
    pub fn title(&self) -> &str {
        &self.0
    }

    pub fn meta(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SupplementLists {
    #[serde(rename = "SUPPLEMENTS", default)]
    pub supplements: Vec<String>,
    #[serde(rename = "SKINCARE", default)]
    pub skincare: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Yield")]
    pub yield_amount: Option<String>,
    #[serde(rename = "Ingredients")]
    pub ingredients: Option<Vec<String>>,
    #[serde(rename = "Instructions")]
    pub instructions: Option<Vec<String>>,
    #[serde(rename = "Storage")]
    pub storage: Option<String>,
    #[serde(rename = "Nutrition")]
    pub nutrition: Option<String>,
}

/// Raw `nutrition` entries: the summary is a string list, recipes are objects
#[derive(Deserialize)]
#[serde(untagged)]
pub enum NutritionEntry {
    Summary(Vec<String>),
    Recipe(Recipe),
}

/// Recipes keyed by name plus the daily summary list
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, NutritionEntry>")]
pub struct Nutrition {
    pub summary: Vec<String>,
    pub recipes: IndexMap<String, Recipe>,
}

impl From<IndexMap<String, NutritionEntry>> for Nutrition {
    fn from(entries: IndexMap<String, NutritionEntry>) -> Self {
        let mut nutrition = Nutrition::default();
        for (name, entry) in entries {
            match entry {
                NutritionEntry::Summary(lines) if name == DAILY_SUMMARY_KEY => {
                    nutrition.summary = lines;
                }
                // Any other bare list is treated as an ingredients-only recipe
                NutritionEntry::Summary(lines) => {
                    nutrition.recipes.insert(
                        name,
                        Recipe {
                            ingredients: Some(lines),
                            ..Recipe::default()
                        },
                    );
                }
                NutritionEntry::Recipe(recipe) => {
                    nutrition.recipes.insert(name, recipe);
                }
            }
        }
        nutrition
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub sets: String,
    #[serde(default)]
    pub cues: String,
}

/// The whole reference data file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub schedule: IndexMap<String, Vec<ScheduleEntry>>,
    pub grocery: Vec<String>,
    pub supplements: SupplementLists,
    pub nutrition: Nutrition,
    pub workouts: IndexMap<String, Vec<Exercise>>,
}

impl ReferenceData {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn day(&self, name: &str) -> Option<&[ScheduleEntry]> {
        self.schedule.get(name).map(Vec::as_slice)
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.nutrition.recipes.get(name)
    }

    pub fn workout(&self, name: &str) -> Option<&[Exercise]> {
        self.workouts.get(name).map(Vec::as_slice)
    }

    /// For deep links to a day / recipe / workout that does not exist,
    /// the listing page to show instead
    pub fn redirect_for(&self, route: &Route) -> Option<Route> {
        let exists = match route {
            Route::Day(name) => self.day(name).is_some(),
            Route::Recipe(name) => self.recipe(name).is_some(),
            Route::Workout(name) => self.workout(name).is_some(),
            _ => true,
        };
        if exists {
            None
        } else {
            route.listing()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "schedule": {
            "Monday": [["Wake up", "6:00"], ["Gym", "Workout A"]],
            "Tuesday": [["Rest", ""]]
        },
        "grocery": ["Milk", "Bread", "Eggs"],
        "supplements": {"SUPPLEMENTS": ["Vitamin D"], "SKINCARE": ["Sunscreen"]},
        "nutrition": {
            "Daily Nutrition Summary": ["2,400 kcal", "180 g protein"],
            "Morning Shake": {"Yield": "1 shake", "Ingredients": ["Milk"], "Instructions": ["Blend"]},
            "Coconut Rice": {"Storage": "Fridge 4 days"}
        },
        "workouts": {
            "Workout A": [{"name": "Squat", "sets": "3x5", "cues": "Brace"}],
            "Workout B": [{"name": "Deadlift", "sets": "1x5"}]
        }
    }"#;

    #[test]
    fn test_parse_keeps_source_order() {
        let data = ReferenceData::from_json(SAMPLE).unwrap();
        let days: Vec<_> = data.schedule.keys().map(String::as_str).collect();
        assert_eq!(days, ["Monday", "Tuesday"]);
        let recipes: Vec<_> = data.nutrition.recipes.keys().map(String::as_str).collect();
        assert_eq!(recipes, ["Morning Shake", "Coconut Rice"]);
        assert_eq!(data.nutrition.summary.len(), 2);
    }

    #[test]
    fn test_parse_entities() {
        let data = ReferenceData::from_json(SAMPLE).unwrap();
        let monday = data.day("Monday").unwrap();
        assert_eq!(monday[1].title(), "Gym");
        assert_eq!(monday[1].meta(), "Workout A");

        let shake = data.recipe("Morning Shake").unwrap();
        assert_eq!(shake.yield_amount.as_deref(), Some("1 shake"));
        assert!(data.recipe("Coconut Rice").unwrap().ingredients.is_none());

        let b = data.workout("Workout B").unwrap();
        assert_eq!(b[0].cues, "");
        assert_eq!(data.supplements.skincare, ["Sunscreen"]);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let data = ReferenceData::from_json(r#"{"grocery": ["Milk"]}"#).unwrap();
        assert!(data.schedule.is_empty());
        assert!(data.nutrition.summary.is_empty());
        assert_eq!(data.grocery.len(), 1);
    }

    #[test]
    fn test_redirect_for_missing_entities() {
        let data = ReferenceData::from_json(SAMPLE).unwrap();
        assert_eq!(
            data.redirect_for(&Route::Day("NonexistentDay".into())),
            Some(Route::Schedule)
        );
        assert_eq!(data.redirect_for(&Route::Recipe("Pizza".into())), Some(Route::Nutrition));
        assert_eq!(data.redirect_for(&Route::Workout(String::new())), Some(Route::Workouts));
        assert_eq!(data.redirect_for(&Route::Day("Monday".into())), None);
        assert_eq!(data.redirect_for(&Route::Grocery), None);
    }
}
