use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level the API assigns to a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-side difficulty filter: the whole collection, or a single level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Whether a recipe at this difficulty passes the filter.
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(level) => *level == difficulty,
        }
    }
}

/// A recipe as served by the DummyJSON API.
///
/// Fields are camelCase on the wire. Records are immutable from this crate's
/// perspective; the store replaces its collection wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub calories_per_serving: f64,
    pub tags: Vec<String>,
    pub user_id: u32,
    /// URL of the recipe photo.
    pub image: String,
    /// Average rating, 0 to 5.
    pub rating: f64,
    pub review_count: u32,
    pub meal_type: Vec<String>,
}

/// Envelope the list endpoint wraps its results in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        assert!(DifficultyFilter::All.matches(Difficulty::Easy));
        assert!(DifficultyFilter::All.matches(Difficulty::Hard));
        assert!(DifficultyFilter::Only(Difficulty::Medium).matches(Difficulty::Medium));
        assert!(!DifficultyFilter::Only(Difficulty::Medium).matches(Difficulty::Hard));
    }

    #[test]
    fn test_recipe_deserializes_camel_case() {
        let json = r#"{
            "id": 1,
            "name": "Classic Margherita Pizza",
            "ingredients": ["Pizza dough", "Tomato sauce"],
            "instructions": ["Preheat the oven to 475F."],
            "prepTimeMinutes": 20,
            "cookTimeMinutes": 15,
            "servings": 4,
            "difficulty": "Easy",
            "cuisine": "Italian",
            "caloriesPerServing": 300,
            "tags": ["Pizza", "Italian"],
            "userId": 166,
            "image": "https://cdn.dummyjson.com/recipe-images/1.webp",
            "rating": 4.6,
            "reviewCount": 98,
            "mealType": ["Dinner"]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.prep_time_minutes, 20);
        assert_eq!(recipe.meal_type, vec!["Dinner"]);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let result: Result<Difficulty, _> = serde_json::from_str("\"Impossible\"");
        assert!(result.is_err());
    }
}
