//! Wire-format tests against a captured DummyJSON list payload.

use std::fs;
use std::path::Path;

use cazuela::{Difficulty, RecipesResponse};

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

#[test]
fn list_payload_deserializes() {
    let body = fixture("recipes_page.json");
    let response: RecipesResponse = serde_json::from_str(&body).unwrap();

    assert_eq!(response.total, 50);
    assert_eq!(response.skip, 0);
    assert_eq!(response.recipes.len(), 3);

    let pizza = &response.recipes[0];
    assert_eq!(pizza.id, 1);
    assert_eq!(pizza.name, "Classic Margherita Pizza");
    assert_eq!(pizza.difficulty, Difficulty::Easy);
    assert_eq!(pizza.prep_time_minutes, 20);
    assert_eq!(pizza.cook_time_minutes, 15);
    assert_eq!(pizza.calories_per_serving, 300.0);
    assert_eq!(pizza.user_id, 166);
    assert_eq!(pizza.meal_type, vec!["Dinner"]);

    assert_eq!(response.recipes[1].difficulty, Difficulty::Medium);
    assert_eq!(response.recipes[2].tags, vec!["Cookies", "Dessert", "Baking"]);
}

#[test]
fn round_trip_preserves_record() {
    let body = fixture("recipes_page.json");
    let response: RecipesResponse = serde_json::from_str(&body).unwrap();

    let reencoded = serde_json::to_string(&response.recipes[1]).unwrap();
    let back: cazuela::Recipe = serde_json::from_str(&reencoded).unwrap();
    assert_eq!(back, response.recipes[1]);
}
