//! Recipe catalog adapter - built-in reference data
//!
//! The catalog is the fixed, in-memory recipe collection the whole
//! application reads from. There is no backing service; the built-in data
//! set plays the role a recipe API would in a production deployment, and
//! the catalog also answers the "remote" suggestion fetches through the
//! [SuggestionSource] port.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Difficulty, Recipe};
use crate::ports::SuggestionSource;

/// Maximum number of typeahead suggestions returned for a query
pub const MAX_SUGGESTIONS: usize = 8;

/// Fixed, read-only recipe collection
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// The built-in recipe data set.
    pub fn builtin() -> Self {
        Self {
            recipes: builtin_recipes(),
        }
    }

    /// A catalog over an arbitrary recipe list (tests, alternate data sets).
    ///
    /// The caller should ensure ids are unique.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Every recipe, in catalog (insertion) order.
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Free-text search: case-insensitive substring match against title,
    /// description, cuisine, category, tags and ingredients (any field
    /// matching qualifies the recipe).
    ///
    /// Results come back in catalog order, which is what "relevance" means
    /// downstream. A blank query matches nothing - "browse everything" is a
    /// separate surface ([RecipeCatalog::all]), not an empty search.
    pub fn search(&self, query: &str) -> Vec<Recipe> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        self.recipes
            .iter()
            .filter(|recipe| recipe.matches(query))
            .cloned()
            .collect()
    }

    /// Typeahead candidates for a partial query: matching recipe titles,
    /// tags and cuisines, case-insensitively, de-duplicated, capped at
    /// [MAX_SUGGESTIONS].
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<String> = Vec::new();
        let mut push = |candidate: &str, candidates: &mut Vec<String>| {
            if candidate.to_lowercase().contains(&needle)
                && !candidates.iter().any(|existing| existing == candidate)
            {
                candidates.push(candidate.to_string());
            }
        };

        for recipe in &self.recipes {
            push(&recipe.title, &mut candidates);
            for tag in &recipe.tags {
                push(tag, &mut candidates);
            }
            push(&recipe.cuisine, &mut candidates);
        }

        candidates.truncate(MAX_SUGGESTIONS);
        candidates
    }

    /// Resolve a list of recipe ids (a user's favorites or saved list) to
    /// recipes, silently dropping ids with no catalog entry.
    pub fn resolve_ids(&self, ids: &[String]) -> Vec<Recipe> {
        ids.iter()
            .filter_map(|id| self.get_by_id(id))
            .cloned()
            .collect()
    }

    /// Recipes related to `recipe_id`: same cuisine or category, excluding
    /// the recipe itself, at most `limit` entries in catalog order.
    pub fn related(&self, recipe_id: &str, limit: usize) -> Vec<Recipe> {
        let Some(recipe) = self.get_by_id(recipe_id) else {
            return Vec::new();
        };

        self.recipes
            .iter()
            .filter(|other| {
                other.id != recipe.id
                    && (other.cuisine == recipe.cuisine || other.category == recipe.category)
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// [SuggestionSource] answering from the catalog behind a simulated fetch
/// latency.
pub struct CatalogSuggestionSource {
    catalog: Arc<RecipeCatalog>,
    delay: Duration,
}

impl CatalogSuggestionSource {
    pub fn new(catalog: Arc<RecipeCatalog>, delay: Duration) -> Self {
        Self { catalog, delay }
    }
}

#[async_trait]
impl SuggestionSource for CatalogSuggestionSource {
    fn name(&self) -> &str {
        "catalog"
    }

    async fn fetch(&self, query: &str) -> Result<Vec<String>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.catalog.suggestions(query))
    }
}

/// The eight built-in recipes
fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Classic Margherita Pizza".to_string(),
            description: "A simple yet delicious pizza with fresh tomatoes, mozzarella, and basil"
                .to_string(),
            image: "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            cook_time: 25,
            servings: 4,
            difficulty: Difficulty::Medium,
            ingredients: vec![
                "Pizza dough".to_string(),
                "Tomato sauce".to_string(),
                "Fresh mozzarella".to_string(),
                "Fresh basil".to_string(),
                "Olive oil".to_string(),
            ],
            instructions: vec![
                "Preheat oven to 475°F".to_string(),
                "Roll out dough".to_string(),
                "Add sauce and cheese".to_string(),
                "Bake for 12-15 minutes".to_string(),
            ],
            cuisine: "Italian".to_string(),
            category: "Main Course".to_string(),
            calories: 285,
            rating: 4.8,
            tags: vec![
                "vegetarian".to_string(),
                "italian".to_string(),
                "pizza".to_string(),
                "cheese".to_string(),
            ],
        },
        Recipe {
            id: "2".to_string(),
            title: "Chicken Tikka Masala".to_string(),
            description: "Creamy and flavorful Indian curry with tender chicken pieces".to_string(),
            image: "https://images.pexels.com/photos/2474658/pexels-photo-2474658.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            cook_time: 45,
            servings: 6,
            difficulty: Difficulty::Medium,
            ingredients: vec![
                "Chicken breast".to_string(),
                "Yogurt".to_string(),
                "Tomato sauce".to_string(),
                "Heavy cream".to_string(),
                "Spices".to_string(),
            ],
            instructions: vec![
                "Marinate chicken".to_string(),
                "Cook chicken".to_string(),
                "Prepare sauce".to_string(),
                "Combine and simmer".to_string(),
            ],
            cuisine: "Indian".to_string(),
            category: "Main Course".to_string(),
            calories: 320,
            rating: 4.9,
            tags: vec![
                "spicy".to_string(),
                "indian".to_string(),
                "chicken".to_string(),
                "curry".to_string(),
            ],
        },
        Recipe {
            id: "3".to_string(),
            title: "Caesar Salad".to_string(),
            description: "Crisp romaine lettuce with creamy Caesar dressing and parmesan"
                .to_string(),
            image: "https://images.pexels.com/photos/1639562/pexels-photo-1639562.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            cook_time: 15,
            servings: 4,
            difficulty: Difficulty::Easy,
            ingredients: vec![
                "Romaine lettuce".to_string(),
                "Parmesan cheese".to_string(),
                "Croutons".to_string(),
                "Caesar dressing".to_string(),
            ],
            instructions: vec![
                "Wash and chop lettuce".to_string(),
                "Make dressing".to_string(),
                "Toss ingredients".to_string(),
                "Serve immediately".to_string(),
            ],
            cuisine: "American".to_string(),
            category: "Salad".to_string(),
            calories: 180,
            rating: 4.6,
            tags: vec![
                "salad".to_string(),
                "vegetarian".to_string(),
                "quick".to_string(),
                "healthy".to_string(),
            ],
        },
        Recipe {
            id: "4".to_string(),
            title: "Chocolate Chip Cookies".to_string(),
            description: "Soft and chewy homemade cookies with chocolate chips".to_string(),
            image: "https://images.pexels.com/photos/230325/pexels-photo-230325.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            cook_time: 20,
            servings: 24,
            difficulty: Difficulty::Easy,
            ingredients: vec![
                "Flour".to_string(),
                "Butter".to_string(),
                "Brown sugar".to_string(),
                "Chocolate chips".to_string(),
                "Eggs".to_string(),
            ],
            instructions: vec![
                "Mix dry ingredients".to_string(),
                "Cream butter and sugar".to_string(),
                "Combine all".to_string(),
                "Bake for 10-12 minutes".to_string(),
            ],
            cuisine: "American".to_string(),
            category: "Dessert".to_string(),
            calories: 150,
            rating: 4.7,
            tags: vec![
                "dessert".to_string(),
                "cookies".to_string(),
                "chocolate".to_string(),
                "sweet".to_string(),
            ],
        },
        Recipe {
            id: "5".to_string(),
            title: "Beef Tacos".to_string(),
            description: "Seasoned ground beef tacos with fresh toppings".to_string(),
            image: "https://images.pexels.com/photos/461198/pexels-photo-461198.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            cook_time: 30,
            servings: 4,
            difficulty: Difficulty::Easy,
            ingredients: vec![
                "Ground beef".to_string(),
                "Taco shells".to_string(),
                "Lettuce".to_string(),
                "Tomatoes".to_string(),
                "Cheese".to_string(),
                "Sour cream".to_string(),
            ],
            instructions: vec![
                "Cook beef with seasonings".to_string(),
                "Warm taco shells".to_string(),
                "Prepare toppings".to_string(),
                "Assemble tacos".to_string(),
            ],
            cuisine: "Mexican".to_string(),
            category: "Main Course".to_string(),
            calories: 350,
            rating: 4.5,
            tags: vec![
                "mexican".to_string(),
                "beef".to_string(),
                "tacos".to_string(),
                "quick".to_string(),
            ],
        },
        Recipe {
            id: "6".to_string(),
            title: "Greek Salad".to_string(),
            description: "Fresh Mediterranean salad with feta cheese and olives".to_string(),
            image: "https://images.pexels.com/photos/1059905/pexels-photo-1059905.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            cook_time: 15,
            servings: 4,
            difficulty: Difficulty::Easy,
            ingredients: vec![
                "Cucumber".to_string(),
                "Tomatoes".to_string(),
                "Red onion".to_string(),
                "Feta cheese".to_string(),
                "Olives".to_string(),
                "Olive oil".to_string(),
            ],
            instructions: vec![
                "Chop vegetables".to_string(),
                "Make dressing".to_string(),
                "Combine ingredients".to_string(),
                "Add feta and olives".to_string(),
            ],
            cuisine: "Greek".to_string(),
            category: "Salad".to_string(),
            calories: 210,
            rating: 4.4,
            tags: vec![
                "mediterranean".to_string(),
                "healthy".to_string(),
                "vegetarian".to_string(),
                "fresh".to_string(),
            ],
        },
        Recipe {
            id: "7".to_string(),
            title: "Spaghetti Carbonara".to_string(),
            description: "Classic Italian pasta with eggs, cheese, and pancetta".to_string(),
            image: "https://images.pexels.com/photos/4518842/pexels-photo-4518842.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            cook_time: 25,
            servings: 4,
            difficulty: Difficulty::Medium,
            ingredients: vec![
                "Spaghetti".to_string(),
                "Eggs".to_string(),
                "Parmesan cheese".to_string(),
                "Pancetta".to_string(),
                "Black pepper".to_string(),
            ],
            instructions: vec![
                "Cook pasta".to_string(),
                "Fry pancetta".to_string(),
                "Mix eggs and cheese".to_string(),
                "Combine while hot".to_string(),
            ],
            cuisine: "Italian".to_string(),
            category: "Main Course".to_string(),
            calories: 420,
            rating: 4.9,
            tags: vec![
                "italian".to_string(),
                "pasta".to_string(),
                "creamy".to_string(),
                "traditional".to_string(),
            ],
        },
        Recipe {
            id: "8".to_string(),
            title: "Thai Green Curry".to_string(),
            description: "Aromatic Thai curry with coconut milk and vegetables".to_string(),
            image: "https://images.pexels.com/photos/2097090/pexels-photo-2097090.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            cook_time: 35,
            servings: 4,
            difficulty: Difficulty::Medium,
            ingredients: vec![
                "Green curry paste".to_string(),
                "Coconut milk".to_string(),
                "Vegetables".to_string(),
                "Thai basil".to_string(),
                "Rice".to_string(),
            ],
            instructions: vec![
                "Heat curry paste".to_string(),
                "Add coconut milk".to_string(),
                "Add vegetables".to_string(),
                "Simmer and serve".to_string(),
            ],
            cuisine: "Thai".to_string(),
            category: "Main Course".to_string(),
            calories: 280,
            rating: 4.6,
            tags: vec![
                "thai".to_string(),
                "curry".to_string(),
                "vegetarian".to_string(),
                "spicy".to_string(),
            ],
        },
    ]
}
